#![forbid(unsafe_code)]

//! Construction options for a [`RadioGroup`](crate::radio::RadioGroup).

use std::fmt;
use std::rc::Rc;

use radiogroup_core::IdGenerator;

use crate::form::FormParent;
use crate::option::OptionSource;
use crate::value::Selection;

/// Record field holding the identifier when the collection declares none.
pub const DEFAULT_ID_ATTRIBUTE: &str = "id";
/// Record field holding the display text.
pub const DEFAULT_TEXT_ATTRIBUTE: &str = "text";
/// Root class while the control is valid.
pub const DEFAULT_VALID_CLASS: &str = "input-valid";
/// Root class while a message is surfaced.
pub const DEFAULT_INVALID_CLASS: &str = "input-invalid";
/// Root marker while nothing is selected.
pub const UNSELECTED_CLASS: &str = "unselected";

/// Builder for a radio group.
///
/// `name` and `options` are mandatory; construction fails without them.
/// Empty strings count as unset for every text option.
#[derive(Default)]
pub struct RadioConfig {
    pub name: Option<String>,
    pub options: Option<OptionSource>,
    /// Initial value, also restored by `reset`.
    pub value: Selection,
    /// Defaults to `name`.
    pub label: Option<String>,
    pub required: bool,
    /// Store whole records instead of their identifiers (collections only).
    pub yield_record: bool,
    /// Defaults to the collection's main index, then [`DEFAULT_ID_ATTRIBUTE`].
    pub id_attribute: Option<String>,
    pub text_attribute: Option<String>,
    pub required_message: Option<String>,
    pub valid_class: Option<String>,
    pub invalid_class: Option<String>,
    /// Space-separated extra classes for the root.
    pub class_name: Option<String>,
    /// Surface validation failures from the start instead of after
    /// `before_submit`.
    pub should_validate: bool,
    pub parent: Option<Rc<dyn FormParent>>,
    /// Defaults to a fresh [`SequentialIds`](radiogroup_core::SequentialIds)
    /// per control.
    pub id_generator: Option<Rc<dyn IdGenerator>>,
}

impl fmt::Debug for RadioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioConfig")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("yield_record", &self.yield_record)
            .field("id_attribute", &self.id_attribute)
            .field("text_attribute", &self.text_attribute)
            .field("should_validate", &self.should_validate)
            .field("parent", &self.parent.is_some())
            .finish_non_exhaustive()
    }
}

impl RadioConfig {
    /// Config with the two mandatory fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, options: impl Into<OptionSource>) -> Self {
        Self {
            name: Some(name.into()),
            options: Some(options.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: impl Into<OptionSource>) -> Self {
        self.options = Some(options.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<Selection>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn yield_record(mut self, yield_record: bool) -> Self {
        self.yield_record = yield_record;
        self
    }

    #[must_use]
    pub fn id_attribute(mut self, field: impl Into<String>) -> Self {
        self.id_attribute = Some(field.into());
        self
    }

    #[must_use]
    pub fn text_attribute(mut self, field: impl Into<String>) -> Self {
        self.text_attribute = Some(field.into());
        self
    }

    #[must_use]
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn valid_class(mut self, class: impl Into<String>) -> Self {
        self.valid_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn invalid_class(mut self, class: impl Into<String>) -> Self {
        self.invalid_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn class_name(mut self, classes: impl Into<String>) -> Self {
        self.class_name = Some(classes.into());
        self
    }

    #[must_use]
    pub fn should_validate(mut self, should_validate: bool) -> Self {
        self.should_validate = should_validate;
        self
    }

    #[must_use]
    pub fn parent(mut self, parent: Rc<dyn FormParent>) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn id_generator(mut self, ids: Rc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(ids);
        self
    }
}

/// `Some(s)` unless `s` is absent or empty.
pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_mandatory_fields() {
        let c = RadioConfig::new("size", OptionSource::list(["s", "m"]));
        assert_eq!(c.name.as_deref(), Some("size"));
        assert!(c.options.is_some());
        assert_eq!(c.value, Selection::None);
        assert!(!c.required);
        assert!(!c.should_validate);
    }

    #[test]
    fn builder_chain() {
        let c = RadioConfig::default()
            .name("color")
            .options(OptionSource::list(["red"]))
            .value("red")
            .required(true)
            .label("Colour")
            .class_name("a b");
        assert_eq!(c.value, Selection::from("red"));
        assert_eq!(c.label.as_deref(), Some("Colour"));
        assert!(c.required);
        assert!(format!("{c:?}").contains("color"));
    }

    #[test]
    fn empty_strings_are_unset() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
