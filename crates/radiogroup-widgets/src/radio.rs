#![forbid(unsafe_code)]

//! Radio group controller.
//!
//! [`RadioGroup`] keeps one canonical [`Selection`] in sync with its options,
//! its validity, and the choices rendered on a [`ChoiceSurface`].
//!
//! # Lifecycle
//!
//! 1. `new` checks the mandatory options, renders, applies the initial value
//!    and runs one validation pass.
//! 2. `set_value`, `handle_change` and `reset` move the value; each effective
//!    change re-validates, re-syncs the rendered selection and notifies the
//!    parent, in that order.
//! 3. A live collection re-renders the choices on every added record; the
//!    stored value is left alone.
//! 4. `remove` stops listening for changes, drops the collection
//!    subscription and detaches the surface.
//!
//! # Invariants
//!
//! 1. At most one rendered choice is checked, and which one depends only on
//!    the stored value.
//! 2. Setting a value loosely equal to the current one does nothing: no
//!    validation, no render sync, no parent notification.
//! 3. `is_valid()` is `true` whenever the control is not required.
//! 4. Validation failures are only surfaced once `should_validate` is set.
//! 5. The parent is notified with no internal borrow held, so it may read
//!    or drive the control.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Missing `name` / `options` | `new` returns [`RadioError`] |
//! | Lookup matches no record | value becomes [`Selection::Unresolved`] |
//! | Change after `remove` | ignored |
//! | Record added mid-operation | refresh is queued and applied before the operation returns |

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use radiogroup_core::{IdGenerator, RecordRef, SequentialIds, Subscription};
use tracing::{debug, debug_span, trace};

use crate::config::{
    DEFAULT_ID_ATTRIBUTE, DEFAULT_INVALID_CLASS, DEFAULT_TEXT_ATTRIBUTE, DEFAULT_VALID_CLASS,
    RadioConfig, UNSELECTED_CLASS, non_empty,
};
use crate::error::{RadioError, Result};
use crate::form::{FormControl, FormParent};
use crate::option::{OptionAdapter, OptionSource};
use crate::resolver::ValueResolver;
use crate::surface::{ChoiceSurface, RenderedChoice};
use crate::validation::{ChoiceContext, DEFAULT_REQUIRED_MESSAGE, RequiredChoice, Validator};
use crate::value::Selection;

/// Observable selection state of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    /// Token of the checked choice.
    Selected(String),
}

struct State<S> {
    name: String,
    label: String,
    options: OptionSource,
    value: Selection,
    starting_value: Selection,
    yield_record: bool,
    required: bool,
    valid: bool,
    should_validate: bool,
    id_attribute: String,
    text_attribute: String,
    required_message: String,
    valid_class: String,
    invalid_class: String,
    class_names: Vec<String>,
    message: Option<String>,
    rendered: bool,
    listening: bool,
    removed: bool,
    parent: Option<Rc<dyn FormParent>>,
    ids: Rc<dyn IdGenerator>,
    subscription: Option<Subscription>,
    surface: S,
}

struct Shared<S> {
    state: RefCell<State<S>>,
    pending_refresh: Cell<bool>,
}

/// A single-selection control over a list or live collection of options.
///
/// This is a cheap handle; clones drive the same control.
pub struct RadioGroup<S: ChoiceSurface + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: ChoiceSurface + 'static> Clone for RadioGroup<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: ChoiceSurface + 'static> fmt::Debug for RadioGroup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state();
        f.debug_struct("RadioGroup")
            .field("name", &st.name)
            .field("value", &st.value)
            .field("required", &st.required)
            .field("valid", &st.valid)
            .field("removed", &st.removed)
            .finish_non_exhaustive()
    }
}

impl<S: ChoiceSurface + 'static> RadioGroup<S> {
    /// Build, render and initialize a control.
    ///
    /// # Errors
    ///
    /// [`RadioError::MissingName`] when `name` is unset or empty,
    /// [`RadioError::MissingOptions`] when `options` is unset.
    pub fn new(config: RadioConfig, surface: S) -> Result<Self> {
        let name = non_empty(config.name).ok_or(RadioError::MissingName)?;
        let options = config.options.ok_or(RadioError::MissingOptions)?;

        let id_attribute = non_empty(config.id_attribute)
            .or_else(|| {
                options
                    .as_collection()
                    .and_then(|c| c.main_index().map(str::to_string))
            })
            .unwrap_or_else(|| DEFAULT_ID_ATTRIBUTE.to_string());
        let class_names = config
            .class_name
            .as_deref()
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        debug!(
            name = %name,
            options = options.len(),
            collection = options.is_collection(),
            "radio group created"
        );

        let state = State {
            label: non_empty(config.label).unwrap_or_else(|| name.clone()),
            name,
            options,
            value: Selection::None,
            starting_value: config.value.clone(),
            yield_record: config.yield_record,
            required: config.required,
            valid: !config.required,
            should_validate: config.should_validate,
            id_attribute,
            text_attribute: non_empty(config.text_attribute)
                .unwrap_or_else(|| DEFAULT_TEXT_ATTRIBUTE.to_string()),
            required_message: non_empty(config.required_message)
                .unwrap_or_else(|| DEFAULT_REQUIRED_MESSAGE.to_string()),
            valid_class: non_empty(config.valid_class)
                .unwrap_or_else(|| DEFAULT_VALID_CLASS.to_string()),
            invalid_class: non_empty(config.invalid_class)
                .unwrap_or_else(|| DEFAULT_INVALID_CLASS.to_string()),
            class_names,
            message: None,
            rendered: false,
            listening: false,
            removed: false,
            parent: config.parent,
            ids: config
                .id_generator
                .unwrap_or_else(|| Rc::new(SequentialIds::new())),
            subscription: None,
            surface,
        };

        let group = Self {
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                pending_refresh: Cell::new(false),
            }),
        };
        group.subscribe();
        group.render();
        if !group.set_value(config.value) {
            group.validate();
        }
        Ok(group)
    }

    fn subscribe(&self) {
        let collection = self.state().options.as_collection().cloned();
        let Some(collection) = collection else {
            return;
        };
        let weak: Weak<Shared<S>> = Rc::downgrade(&self.shared);
        let subscription = collection.on_add(move |record| Self::on_record_added(&weak, record));
        self.state_mut().subscription = Some(subscription);
    }

    fn on_record_added(weak: &Weak<Shared<S>>, record: &RecordRef) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        match shared.state.try_borrow_mut() {
            Ok(mut st) => {
                debug!(name = %st.name, record = %record, "collection grew, refreshing choices");
                st.refresh();
            }
            Err(_) => {
                trace!(record = %record, "refresh deferred until current operation completes");
                shared.pending_refresh.set(true);
                return;
            }
        }
        shared.drain_pending();
    }

    fn flush_pending(&self) {
        self.shared.drain_pending();
    }

    fn state(&self) -> Ref<'_, State<S>> {
        self.shared.state.borrow()
    }

    fn state_mut(&self) -> RefMut<'_, State<S>> {
        self.shared.state.borrow_mut()
    }

    /// Render the label and choices and start listening for changes.
    ///
    /// Does nothing once rendered.
    pub fn render(&self) {
        self.state_mut().render();
        self.flush_pending();
    }

    /// Set the value from a raw lookup (scalar, record or sentinel).
    ///
    /// Returns `false` when the input loosely equals the current value and
    /// nothing happened.
    pub fn set_value(&self, raw: impl Into<Selection>) -> bool {
        let raw = raw.into();
        let changed = {
            let mut st = self.state_mut();
            let span = debug_span!("radio.set_value", name = %st.name);
            let _guard = span.enter();
            st.apply_value(raw)
        };
        if changed {
            self.notify_parent();
        }
        self.flush_pending();
        changed
    }

    /// User picked the rendered choice whose input carries `token`.
    ///
    /// Ignored before `render` and after `remove`.
    pub fn handle_change(&self, token: &str) -> bool {
        if !self.state().listening {
            debug!(token, "change ignored, control is not listening");
            return false;
        }
        self.set_value(token)
    }

    /// Re-run the required check and update the surfaced message.
    pub fn validate(&self) -> bool {
        let valid = self.state_mut().validate();
        self.flush_pending();
        valid
    }

    /// Restore the value captured at construction.
    pub fn reset(&self) -> bool {
        let starting = self.state().starting_value.clone();
        self.set_value(starting)
    }

    /// Start surfacing validation failures, then validate.
    pub fn before_submit(&self) -> bool {
        self.state_mut().should_validate = true;
        self.validate()
    }

    /// Stop listening, drop the collection subscription, detach the surface.
    pub fn remove(&self) {
        let mut st = self.state_mut();
        if st.removed {
            return;
        }
        st.removed = true;
        st.listening = false;
        st.subscription = None;
        st.surface.detach();
        debug!(name = %st.name, "radio group removed");
    }

    fn notify_parent(&self) {
        let parent = self.state().parent.clone();
        if let Some(parent) = parent {
            parent.update(self);
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.state().name.clone()
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.state().label.clone()
    }

    #[must_use]
    pub fn value(&self) -> Selection {
        self.state().value.clone()
    }

    #[must_use]
    pub fn starting_value(&self) -> Selection {
        self.state().starting_value.clone()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state().valid
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.state().required
    }

    #[must_use]
    pub fn should_validate(&self) -> bool {
        self.state().should_validate
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.state().rendered
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.state().removed
    }

    /// Record field used as the identifier.
    #[must_use]
    pub fn id_attribute(&self) -> String {
        self.state().id_attribute.clone()
    }

    /// Message currently surfaced, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.state().message.clone()
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.state()
            .surface
            .choices()
            .iter()
            .find(|c| c.checked)
            .map_or(SelectionState::Unselected, |c| {
                SelectionState::Selected(c.token.clone())
            })
    }

    /// Run `f` with a shared borrow of the surface.
    ///
    /// Records added to the collection from inside `f` are rendered once
    /// the borrow is released.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let out = f(&self.state().surface);
        self.flush_pending();
        out
    }
}

impl<S: ChoiceSurface + 'static> FormControl for RadioGroup<S> {
    fn name(&self) -> String {
        RadioGroup::name(self)
    }

    fn value(&self) -> Selection {
        RadioGroup::value(self)
    }

    fn is_valid(&self) -> bool {
        RadioGroup::is_valid(self)
    }
}

impl<S: ChoiceSurface> Shared<S> {
    /// Apply refreshes queued while the state was borrowed.
    fn drain_pending(&self) {
        while self.pending_refresh.replace(false) {
            match self.state.try_borrow_mut() {
                Ok(mut st) => st.refresh(),
                Err(_) => {
                    self.pending_refresh.set(true);
                    return;
                }
            }
        }
    }
}

impl<S: ChoiceSurface> State<S> {
    fn resolver(&self) -> ValueResolver<'_> {
        ValueResolver::new(&self.id_attribute, self.yield_record)
    }

    fn render(&mut self) {
        if self.rendered {
            return;
        }
        for class in &self.class_names {
            self.surface.add_class(class);
        }
        self.surface.set_label(&self.label);
        self.listening = true;
        self.render_options();
        self.update_selected_option();
        self.rendered = true;
        trace!(name = %self.name, choices = self.surface.choices().len(), "radio group rendered");
    }

    fn refresh(&mut self) {
        if !self.rendered || self.removed {
            return;
        }
        self.render_options();
        self.update_selected_option();
    }

    fn apply_value(&mut self, raw: Selection) -> bool {
        if raw.loose_eq(&self.value) {
            trace!(value = %raw, "value unchanged");
            return false;
        }
        let resolved = self.resolver().resolve(&self.options, raw);
        debug!(from = %self.value, to = %resolved, "value changed");
        self.value = resolved;
        self.validate();
        self.update_selected_option();
        true
    }

    fn validate(&mut self) -> bool {
        let rule = RequiredChoice::new(self.required, self.required_message.as_str());
        let result = rule.validate(&ChoiceContext {
            options: &self.options,
            value: &self.value,
            resolver: self.resolver(),
        });
        self.valid = result.is_valid();
        let surfaced = if self.should_validate {
            result.error_message().map(str::to_string)
        } else {
            None
        };
        trace!(valid = self.valid, surfaced = surfaced.is_some(), "validated");
        self.set_message(surfaced);
        self.valid
    }

    fn set_message(&mut self, message: Option<String>) {
        if !self.surface.has_message_region() {
            self.message = message;
            return;
        }
        match &message {
            Some(text) => {
                self.surface.show_message(text);
                self.surface.add_class(&self.invalid_class);
                self.surface.remove_class(&self.valid_class);
            }
            None => {
                self.surface.hide_message();
                self.surface.add_class(&self.valid_class);
                self.surface.remove_class(&self.invalid_class);
            }
        }
        self.message = message;
    }

    fn render_options(&mut self) {
        let entries =
            OptionAdapter::new(&self.id_attribute, &self.text_attribute).entries(&self.options);
        self.surface.clear_choices();
        for entry in entries {
            let token = entry.token();
            let id = self.ids.unique_id(&format!("{}_{}", self.name, token));
            self.surface.append_choice(RenderedChoice {
                id,
                name: self.name.clone(),
                token,
                text: entry.text,
                checked: false,
            });
        }
    }

    fn update_selected_option(&mut self) {
        let token = self.resolver().lookup_token(&self.options, &self.value);
        let count = self.surface.choices().len();
        let Some(token) = token else {
            self.surface.add_class(UNSELECTED_CLASS);
            for idx in 0..count {
                if self.surface.choices()[idx].checked {
                    self.surface.set_checked(idx, false);
                }
            }
            return;
        };
        let hit = self.surface.choices().iter().position(|c| c.token == token);
        for idx in 0..count {
            self.surface.set_checked(idx, Some(idx) == hit);
        }
        if hit.is_some() {
            self.surface.remove_class(UNSELECTED_CLASS);
        }
    }
}
