#![forbid(unsafe_code)]

//! Option sources and the adapter that flattens them into choices.
//!
//! Three shapes are accepted:
//!
//! | shape | value | text |
//! |-------|-------|------|
//! | scalar `s` | `s` | `s` |
//! | pair `(v, t)` | `v` | `t` |
//! | record `r` | `r[id_attribute]`, else `r` | `r[text_attribute]`, else `r` |
//!
//! Missing record fields fall back to the record itself; the adapter never
//! fails.

use radiogroup_core::{LiveCollection, RecordRef, Scalar};

use crate::value::Value;

/// One entry of a fixed option list.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionItem {
    /// Value and display text are the same.
    Scalar(Scalar),
    /// Explicit value with separate display text.
    Pair(Scalar, String),
}

impl OptionItem {
    #[must_use]
    pub fn pair(value: impl Into<Scalar>, text: impl Into<String>) -> Self {
        Self::Pair(value.into(), text.into())
    }

    /// The value this option stands for.
    #[must_use]
    pub fn value(&self) -> &Scalar {
        match self {
            Self::Scalar(s) | Self::Pair(s, _) => s,
        }
    }
}

macro_rules! scalar_items {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionItem {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_items!(Scalar, &str, String, bool, i32, i64, u32, f64);

impl<V: Into<Scalar>> From<(V, &str)> for OptionItem {
    fn from((value, text): (V, &str)) -> Self {
        Self::Pair(value.into(), text.to_string())
    }
}

impl<V: Into<Scalar>> From<(V, String)> for OptionItem {
    fn from((value, text): (V, String)) -> Self {
        Self::Pair(value.into(), text)
    }
}

/// Where a control's options come from.
#[derive(Debug, Clone)]
pub enum OptionSource {
    /// A fixed, ordered list.
    List(Vec<OptionItem>),
    /// A shared collection that may grow while the control is alive.
    Collection(LiveCollection),
}

impl OptionSource {
    /// Build a fixed list from anything convertible to [`OptionItem`].
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionItem>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    #[must_use]
    pub fn as_collection(&self) -> Option<&LiveCollection> {
        match self {
            Self::Collection(c) => Some(c),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Collection(c) => c.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<LiveCollection> for OptionSource {
    fn from(collection: LiveCollection) -> Self {
        Self::Collection(collection)
    }
}

impl From<Vec<OptionItem>> for OptionSource {
    fn from(items: Vec<OptionItem>) -> Self {
        Self::List(items)
    }
}

/// A normalized `(value, text)` option, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceEntry {
    pub value: Value,
    pub text: String,
}

impl ChoiceEntry {
    /// Token written to the rendered input.
    #[must_use]
    pub fn token(&self) -> String {
        self.value.token()
    }
}

/// Flattens any [`OptionSource`] into [`ChoiceEntry`] values.
#[derive(Debug, Clone, Copy)]
pub struct OptionAdapter<'a> {
    pub id_attribute: &'a str,
    pub text_attribute: &'a str,
}

impl<'a> OptionAdapter<'a> {
    #[must_use]
    pub fn new(id_attribute: &'a str, text_attribute: &'a str) -> Self {
        Self {
            id_attribute,
            text_attribute,
        }
    }

    #[must_use]
    pub fn item(&self, item: &OptionItem) -> ChoiceEntry {
        match item {
            OptionItem::Scalar(s) => ChoiceEntry {
                value: Value::Scalar(s.clone()),
                text: s.to_string(),
            },
            OptionItem::Pair(v, t) => ChoiceEntry {
                value: Value::Scalar(v.clone()),
                text: t.clone(),
            },
        }
    }

    #[must_use]
    pub fn record(&self, record: &RecordRef) -> ChoiceEntry {
        let value = record
            .get(self.id_attribute)
            .map_or_else(|| Value::Record(RecordRef::clone(record)), |id| Value::Scalar(id.clone()));
        let text = record
            .get(self.text_attribute)
            .map_or_else(|| record.to_string(), Scalar::to_string);
        ChoiceEntry { value, text }
    }

    /// All entries of `source`, in order.
    #[must_use]
    pub fn entries(&self, source: &OptionSource) -> Vec<ChoiceEntry> {
        match source {
            OptionSource::List(items) => items.iter().map(|i| self.item(i)).collect(),
            OptionSource::Collection(c) => c.records().iter().map(|r| self.record(r)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiogroup_core::Record;

    fn adapter() -> OptionAdapter<'static> {
        OptionAdapter::new("id", "text")
    }

    #[test]
    fn scalar_item() {
        let e = adapter().item(&OptionItem::from("foo"));
        assert_eq!(e.token(), "foo");
        assert_eq!(e.text, "foo");
    }

    #[test]
    fn numeric_scalar_item() {
        let e = adapter().item(&OptionItem::from(2));
        assert_eq!(e.value, Value::from(2));
        assert_eq!(e.text, "2");
    }

    #[test]
    fn pair_item() {
        let e = adapter().item(&OptionItem::from(("foo", "Foo Text")));
        assert_eq!(e.token(), "foo");
        assert_eq!(e.text, "Foo Text");
    }

    #[test]
    fn record_with_fields() {
        let r = Record::new().with("id", 1).with("text", "A").into_ref();
        let e = adapter().record(&r);
        assert_eq!(e.value, Value::from(1));
        assert_eq!(e.text, "A");
    }

    #[test]
    fn record_missing_fields_falls_back_to_record() {
        let r = Record::new().with("name", "x").into_ref();
        let e = adapter().record(&r);
        assert!(matches!(&e.value, Value::Record(inner) if RecordRef::ptr_eq(inner, &r)));
        assert_eq!(e.text, "{name: x}");
        assert_eq!(e.token(), "{name: x}");
    }

    #[test]
    fn custom_attributes() {
        let r = Record::new().with("slug", "red").with("label", "Red").into_ref();
        let e = OptionAdapter::new("slug", "label").record(&r);
        assert_eq!(e.token(), "red");
        assert_eq!(e.text, "Red");
    }

    #[test]
    fn entries_follow_source_order() {
        let source = OptionSource::list(["foo", "bar", "baz"]);
        let tokens: Vec<_> = adapter().entries(&source).iter().map(ChoiceEntry::token).collect();
        assert_eq!(tokens, ["foo", "bar", "baz"]);
        assert_eq!(source.len(), 3);
        assert!(!source.is_collection());
    }

    #[test]
    fn collection_entries() {
        let c = LiveCollection::from_records([
            Record::new().with("id", 1).with("text", "A"),
            Record::new().with("id", 2).with("text", "B"),
        ]);
        let source = OptionSource::from(c);
        let texts: Vec<_> = adapter().entries(&source).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, ["A", "B"]);
        assert!(source.as_collection().is_some());
    }
}
