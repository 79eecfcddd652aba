#![forbid(unsafe_code)]

//! Field records held by a [`LiveCollection`](crate::collection::LiveCollection).

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::scalar::Scalar;

/// Shared handle to a record. Collection membership is pointer identity.
pub type RecordRef = Rc<Record>;

/// A named-field record, e.g. `{id: 1, text: "A"}`.
///
/// Fields are kept in key order so the display form is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, Scalar>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.fields.insert(field.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Wrap into a shared handle.
    #[must_use]
    pub fn into_ref(self) -> RecordRef {
        Rc::new(self)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let r = Record::new().with("id", 1).with("text", "A");
        assert_eq!(r.get("id"), Some(&Scalar::Int(1)));
        assert_eq!(r.get("text").and_then(Scalar::as_str), Some("A"));
        assert!(r.get("missing").is_none());
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn display_is_key_ordered() {
        let r: Record = [("text", Scalar::from("A")), ("id", Scalar::from(1))]
            .into_iter()
            .collect();
        assert_eq!(r.to_string(), "{id: 1, text: A}");
        assert_eq!(Record::new().to_string(), "{}");
    }

    #[test]
    fn set_replaces() {
        let mut r = Record::new().with("id", 1);
        assert_eq!(r.set("id", 2), Some(Scalar::Int(1)));
        assert_eq!(r.get("id"), Some(&Scalar::Int(2)));
    }

    #[test]
    fn equal_records_are_distinct_refs() {
        let a = Record::new().with("id", 1).into_ref();
        let b = Record::new().with("id", 1).into_ref();
        assert_eq!(a, b);
        assert!(!Rc::ptr_eq(&a, &b));
    }
}
