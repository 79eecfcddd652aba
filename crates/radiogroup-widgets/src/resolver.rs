#![forbid(unsafe_code)]

//! Translation between lookup values and canonical stored values.
//!
//! Fixed lists store whatever they are given; membership is checked later by
//! validation. Live collections resolve the input to a record first:
//!
//! 1. A record that is a member of the collection (by identity) matches
//!    itself.
//! 2. Anything else is looked up by identifier, first match in collection
//!    order, using flexible equality. A non-member record is looked up by its
//!    own identifier field.
//! 3. With `yield_record` the stored value is the matched record, otherwise
//!    its identifier. No match stores [`Selection::Unresolved`].
//!
//! Sentinel inputs pass through untouched.

use radiogroup_core::{LiveCollection, RecordRef, Scalar};

use crate::option::OptionSource;
use crate::value::{Selection, Value};

#[derive(Debug, Clone, Copy)]
pub struct ValueResolver<'a> {
    pub id_attribute: &'a str,
    pub yield_record: bool,
}

impl<'a> ValueResolver<'a> {
    #[must_use]
    pub fn new(id_attribute: &'a str, yield_record: bool) -> Self {
        Self {
            id_attribute,
            yield_record,
        }
    }

    /// Map a raw input to the value the control should store.
    #[must_use]
    pub fn resolve(&self, source: &OptionSource, raw: Selection) -> Selection {
        let OptionSource::Collection(collection) = source else {
            return raw;
        };
        let value = match raw {
            Selection::Value(value) => value,
            sentinel => return sentinel,
        };
        let Some(record) = self.find_record(collection, &value) else {
            return Selection::Unresolved;
        };
        if self.yield_record {
            return Selection::Value(Value::Record(record));
        }
        record
            .get(self.id_attribute)
            .map_or(Selection::Unresolved, |id| Selection::Value(Value::Scalar(id.clone())))
    }

    /// Record in `collection` that `value` refers to.
    #[must_use]
    pub fn find_record(&self, collection: &LiveCollection, value: &Value) -> Option<RecordRef> {
        match value {
            Value::Record(record) if collection.contains(record) => Some(RecordRef::clone(record)),
            Value::Record(record) => record
                .get(self.id_attribute)
                .and_then(|id| self.find_by_id(collection, id)),
            Value::Scalar(key) => self.find_by_id(collection, key),
        }
    }

    fn find_by_id(&self, collection: &LiveCollection, key: &Scalar) -> Option<RecordRef> {
        collection.find_by(self.id_attribute, key)
    }

    /// Whether `value` names a member of `source`.
    #[must_use]
    pub fn is_member(&self, source: &OptionSource, value: &Selection) -> bool {
        let Some(value) = value.value() else {
            return false;
        };
        match source {
            OptionSource::List(items) => value
                .as_scalar()
                .is_some_and(|v| items.iter().any(|item| item.value().flex_eq(v))),
            OptionSource::Collection(collection) if self.yield_record => value
                .as_record()
                .is_some_and(|record| collection.contains(record)),
            OptionSource::Collection(collection) => self.find_record(collection, value).is_some(),
        }
    }

    /// Token of the rendered choice that should be checked for `value`.
    ///
    /// `None` for the sentinels.
    #[must_use]
    pub fn lookup_token(&self, source: &OptionSource, value: &Selection) -> Option<String> {
        let value = value.value()?;
        match value {
            Value::Record(record) if source.is_collection() && self.yield_record => Some(
                record
                    .get(self.id_attribute)
                    .map_or_else(|| record.to_string(), |id| id.token().into_owned()),
            ),
            other => Some(other.token()),
        }
    }
}
