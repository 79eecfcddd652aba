#![forbid(unsafe_code)]

//! Canonical selection values.
//!
//! A control's current value is a [`Selection`]. Two sentinels are kept
//! apart on purpose:
//!
//! - [`Selection::None`]: nothing was selected (the initial state, or an
//!   explicit clear).
//! - [`Selection::Unresolved`]: a value was set but did not resolve against
//!   a live collection.
//!
//! Both render as "unselected" and fail a required check, and both are
//! loosely equal to each other for the purpose of change detection.

use std::fmt;
use std::rc::Rc;

use radiogroup_core::{Record, RecordRef, Scalar};

/// A concrete value: a scalar, or a whole record from a live collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Record(RecordRef),
}

impl Value {
    /// String token written to / read from a rendered input.
    ///
    /// Records use their display form.
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Scalar(s) => s.token().into_owned(),
            Self::Record(r) => r.to_string(),
        }
    }

    /// Loose equality: scalars compare flexibly, records by identity.
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.flex_eq(b),
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Record(_) => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Self::Record(r) => Some(r),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Record(r) => write!(f, "{r}"),
        }
    }
}

/// The canonical value slot of a control.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A value was set but no record matched it.
    Unresolved,
    Value(Value),
}

impl Selection {
    /// `true` for either sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::None | Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        self.value().and_then(Value::as_scalar)
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&RecordRef> {
        self.value().and_then(Value::as_record)
    }

    /// Change-detection equality: sentinels are interchangeable, values
    /// compare with [`Value::loose_eq`].
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self.value(), other.value()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.loose_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("<none>"),
            Self::Unresolved => f.write_str("<unresolved>"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

impl From<Value> for Selection {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<RecordRef> for Value {
    fn from(record: RecordRef) -> Self {
        Self::Record(record)
    }
}

impl From<RecordRef> for Selection {
    fn from(record: RecordRef) -> Self {
        Self::Value(Value::Record(record))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(Rc::new(record))
    }
}

impl From<Record> for Selection {
    fn from(record: Record) -> Self {
        Self::Value(Value::from(record))
    }
}

macro_rules! scalar_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }

            impl From<$ty> for Selection {
                fn from(v: $ty) -> Self {
                    Self::Value(Value::Scalar(Scalar::from(v)))
                }
            }
        )*
    };
}

scalar_conversions!(Scalar, &str, String, bool, i32, i64, u32, f64);

impl<T> From<Option<T>> for Selection
where
    T: Into<Selection>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_loosely_equal() {
        assert!(Selection::None.loose_eq(&Selection::Unresolved));
        assert!(Selection::Unresolved.loose_eq(&Selection::None));
        assert_ne!(Selection::None, Selection::Unresolved);
    }

    #[test]
    fn sentinel_never_equals_value() {
        assert!(!Selection::None.loose_eq(&Selection::from("")));
        assert!(!Selection::from(0).loose_eq(&Selection::Unresolved));
    }

    #[test]
    fn scalars_compare_flexibly() {
        assert!(Selection::from("2").loose_eq(&Selection::from(2)));
        assert!(!Selection::from("2").loose_eq(&Selection::from(3)));
    }

    #[test]
    fn records_compare_by_identity() {
        let a = Record::new().with("id", 1).into_ref();
        let b = Record::new().with("id", 1).into_ref();
        assert!(Selection::from(Rc::clone(&a)).loose_eq(&Selection::from(Rc::clone(&a))));
        assert!(!Selection::from(a).loose_eq(&Selection::from(b)));
    }

    #[test]
    fn record_never_equals_scalar() {
        let a = Record::new().with("id", 1).into_ref();
        assert!(!Selection::from(a).loose_eq(&Selection::from(1)));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Selection::from(None::<&str>), Selection::None);
        assert_eq!(Selection::from(Some("x")), Selection::from("x"));
    }

    #[test]
    fn tokens() {
        assert_eq!(Value::from(3).token(), "3");
        assert_eq!(Value::from(Record::new().with("id", 1)).token(), "{id: 1}");
        assert_eq!(Selection::Unresolved.to_string(), "<unresolved>");
    }
}
