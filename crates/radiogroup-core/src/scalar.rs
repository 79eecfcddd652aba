#![forbid(unsafe_code)]

//! Scalar option values and flexible equality.
//!
//! Option values arrive from several places: typed option lists, record
//! fields, and the rendered inputs (which only ever carry strings). To let
//! `"1"` select the option `1`, every comparison between scalars goes through
//! [`Scalar::flex_eq`], which compares canonical string tokens.
//!
//! # Invariants
//!
//! 1. `flex_eq` is reflexive for every non-NaN scalar.
//! 2. `flex_eq` is symmetric.
//! 3. `NaN` is never flexibly equal to anything, itself included.
//! 4. `token()` and `Display` always agree.

use std::borrow::Cow;
use std::fmt;

/// A plain option value: what a list option is, or what a record field holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Canonical string token used for rendering and comparison.
    ///
    /// Floats use Rust's shortest round-trip form, so `2.0` becomes `"2"`
    /// and compares equal to the integer `2`.
    #[must_use]
    pub fn token(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Int(n) => Cow::Owned(n.to_string()),
            // `-0.0` renders as "0".
            Self::Float(x) if *x == 0.0 => Cow::Borrowed("0"),
            Self::Float(x) => Cow::Owned(x.to_string()),
        }
    }

    /// Flexible equality: equal when the canonical tokens match.
    #[must_use]
    pub fn flex_eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => self.token() == other.token(),
        }
    }

    /// Compare against a raw token, as read back from a rendered input.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        !self.is_nan() && self.token() == token
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    fn is_nan(&self) -> bool {
        matches!(self, Self::Float(x) if x.is_nan())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_matches_zero() {
        assert_eq!(Scalar::Float(-0.0).token(), "0");
        assert!(Scalar::Float(-0.0).flex_eq(&Scalar::Int(0)));
        assert!(Scalar::Float(0.0).matches_token("0"));
    }

    #[test]
    fn string_matches_integer() {
        assert!(Scalar::from("1").flex_eq(&Scalar::from(1)));
        assert!(Scalar::from(1).flex_eq(&Scalar::from("1")));
    }

    #[test]
    fn whole_float_matches_integer() {
        assert!(Scalar::from(2.0).flex_eq(&Scalar::from(2)));
        assert_eq!(Scalar::from(2.0).to_string(), "2");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn distinct_tokens_differ() {
        assert!(!Scalar::from("01").flex_eq(&Scalar::from(1)));
        assert!(!Scalar::from("foo").flex_eq(&Scalar::from("bar")));
        assert!(!Scalar::from(true).flex_eq(&Scalar::from(1)));
    }

    #[test]
    fn bool_token() {
        assert!(Scalar::from(true).flex_eq(&Scalar::from("true")));
        assert!(Scalar::from(false).matches_token("false"));
    }

    #[test]
    fn nan_never_equal() {
        let nan = Scalar::from(f64::NAN);
        assert!(!nan.flex_eq(&nan));
        assert!(!nan.flex_eq(&Scalar::from("NaN")));
        assert!(!nan.matches_token("NaN"));
    }

    #[test]
    fn token_borrows_strings() {
        let s = Scalar::from("bar");
        assert!(matches!(s.token(), Cow::Borrowed("bar")));
        assert_eq!(s.as_str(), Some("bar"));
        assert_eq!(Scalar::from(3).as_str(), None);
    }
}
