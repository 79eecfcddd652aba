#![forbid(unsafe_code)]

use std::fmt;

/// Construction errors for [`RadioGroup`](crate::radio::RadioGroup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioError {
    /// `name` was not set or is empty.
    MissingName,
    /// `options` was not set.
    MissingOptions,
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "radio group requires a name"),
            Self::MissingOptions => write!(f, "radio group requires options"),
        }
    }
}

impl std::error::Error for RadioError {}

/// Standard result type for radio group construction.
pub type Result<T> = std::result::Result<T, RadioError>;
