#![forbid(unsafe_code)]

//! The required-selection constraint.
//!
//! A control validates exactly one rule: when it is required, its value must
//! name a member of its options. [`RequiredChoice`] expresses that rule as a
//! [`Validator`] over a [`ChoiceContext`], producing the same
//! `Valid`/`Invalid` result shape used elsewhere in the workspace.

use std::fmt;

use crate::option::OptionSource;
use crate::resolver::ValueResolver;
use crate::value::Selection;

/// Error code for a missing required selection.
pub const ERROR_CODE_REQUIRED: &str = "required";

/// Default message surfaced for [`ERROR_CODE_REQUIRED`].
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Selection required";

/// A validation failure with a stable code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The result of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }
}

/// Everything a selection validator may look at.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceContext<'a> {
    pub options: &'a OptionSource,
    pub value: &'a Selection,
    pub resolver: ValueResolver<'a>,
}

/// Validates a selection in context.
pub trait Validator {
    fn validate(&self, ctx: &ChoiceContext<'_>) -> ValidationResult;
}

/// Fails when a selection is required but does not name a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredChoice {
    pub required: bool,
    pub message: String,
}

impl RequiredChoice {
    #[must_use]
    pub fn new(required: bool, message: impl Into<String>) -> Self {
        Self {
            required,
            message: message.into(),
        }
    }
}

impl Default for RequiredChoice {
    fn default() -> Self {
        Self::new(true, DEFAULT_REQUIRED_MESSAGE)
    }
}

impl Validator for RequiredChoice {
    fn validate(&self, ctx: &ChoiceContext<'_>) -> ValidationResult {
        if !self.required || ctx.resolver.is_member(ctx.options, ctx.value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_REQUIRED, &*self.message))
        }
    }
}
