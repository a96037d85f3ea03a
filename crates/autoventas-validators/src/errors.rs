//! Validation error taxonomy

use crate::password::StrengthTier;

/// Errors produced by value validators.
///
/// Every variant is recoverable: the caller decides how to surface it
/// (inline field message, banner, log line). `Display` renders a neutral
/// English description; user-facing localization happens at the form layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This value is required")]
    Required,
    #[error("Ensure this value has at least {min} characters (it has {length})")]
    TooShort { length: usize, min: usize },
    #[error("Ensure this value has at most {max} characters (it has {length})")]
    TooLong { length: usize, max: usize },
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("{0}")]
    PatternMismatch(String),
    #[error("Password strength is {tier}, at least {required} is required")]
    WeakPassword {
        tier: StrengthTier,
        required: StrengthTier,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
