//! String validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Person-name pattern: Unicode letters (accented Latin included) and
// whitespace. Digits, punctuation, and symbols are rejected.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\s]+$").expect("NAME_REGEX: invalid regex pattern")
});

// Account-name pattern: ASCII letters, digits, and underscores only.
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("USERNAME_REGEX: invalid regex pattern")
});

/// Validates that a value is non-empty after trimming.
///
/// # Examples
///
/// ```
/// use autoventas_validators::{RequiredValidator, Validator};
///
/// let validator = RequiredValidator::new();
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("").is_err());
/// assert!(validator.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<str> for RequiredValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        }
    }
}

/// Validates that a value's character count falls inside `min..=max`.
///
/// Lengths are measured in characters, not bytes, so multi-byte input
/// (accented letters, CJK, emoji) counts the way a user perceives it.
///
/// # Examples
///
/// ```
/// use autoventas_validators::{LengthRangeValidator, Validator};
///
/// let validator = LengthRangeValidator::new(2, 10);
/// assert!(validator.validate("ok").is_ok());
/// assert!(validator.validate("x").is_err());
/// assert!(validator.validate("eleven chars").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LengthRangeValidator {
    min: usize,
    max: usize,
}

impl LengthRangeValidator {
    /// Creates a new `LengthRangeValidator` with inclusive bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoventas_validators::{LengthRangeValidator, Validator};
    ///
    /// let validator = LengthRangeValidator::new(10, 1000);
    /// assert!(validator.validate("a message that is long enough").is_ok());
    /// ```
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validator<str> for LengthRangeValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        let length = value.chars().count();
        if length < self.min {
            return Err(ValidationError::TooShort {
                length,
                min: self.min,
            });
        }
        if length > self.max {
            return Err(ValidationError::TooLong {
                length,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Validates that a value is a person name: Unicode letters and spaces.
///
/// Accented Latin letters (`María`, `Ñandú`) pass; digits and symbols fail.
///
/// # Examples
///
/// ```
/// use autoventas_validators::{NameValidator, Validator};
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("Ana María").is_ok());
/// assert!(validator.validate("Ana123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameValidator {
    /// Optional custom error message shown on validation failure
    message: Option<String>,
}

impl NameValidator {
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Sets a custom error message returned on validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoventas_validators::{NameValidator, Validator};
    ///
    /// let validator = NameValidator::new().with_message("Letters only, please");
    /// assert!(validator.validate("x9").is_err());
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Value may only contain letters and spaces".to_string())
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for NameValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if NAME_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch(self.message()))
        }
    }
}

/// Validates that a value is an account name: ASCII letters, digits,
/// and underscores.
///
/// # Examples
///
/// ```
/// use autoventas_validators::{UsernameValidator, Validator};
///
/// let validator = UsernameValidator::new();
/// assert!(validator.validate("ana_23").is_ok());
/// assert!(validator.validate("ana maría").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UsernameValidator {
    /// Optional custom error message shown on validation failure
    message: Option<String>,
}

impl UsernameValidator {
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Sets a custom error message returned on validation failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> String {
        self.message.clone().unwrap_or_else(|| {
            "Value may only contain letters, digits, and underscores".to_string()
        })
    }
}

impl Default for UsernameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for UsernameValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if USERNAME_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch(self.message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello")]
    #[case("  spaced  ")]
    #[case("0")]
    fn test_required_accepts_non_blank(#[case] value: &str) {
        let validator = RequiredValidator::new();
        assert!(validator.validate(value).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn test_required_rejects_blank(#[case] value: &str) {
        let validator = RequiredValidator::new();
        assert_eq!(
            validator.validate(value),
            Err(ValidationError::Required)
        );
    }

    proptest! {
        // required fails exactly when the trimmed value is empty
        #[test]
        fn test_required_matches_trim(value in ".*") {
            let validator = RequiredValidator::new();
            prop_assert_eq!(validator.validate(&value).is_err(), value.trim().is_empty());
        }
    }

    #[rstest]
    fn test_length_range_too_short_reports_bound() {
        // Arrange
        let validator = LengthRangeValidator::new(10, 1000);

        // Act
        let result = validator.validate(&"x".repeat(9));

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::TooShort {
                length: 9,
                min: 10
            })
        );
    }

    #[rstest]
    fn test_length_range_too_long_reports_bound() {
        // Arrange
        let validator = LengthRangeValidator::new(10, 1000);

        // Act
        let result = validator.validate(&"x".repeat(1001));

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                length: 1001,
                max: 1000
            })
        );
    }

    #[rstest]
    fn test_length_range_inside_bounds() {
        let validator = LengthRangeValidator::new(10, 1000);
        assert!(validator.validate(&"x".repeat(500)).is_ok());
        assert!(validator.validate(&"x".repeat(10)).is_ok());
        assert!(validator.validate(&"x".repeat(1000)).is_ok());
    }

    #[rstest]
    fn test_length_range_counts_chars_not_bytes() {
        // "María" is 5 characters but 6 bytes in UTF-8
        let validator = LengthRangeValidator::new(5, 5);
        assert!(validator.validate("María").is_ok());
    }

    #[rstest]
    #[case("Ana")]
    #[case("Ana María")]
    #[case("José Ñandú")]
    #[case("Jean Pierre")]
    fn test_name_validator_valid(#[case] name: &str) {
        let validator = NameValidator::new();
        assert!(validator.validate(name).is_ok(), "Expected '{name}' to be valid");
    }

    #[rstest]
    #[case("Ana123")]
    #[case("Ana!")]
    #[case("ana@test.com")]
    #[case("O'Brien")]
    fn test_name_validator_invalid(#[case] name: &str) {
        let validator = NameValidator::new();
        assert!(validator.validate(name).is_err(), "Expected '{name}' to be invalid");
    }

    #[rstest]
    fn test_name_validator_custom_message() {
        let validator = NameValidator::new().with_message("Custom name error");

        match validator.validate("x9") {
            Err(ValidationError::PatternMismatch(msg)) => {
                assert_eq!(msg, "Custom name error");
            }
            other => panic!("Expected PatternMismatch, got {other:?}"),
        }
    }

    #[rstest]
    #[case("ana")]
    #[case("ana_23")]
    #[case("ANA")]
    #[case("_leading")]
    fn test_username_validator_valid(#[case] username: &str) {
        let validator = UsernameValidator::new();
        assert!(validator.validate(username).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("ana maría")]
    #[case("ana-23")]
    #[case("ana@host")]
    fn test_username_validator_invalid(#[case] username: &str) {
        let validator = UsernameValidator::new();
        assert!(validator.validate(username).is_err());
    }
}
