//! Email address validation

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Permissive RFC-lite email pattern.
//
// Accepts `local@domain.tld` with:
// - ASCII local part (letters, digits, common special characters)
// - ASCII domain labels separated by at least one dot
//
// Deliberately not full RFC 5322: quoted locals, IP-literal domains, and
// internationalized addresses are rejected.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value is a well-formed email address.
///
/// The pattern requires a non-empty ASCII local part, an `@`, and a dotted
/// domain: `a@b.com` passes, `a@b` does not.
///
/// # Examples
///
/// ```
/// use autoventas_validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("ana@test.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// assert!(validator.validate("a@b").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<str> for EmailValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}
