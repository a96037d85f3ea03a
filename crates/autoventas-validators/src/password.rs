//! Password strength scoring
//!
//! The score awards one point for each of: length ≥ 8, length ≥ 12, a
//! lowercase letter, an uppercase letter, a digit, and a symbol (0–6
//! total). Scores below 3 are weak, below 5 medium, the rest strong.

use crate::{ValidationError, ValidationResult, Validator};
use std::fmt;

/// Coarse strength tier derived from the 0–6 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        write!(f, "{label}")
    }
}

/// Per-requirement booleans for live strength meters.
///
/// Mirrors the indicator list shown next to password inputs: minimum
/// length, one lowercase, one uppercase, one digit, one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthChecklist {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

/// Full result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub tier: StrengthTier,
    pub checklist: StrengthChecklist,
}

/// Scores a password and maps the score to a tier.
///
/// # Examples
///
/// ```
/// use autoventas_validators::password::{strength, StrengthTier};
///
/// assert_eq!(strength("abc").tier, StrengthTier::Weak);
/// assert_eq!(strength("Abc123!@").tier, StrengthTier::Strong);
/// assert!(strength("Abc12345").checklist.digit);
/// ```
pub fn strength(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let checklist = StrengthChecklist {
        min_length: length >= 8,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    };

    let mut score = 0u8;
    if checklist.min_length {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    for met in [
        checklist.lowercase,
        checklist.uppercase,
        checklist.digit,
        checklist.symbol,
    ] {
        if met {
            score += 1;
        }
    }

    let tier = if score < 3 {
        StrengthTier::Weak
    } else if score < 5 {
        StrengthTier::Medium
    } else {
        StrengthTier::Strong
    };

    StrengthReport {
        score,
        tier,
        checklist,
    }
}

/// Validates that a password reaches a minimum strength tier.
///
/// # Examples
///
/// ```
/// use autoventas_validators::password::PasswordStrengthValidator;
/// use autoventas_validators::{StrengthTier, Validator};
///
/// let validator = PasswordStrengthValidator::new(StrengthTier::Medium);
/// assert!(validator.validate("Abc12345").is_ok());
/// assert!(validator.validate("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordStrengthValidator {
    required: StrengthTier,
}

impl PasswordStrengthValidator {
    pub fn new(required: StrengthTier) -> Self {
        Self { required }
    }
}

impl Validator<str> for PasswordStrengthValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        let report = strength(value);
        if report.tier >= self.required {
            Ok(())
        } else {
            Err(ValidationError::WeakPassword {
                tier: report.tier,
                required: self.required,
            })
        }
    }
}
