//! Field validation rules
//!
//! The rule registry of the engine. Each variant maps to a pure predicate
//! over the current trimmed value; `MatchField` also reads another field's
//! value. Failures are rendered through the form's [`MessageCatalog`].

use crate::messages::MessageCatalog;
use autoventas_validators::{
	EmailValidator, LengthRangeValidator, NameValidator, PasswordStrengthValidator,
	RequiredValidator, StrengthTier, UsernameValidator, ValidationError, Validator,
};
use std::collections::HashMap;

/// A validation rule attached to a field.
///
/// Emptiness is owned by `Required`: the format rules (`Email`,
/// `NameFormat`, `Username`) pass on empty input so that an absent optional
/// value never reports a format error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
	Required,
	Email,
	NameFormat,
	Username,
	LengthRange { min: usize, max: usize },
	PasswordStrength { minimum: StrengthTier },
	MatchField { other: String },
}

impl Rule {
	/// Stable identifier used in error reporting and logs.
	pub fn id(&self) -> &'static str {
		match self {
			Rule::Required => "required",
			Rule::Email => "email",
			Rule::NameFormat => "name_format",
			Rule::Username => "username",
			Rule::LengthRange { .. } => "length_range",
			Rule::PasswordStrength { .. } => "password_strength",
			Rule::MatchField { .. } => "match_field",
		}
	}

	/// Checks a trimmed value against this rule.
	///
	/// `values` holds the raw values of every field, for cross-field rules.
	/// On failure returns the user-facing message from `messages`.
	///
	/// # Examples
	///
	/// ```
	/// use autoventas_forms::{MessageCatalog, Rule};
	/// use std::collections::HashMap;
	///
	/// let messages = MessageCatalog::default();
	/// let values = HashMap::new();
	///
	/// assert!(Rule::Email.check("ana@test.com", &values, &messages).is_ok());
	/// assert!(Rule::Email.check("", &values, &messages).is_ok());
	/// assert_eq!(
	///     Rule::Required.check("", &values, &messages),
	///     Err("Este campo es obligatorio".to_string()),
	/// );
	/// ```
	pub fn check(
		&self,
		value: &str,
		values: &HashMap<String, String>,
		messages: &MessageCatalog,
	) -> Result<(), String> {
		match self {
			Rule::Required => RequiredValidator::new()
				.validate(value)
				.map_err(|_| messages.required.clone()),
			Rule::Email => {
				if value.is_empty() {
					return Ok(());
				}
				EmailValidator::new()
					.validate(value)
					.map_err(|_| messages.email_invalid.clone())
			}
			Rule::NameFormat => {
				if value.is_empty() {
					return Ok(());
				}
				NameValidator::new()
					.validate(value)
					.map_err(|_| messages.name_invalid.clone())
			}
			Rule::Username => {
				if value.is_empty() {
					return Ok(());
				}
				UsernameValidator::new()
					.validate(value)
					.map_err(|_| messages.username_invalid.clone())
			}
			Rule::LengthRange { min, max } => LengthRangeValidator::new(*min, *max)
				.validate(value)
				.map_err(|err| match err {
					ValidationError::TooShort { min, .. } => {
						messages.too_short.replace("{min}", &min.to_string())
					}
					ValidationError::TooLong { max, .. } => {
						messages.too_long.replace("{max}", &max.to_string())
					}
					other => other.to_string(),
				}),
			Rule::PasswordStrength { minimum } => PasswordStrengthValidator::new(*minimum)
				.validate(value)
				.map_err(|_| messages.password_weak.clone()),
			Rule::MatchField { other } => {
				let expected = values.get(other).map(String::as_str).unwrap_or("").trim();
				if value == expected {
					Ok(())
				} else {
					Err(messages.mismatch.clone())
				}
			}
		}
	}
}
