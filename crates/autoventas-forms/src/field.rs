//! Field specifications and field-level errors

use crate::rules::Rule;

/// Validation failure for a single field: which field, which rule, and the
/// user-facing message. Recoverable; surfaced inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
	pub field: String,
	/// Stable rule identifier (`"required"`, `"email"`, ...)
	pub rule: &'static str,
	pub message: String,
}

pub type FieldResult<T> = Result<T, FieldError>;

/// One form input: a name, an optional label, and an ordered rule list.
///
/// Rules run in declared order and the first failure wins, so `Required`
/// belongs before `Email` — an empty value is "missing", not "an invalid
/// email".
#[derive(Debug, Clone)]
pub struct FieldSpec {
	pub name: String,
	pub label: Option<String>,
	pub rules: Vec<Rule>,
}

impl FieldSpec {
	/// Creates a field with no label and no rules.
	///
	/// # Examples
	///
	/// ```
	/// use autoventas_forms::{FieldSpec, Rule};
	///
	/// let field = FieldSpec::new("correo")
	///     .with_label("Correo Electrónico")
	///     .rule(Rule::Required)
	///     .rule(Rule::Email);
	/// assert_eq!(field.name, "correo");
	/// assert_eq!(field.rules.len(), 2);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			rules: vec![],
		}
	}

	/// Sets the human-readable label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Appends a rule; order is significant.
	pub fn rule(mut self, rule: Rule) -> Self {
		self.rules.push(rule);
		self
	}
}
