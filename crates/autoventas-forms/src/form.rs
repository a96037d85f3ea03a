//! Form state and whole-form validation

use crate::field::{FieldError, FieldSpec};
use crate::messages::MessageCatalog;
use crate::presenter::FieldStatus;
use std::collections::HashMap;

/// The state of one form instance: its fields in declared order, the
/// current values, and at most one active error per field.
///
/// A `FormState` is constructed once when its page loads and lives for the
/// page's lifetime. It is pure data — rendering and network concerns live
/// behind the presenter and submitter collaborators.
///
/// # Examples
///
/// ```
/// use autoventas_forms::{FieldSpec, FormState, Rule};
/// use std::collections::HashMap;
///
/// let mut form = FormState::new();
/// form.add_field(FieldSpec::new("correo").rule(Rule::Required).rule(Rule::Email));
///
/// let mut data = HashMap::new();
/// data.insert("correo".to_string(), "ana@test.com".to_string());
/// form.bind(data);
///
/// assert!(form.validate());
/// assert!(form.errors().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
	fields: Vec<FieldSpec>,
	values: HashMap<String, String>,
	errors: HashMap<String, FieldError>,
	messages: MessageCatalog,
	last_result: Option<Result<(), String>>,
}

impl FormState {
	/// Creates an empty form with the default message catalog.
	pub fn new() -> Self {
		Self::with_messages(MessageCatalog::default())
	}

	/// Creates an empty form with a custom message catalog.
	pub fn with_messages(messages: MessageCatalog) -> Self {
		Self {
			fields: vec![],
			values: HashMap::new(),
			errors: HashMap::new(),
			messages,
			last_result: None,
		}
	}

	/// Adds a field; declaration order drives validation and focus order.
	pub fn add_field(&mut self, field: FieldSpec) {
		self.fields.push(field);
	}

	/// Replaces all current values (form data arriving at once).
	pub fn bind(&mut self, data: HashMap<String, String>) {
		self.values = data;
	}

	/// Sets a single field's current value (typing path).
	pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	/// The raw (untrimmed) current value of a field.
	pub fn value(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Validates one field: its rules run in declared order and the first
	/// failure wins. Updates the error map and returns the field's status,
	/// or `None` for an unknown field name.
	///
	/// Validation is pure with respect to the current values: repeated
	/// calls with unchanged input return the same status.
	pub fn validate_field(&mut self, name: &str) -> Option<FieldStatus> {
		let Self {
			fields,
			values,
			errors,
			messages,
			..
		} = self;
		let field = fields.iter().find(|f| f.name == name)?;

		let value = values
			.get(&field.name)
			.map(|v| v.trim())
			.unwrap_or("")
			.to_string();

		let failure = field
			.rules
			.iter()
			.find_map(|rule| match rule.check(&value, values, messages) {
				Ok(()) => None,
				Err(message) => Some((rule.id(), message)),
			});

		Some(match failure {
			Some((rule, message)) => {
				errors.insert(
					field.name.clone(),
					FieldError {
						field: field.name.clone(),
						rule,
						message: message.clone(),
					},
				);
				FieldStatus::Invalid(message)
			}
			None => {
				errors.remove(&field.name);
				FieldStatus::Valid
			}
		})
	}

	/// Validates every field so all errors surface at once (no short-circuit
	/// across fields). Returns true iff the whole form is valid.
	pub fn validate(&mut self) -> bool {
		let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
		let mut all_valid = true;
		for name in names {
			if matches!(self.validate_field(&name), Some(FieldStatus::Invalid(_))) {
				all_valid = false;
			}
		}
		all_valid
	}

	/// Current error map; at most one entry per field.
	pub fn errors(&self) -> &HashMap<String, FieldError> {
		&self.errors
	}

	/// The first field in declared order holding an error (focus target).
	pub fn first_invalid(&self) -> Option<&str> {
		self.fields
			.iter()
			.map(|f| f.name.as_str())
			.find(|name| self.errors.contains_key(*name))
	}

	/// The status of a field as last validated, or `None` for an unknown
	/// field.
	pub fn field_status(&self, name: &str) -> Option<FieldStatus> {
		if !self.fields.iter().any(|f| f.name == name) {
			return None;
		}
		Some(match self.errors.get(name) {
			Some(err) => FieldStatus::Invalid(err.message.clone()),
			None => FieldStatus::Valid,
		})
	}

	/// Clears a field's active error (focus path).
	pub fn clear_error(&mut self, name: &str) {
		self.errors.remove(name);
	}

	/// The submission payload: trimmed values of the declared fields.
	pub fn payload(&self) -> HashMap<String, String> {
		self.fields
			.iter()
			.map(|f| {
				let value = self
					.values
					.get(&f.name)
					.map(|v| v.trim().to_string())
					.unwrap_or_default();
				(f.name.clone(), value)
			})
			.collect()
	}

	/// Clears values, errors, and the last result; field declarations stay.
	pub fn reset(&mut self) {
		self.values.clear();
		self.errors.clear();
		self.last_result = None;
	}

	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	pub fn messages(&self) -> &MessageCatalog {
		&self.messages
	}

	/// Outcome of the most recent settled submission attempt.
	pub fn last_result(&self) -> Option<&Result<(), String>> {
		self.last_result.as_ref()
	}

	pub(crate) fn set_last_result(&mut self, result: Option<Result<(), String>>) {
		self.last_result = result;
	}
}

impl Default for FormState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::Rule;

	fn sample_form() -> FormState {
		let mut form = FormState::new();
		form.add_field(
			FieldSpec::new("nombre")
				.rule(Rule::Required)
				.rule(Rule::NameFormat)
				.rule(Rule::LengthRange { min: 2, max: 100 }),
		);
		form.add_field(FieldSpec::new("correo").rule(Rule::Required).rule(Rule::Email));
		form
	}

	#[test]
	fn test_validate_field_short_circuits_in_rule_order() {
		let mut form = sample_form();
		form.set_value("nombre", "");

		// Required fires first: an empty value is "missing", never "badly
		// formatted"
		let status = form.validate_field("nombre").unwrap();
		assert_eq!(
			status,
			FieldStatus::Invalid("Este campo es obligatorio".to_string())
		);
		assert_eq!(form.errors()["nombre"].rule, "required");
	}

	#[test]
	fn test_validate_field_first_failure_wins() {
		let mut form = sample_form();
		// Fails NameFormat and LengthRange; NameFormat is declared first
		form.set_value("nombre", "7");

		form.validate_field("nombre");
		assert_eq!(form.errors()["nombre"].rule, "name_format");
	}

	#[test]
	fn test_validate_field_trims_value() {
		let mut form = sample_form();
		form.set_value("nombre", "  Ana  ");

		assert_eq!(form.validate_field("nombre"), Some(FieldStatus::Valid));
	}

	#[test]
	fn test_validate_field_unknown_name() {
		let mut form = sample_form();
		assert_eq!(form.validate_field("telefono"), None);
	}

	#[test]
	fn test_validate_field_is_idempotent() {
		let mut form = sample_form();
		form.set_value("correo", "no-es-email");

		let first = form.validate_field("correo");
		let second = form.validate_field("correo");
		let third = form.validate_field("correo");
		assert_eq!(first, second);
		assert_eq!(second, third);
	}

	#[test]
	fn test_one_error_per_field_replaced_on_revalidation() {
		let mut form = sample_form();
		form.set_value("nombre", "");
		form.validate_field("nombre");
		assert_eq!(form.errors()["nombre"].rule, "required");

		form.set_value("nombre", "7");
		form.validate_field("nombre");
		assert_eq!(form.errors().len(), 1);
		assert_eq!(form.errors()["nombre"].rule, "name_format");

		form.set_value("nombre", "Ana");
		form.validate_field("nombre");
		assert!(!form.errors().contains_key("nombre"));
	}

	#[test]
	fn test_validate_checks_every_field() {
		let mut form = sample_form();
		// Both fields invalid; both errors must surface at once
		form.set_value("nombre", "7");
		form.set_value("correo", "no-es-email");

		assert!(!form.validate());
		assert!(form.errors().contains_key("nombre"));
		assert!(form.errors().contains_key("correo"));
	}

	#[test]
	fn test_first_invalid_follows_declared_order() {
		let mut form = sample_form();
		form.set_value("nombre", "Ana");
		form.set_value("correo", "no-es-email");

		form.validate();
		assert_eq!(form.first_invalid(), Some("correo"));

		form.set_value("nombre", "7");
		form.validate();
		assert_eq!(form.first_invalid(), Some("nombre"));
	}

	#[test]
	fn test_payload_contains_trimmed_declared_fields_only() {
		let mut form = sample_form();
		form.set_value("nombre", "  Ana  ");
		form.set_value("correo", "ana@test.com");
		form.set_value("extra", "ignorado");

		let payload = form.payload();
		assert_eq!(payload.len(), 2);
		assert_eq!(payload["nombre"], "Ana");
		assert_eq!(payload["correo"], "ana@test.com");
	}

	#[test]
	fn test_reset_clears_values_errors_and_result() {
		let mut form = sample_form();
		form.set_value("nombre", "7");
		form.validate();
		form.set_last_result(Some(Err("fallo".to_string())));

		form.reset();

		assert!(form.value("nombre").is_none());
		assert!(form.errors().is_empty());
		assert!(form.last_result().is_none());
		assert_eq!(form.fields().len(), 2);
	}

	#[test]
	fn test_bind_replaces_values() {
		let mut form = sample_form();
		form.set_value("nombre", "Ana");

		let mut data = HashMap::new();
		data.insert("correo".to_string(), "ana@test.com".to_string());
		form.bind(data);

		assert!(form.value("nombre").is_none());
		assert_eq!(form.value("correo"), Some("ana@test.com"));
	}
}
