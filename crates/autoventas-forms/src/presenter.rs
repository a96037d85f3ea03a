//! Presentation collaborator interface
//!
//! The engine never touches rendering. It emits field- and form-level
//! state changes through this trait; the implementor owns CSS classes,
//! error nodes, banners, spinners, and their timed dismissal.

/// Validation outcome for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
	Valid,
	Invalid(String),
}

/// Form-level lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
	/// Nothing pending; decorations and banners should be cleared
	Idle,
	/// Validation aborted the submit; `first_field` is the focus target
	Invalid {
		first_field: String,
		message: String,
	},
	/// A submission is in flight; show the loading affordance
	Loading,
	Succeeded {
		message: String,
	},
	Failed {
		message: String,
	},
}

/// Rendering collaborator for one form instance.
pub trait Presenter: Send + Sync {
	fn field_changed(&self, field: &str, status: &FieldStatus);
	fn form_changed(&self, phase: &FormPhase);
}

/// Presenter that ignores every event, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
	fn field_changed(&self, _field: &str, _status: &FieldStatus) {}

	fn form_changed(&self, _phase: &FormPhase) {}
}
