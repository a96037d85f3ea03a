//! Form handling and validation for AutoVentas
//!
//! This crate provides the client-side form engine shared by the site's
//! forms:
//! - Declarative per-field rule lists, evaluated in order with the first
//!   failure winning
//! - Whole-form validation that surfaces every field's error at once
//! - A submission lifecycle controller with duplicate-submit suppression,
//!   a guaranteed-release submitting flag, and timed banner dismissal
//! - Presenter and submitter collaborator interfaces that keep rendering
//!   and networking out of the engine
//! - Preset configurations for the contact, newsletter, login, and
//!   registration forms

pub mod field;
pub mod form;
pub mod lifecycle;
pub mod messages;
pub mod presenter;
pub mod presets;
pub mod rules;
pub mod submit;

pub use field::{FieldError, FieldResult, FieldSpec};
pub use form::FormState;
pub use lifecycle::{FormController, LifecycleTiming, SubmitOutcome};
pub use messages::MessageCatalog;
pub use presenter::{FieldStatus, FormPhase, NullPresenter, Presenter};
pub use presets::{contact_form, login_form, newsletter_form, register_form};
pub use rules::Rule;
pub use submit::{SubmitError, SubmitResponse, Submitter};
