//! # AutoVentas
//!
//! The client-side behavior layer of the AutoVentas dealership site,
//! reduced to its reusable core: a form-validation-and-submission engine.
//! The contact form, the footer newsletter, and the auth forms are all
//! configurations of this one pattern.
//!
//! The engine is split in two crates, re-exported here:
//!
//! - [`validators`] — pure value predicates (email, name, length range,
//!   password strength) with typed errors
//! - [`forms`] — field specs and rules, whole-form validation, the
//!   submission lifecycle controller, and the presenter/submitter
//!   collaborator seams
//!
//! ## Quick example
//!
//! ```
//! use async_trait::async_trait;
//! use autoventas::forms::{presets, FormController, NullPresenter, SubmitOutcome};
//! use autoventas::forms::{SubmitError, SubmitResponse, Submitter};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! struct Endpoint;
//!
//! #[async_trait]
//! impl Submitter for Endpoint {
//!     async fn submit(
//!         &self,
//!         _payload: &HashMap<String, String>,
//!     ) -> Result<SubmitResponse, SubmitError> {
//!         Ok(SubmitResponse::ok())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let form = FormController::new(
//!     presets::contact_form(),
//!     Arc::new(Endpoint),
//!     Arc::new(NullPresenter),
//! );
//! form.set_value("nombre", "Ana María");
//! form.set_value("correo", "ana@test.com");
//! form.set_value("mensaje", "Quisiera información del Corolla 2024");
//! assert_eq!(form.submit().await, SubmitOutcome::Succeeded);
//! # });
//! ```

pub use autoventas_forms as forms;
pub use autoventas_validators as validators;

pub use autoventas_forms::{
	FieldSpec, FieldStatus, FormController, FormPhase, FormState, MessageCatalog, NullPresenter,
	Presenter, Rule, SubmitError, SubmitOutcome, SubmitResponse, Submitter,
};
pub use autoventas_validators::{StrengthTier, Validator};
