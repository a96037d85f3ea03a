//! Submission lifecycle controller
//!
//! Drives one form through `Idle -> Validating -> (Invalid -> Idle) |
//! (Submitting -> Succeeded -> Idle) | (Submitting -> Failed -> Idle)`.
//!
//! The controller enforces the engine's single concurrency invariant: at
//! most one in-flight submission per form instance, guarded by an atomic
//! flag that is cleared on every exit path. Transient presentation states
//! (success banner, failure banner) are dismissed by fire-and-forget timer
//! tasks that hold only a weak reference, so a timer firing after the form
//! is gone is a no-op.

use crate::form::FormState;
use crate::presenter::{FieldStatus, FormPhase, Presenter};
use crate::submit::{SubmitError, Submitter};
use futures::FutureExt;
use parking_lot::Mutex;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Outcome of one submit intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Another submission was in flight; this intent was ignored
	AlreadyInFlight,
	/// Validation failed; the submitter was not called
	Invalid,
	Succeeded,
	Failed,
}

/// Delays for transient presentation states.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleTiming {
	/// How long the success affordance stays up before the form resets
	pub reset_delay: Duration,
	/// How long the failure affordance stays up before returning to idle
	pub dismiss_delay: Duration,
}

impl Default for LifecycleTiming {
	fn default() -> Self {
		Self {
			reset_delay: Duration::from_secs(2),
			dismiss_delay: Duration::from_secs(3),
		}
	}
}

struct Inner {
	state: Mutex<FormState>,
	submitting: AtomicBool,
	submitter: Arc<dyn Submitter>,
	presenter: Arc<dyn Presenter>,
	timing: LifecycleTiming,
}

// Clears the submitting flag when dropped, so every exit path of
// `submit` — validation abort, success, failure, panic — releases the
// form for the next attempt.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::SeqCst);
	}
}

/// Drives one form instance through validate -> submit -> settle.
///
/// Each controller owns its form state and its own submitting flag; forms
/// on the same page are fully independent instances, never a process-wide
/// singleton.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use autoventas_forms::{presets, FormController, NullPresenter};
/// use autoventas_forms::{SubmitError, SubmitOutcome, SubmitResponse, Submitter};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// struct Endpoint;
///
/// #[async_trait]
/// impl Submitter for Endpoint {
///     async fn submit(
///         &self,
///         _payload: &HashMap<String, String>,
///     ) -> Result<SubmitResponse, SubmitError> {
///         Ok(SubmitResponse::ok())
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let controller = FormController::new(
///     presets::newsletter_form(),
///     Arc::new(Endpoint),
///     Arc::new(NullPresenter),
/// );
/// controller.set_value("email", "ana@test.com");
/// assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
/// # });
/// ```
pub struct FormController {
	inner: Arc<Inner>,
}

impl FormController {
	/// Creates a controller with the default timing.
	pub fn new(
		state: FormState,
		submitter: Arc<dyn Submitter>,
		presenter: Arc<dyn Presenter>,
	) -> Self {
		Self::with_timing(state, submitter, presenter, LifecycleTiming::default())
	}

	/// Creates a controller with explicit banner timing.
	pub fn with_timing(
		state: FormState,
		submitter: Arc<dyn Submitter>,
		presenter: Arc<dyn Presenter>,
		timing: LifecycleTiming,
	) -> Self {
		Self {
			inner: Arc::new(Inner {
				state: Mutex::new(state),
				submitting: AtomicBool::new(false),
				submitter,
				presenter,
				timing,
			}),
		}
	}

	/// Whether a submission is currently in flight.
	pub fn is_submitting(&self) -> bool {
		self.inner.submitting.load(Ordering::SeqCst)
	}

	/// Runs `f` against the form state (values, errors, last result).
	pub fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
		let mut state = self.inner.state.lock();
		f(&mut state)
	}

	/// Sets one field's current value (typing path).
	pub fn set_value(&self, name: &str, value: impl Into<String>) {
		self.inner.state.lock().set_value(name, value);
	}

	/// Validates one field and notifies the presenter (input/blur path).
	pub fn validate_field(&self, name: &str) -> Option<FieldStatus> {
		let status = { self.inner.state.lock().validate_field(name) }?;
		self.inner.presenter.field_changed(name, &status);
		Some(status)
	}

	/// Handles a submit intent end to end.
	///
	/// Re-entrant calls while a submission is pending are no-ops: exactly
	/// one submitter call happens per winning intent. The submitter is an
	/// opaque asynchronous boundary — a rejection or even a panic inside it
	/// is caught here, mapped to the failure path, and can never leave the
	/// form locked.
	pub async fn submit(&self) -> SubmitOutcome {
		let inner = &self.inner;
		if inner.submitting.swap(true, Ordering::SeqCst) {
			tracing::debug!("submit ignored: another submission is in flight");
			return SubmitOutcome::AlreadyInFlight;
		}
		let _flag = SubmittingGuard(&inner.submitting);

		// Validating. The lock is scoped: it must not be held across the
		// submitter await point.
		let (statuses, invalid_first, payload, messages) = {
			let mut state = inner.state.lock();
			let ok = state.validate();
			let statuses: Vec<(String, FieldStatus)> = state
				.fields()
				.iter()
				.map(|f| {
					let status = state.field_status(&f.name).unwrap_or(FieldStatus::Valid);
					(f.name.clone(), status)
				})
				.collect();
			let invalid_first = if ok {
				None
			} else {
				Some(state.first_invalid().unwrap_or("").to_string())
			};
			let payload = state.payload();
			let messages = state.messages().clone();
			if !ok {
				state.set_last_result(Some(Err(messages.fix_errors.clone())));
			}
			(statuses, invalid_first, payload, messages)
		};

		for (name, status) in &statuses {
			inner.presenter.field_changed(name, status);
		}

		if let Some(first_field) = invalid_first {
			tracing::debug!(field = %first_field, "validation failed; submission aborted");
			inner.presenter.form_changed(&FormPhase::Invalid {
				first_field,
				message: messages.fix_errors.clone(),
			});
			return SubmitOutcome::Invalid;
		}

		// Submitting
		inner.presenter.form_changed(&FormPhase::Loading);
		tracing::info!(fields = payload.len(), "submitting form");

		let settled = AssertUnwindSafe(inner.submitter.submit(&payload))
			.catch_unwind()
			.await
			.unwrap_or_else(|_| Err(SubmitError::Other("submitter panicked".to_string())));

		// A resolved response that reports failure travels the same path
		// as a rejection.
		let settled = match settled {
			Ok(response) if !response.success => Err(SubmitError::Other(
				response.message.unwrap_or_else(|| "rejected".to_string()),
			)),
			other => other,
		};

		match settled {
			Ok(_response) => {
				inner.state.lock().set_last_result(Some(Ok(())));
				tracing::info!("form submitted successfully");
				inner.presenter.form_changed(&FormPhase::Succeeded {
					message: messages.success.clone(),
				});
				schedule_reset(Arc::downgrade(inner), inner.timing.reset_delay);
				SubmitOutcome::Succeeded
			}
			Err(err) => {
				let message = match &err {
					SubmitError::AlreadySubscribed => messages.already_subscribed.clone(),
					SubmitError::Server => messages.server_error.clone(),
					SubmitError::Other(_) => messages.error.clone(),
				};
				inner
					.state
					.lock()
					.set_last_result(Some(Err(message.clone())));
				tracing::warn!(error = %err, "form submission failed");
				inner
					.presenter
					.form_changed(&FormPhase::Failed { message });
				schedule_dismiss(Arc::downgrade(inner), inner.timing.dismiss_delay);
				SubmitOutcome::Failed
			}
		}
	}
}

// After the success affordance has been displayed, clear the form and its
// decorations. No-ops if the controller was dropped in the meantime.
fn schedule_reset(inner: Weak<Inner>, delay: Duration) {
	tokio::spawn(async move {
		tokio::time::sleep(delay).await;
		let Some(inner) = inner.upgrade() else { return };
		inner.state.lock().reset();
		inner.presenter.form_changed(&FormPhase::Idle);
	});
}

// After the failure affordance has been displayed, return the presentation
// to idle. Values are kept so the user can retry.
fn schedule_dismiss(inner: Weak<Inner>, delay: Duration) {
	tokio::spawn(async move {
		tokio::time::sleep(delay).await;
		let Some(inner) = inner.upgrade() else { return };
		inner.presenter.form_changed(&FormPhase::Idle);
	});
}
