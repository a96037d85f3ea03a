//! Shared fakes: a recording presenter and configurable submitters.

// Allow dead_code: each test target uses a different subset of the fakes
#![allow(dead_code)]

use async_trait::async_trait;
use autoventas_forms::{FieldStatus, FormPhase, Presenter, SubmitError, SubmitResponse, Submitter};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Presenter that records every event it receives.
#[derive(Default)]
pub struct RecordingPresenter {
	field_events: Mutex<Vec<(String, FieldStatus)>>,
	form_events: Mutex<Vec<FormPhase>>,
}

impl RecordingPresenter {
	pub fn field_events(&self) -> Vec<(String, FieldStatus)> {
		self.field_events.lock().clone()
	}

	pub fn phases(&self) -> Vec<FormPhase> {
		self.form_events.lock().clone()
	}

	pub fn last_phase(&self) -> Option<FormPhase> {
		self.form_events.lock().last().cloned()
	}
}

impl Presenter for RecordingPresenter {
	fn field_changed(&self, field: &str, status: &FieldStatus) {
		self.field_events
			.lock()
			.push((field.to_string(), status.clone()));
	}

	fn form_changed(&self, phase: &FormPhase) {
		self.form_events.lock().push(phase.clone());
	}
}

/// Submitter fake with a canned outcome, an optional artificial delay, and
/// a call counter. Stands in for the endpoint the way the site's simulated
/// `setTimeout` calls did, minus the magic email substrings.
pub struct FakeSubmitter {
	calls: AtomicUsize,
	delay: Option<Duration>,
	outcome: Result<SubmitResponse, SubmitError>,
}

impl FakeSubmitter {
	pub fn succeeding() -> Self {
		Self {
			calls: AtomicUsize::new(0),
			delay: None,
			outcome: Ok(SubmitResponse::ok()),
		}
	}

	/// Rejects with the endpoint reason string, mapped through the
	/// engine's taxonomy.
	pub fn rejecting(reason: &str) -> Self {
		Self {
			calls: AtomicUsize::new(0),
			delay: None,
			outcome: Err(SubmitError::from_reason(reason)),
		}
	}

	/// Keeps the call pending for `delay` before settling.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Submitter for FakeSubmitter {
	async fn submit(
		&self,
		_payload: &HashMap<String, String>,
	) -> Result<SubmitResponse, SubmitError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		self.outcome.clone()
	}
}
