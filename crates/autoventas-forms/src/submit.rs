//! Submission collaborator interface
//!
//! The network boundary of the engine. The real implementation posts the
//! payload to the site's endpoint and parses the JSON `{success, message}`
//! body; tests substitute fakes that resolve or reject immediately.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response body of the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl SubmitResponse {
	/// A plain success with no message.
	pub fn ok() -> Self {
		Self {
			success: true,
			message: None,
		}
	}
}

/// Reasons a submission can fail.
///
/// The engine recognizes two endpoint reasons and folds everything else
/// into `Other`, which is presented with the generic failure message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
	#[error("already subscribed")]
	AlreadySubscribed,
	#[error("server error")]
	Server,
	#[error("{0}")]
	Other(String),
}

impl SubmitError {
	/// Maps a rejection reason string from the endpoint to the taxonomy.
	///
	/// # Examples
	///
	/// ```
	/// use autoventas_forms::SubmitError;
	///
	/// assert_eq!(
	///     SubmitError::from_reason("already_subscribed"),
	///     SubmitError::AlreadySubscribed,
	/// );
	/// assert_eq!(SubmitError::from_reason("server_error"), SubmitError::Server);
	/// assert_eq!(
	///     SubmitError::from_reason("timeout"),
	///     SubmitError::Other("timeout".to_string()),
	/// );
	/// ```
	pub fn from_reason(reason: &str) -> Self {
		match reason {
			"already_subscribed" => Self::AlreadySubscribed,
			"server_error" => Self::Server,
			other => Self::Other(other.to_string()),
		}
	}
}

/// Network collaborator: delivers the payload and settles asynchronously.
///
/// The engine never assumes synchronous completion; resolution may be
/// arbitrarily delayed. There is no cancellation — an in-flight call runs
/// to completion or rejection.
#[async_trait]
pub trait Submitter: Send + Sync {
	async fn submit(
		&self,
		payload: &HashMap<String, String>,
	) -> Result<SubmitResponse, SubmitError>;
}
