//! Three-way call outcome and the translation from raw HTTP responses.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Prefix of the failure message for 2xx bodies that do not decode.
pub const PARSE_FAILURE_PREFIX: &str = "Failed to parse response: ";

/// Result of one fleet API call.
///
/// A 2xx reply whose envelope says `success: false` is still a
/// [`CallOutcome::Success`]; the business failure lives inside the envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    /// Transport succeeded and the body decoded.
    Success(T),
    /// Transport failure (`code == 0`), error status, or undecodable body.
    Failure {
        /// Human-readable reason.
        message: String,
        /// HTTP status, or `0` when no response arrived.
        code: u16,
    },
    /// Call in flight. Only UI state machines produce this; [`invoke`]
    /// never does.
    Pending,
}

impl<T> CallOutcome<T> {
    /// Build a failure outcome.
    pub fn failure(message: impl Into<String>, code: u16) -> Self {
        Self::Failure {
            message: message.into(),
            code,
        }
    }

    /// Whether this is [`CallOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the success value.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the success value, leaving other variants intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            Self::Success(value) => CallOutcome::Success(f(value)),
            Self::Failure { message, code } => CallOutcome::Failure { message, code },
            Self::Pending => CallOutcome::Pending,
        }
    }
}

/// Run `call` and fold its result into a [`CallOutcome`].
///
/// - transport error: `Failure { message: <error text>, code: 0 }`
/// - 2xx: decode the body as `T`; a decode error gives
///   `Failure { message: "Failed to parse response: ..", code: status }`
/// - anything else: `Failure { message: "Request failed: <status> - <reason>",
///   code: status }` without reading the body
pub async fn invoke<T, F, Fut>(call: F) -> CallOutcome<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let response = match call().await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "fleet API call failed before a response arrived");
            return CallOutcome::failure(err.to_string(), 0);
        }
    };

    let status = response.status();
    let code = status.as_u16();
    if !status.is_success() {
        let message = format!(
            "Request failed: {code} - {}",
            status.canonical_reason().unwrap_or_default()
        );
        debug!(status = code, "fleet API returned an error status");
        return CallOutcome::failure(message, code);
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, status = code, "failed to read fleet API response body");
            return CallOutcome::failure(err.to_string(), 0);
        }
    };
    match serde_json::from_slice(&body) {
        Ok(value) => {
            debug!(status = code, "fleet API call succeeded");
            CallOutcome::Success(value)
        }
        Err(err) => {
            warn!(error = %err, status = code, "fleet API response did not decode");
            CallOutcome::failure(format!("{PARSE_FAILURE_PREFIX}{err}"), code)
        }
    }
}
