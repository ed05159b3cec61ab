//! Submission of the finished answer set and interpretation of the reply.

pub mod render;
pub mod transport;

use serde_json::Value;
use tracing::warn;

use crate::{
    domain::Suggestion,
    form::{StatusBanner, StatusKind},
};

pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};

pub const PROCESSING_MESSAGE: &str = "Processing...";
pub const SUGGESTIONS_MESSAGE: &str = "Profile saved and suggestions generated.";
pub const SAVED_MESSAGE: &str = "Profile saved.";
pub const FORMAT_ERROR_MESSAGE: &str = "Unexpected response format.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error while saving and generating suggestions.";
pub const MISSING_INDUSTRY_MESSAGE: &str = "Please choose your family's industry.";
pub const INCOMPLETE_MESSAGE: &str = "Please answer every required question first.";

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ranked suggestions came back and were rendered.
    Suggestions(Vec<Suggestion>),
    /// The backend acknowledged a save without suggestions.
    Saved { message: String },
    /// Non-2xx status.
    ServerError { status: u16, detail: Option<String> },
    /// 2xx status with a body of unexpected shape.
    FormatError,
    /// The request never produced a response.
    NetworkError(String),
    /// Submission refused locally; nothing was cleared or sent.
    Blocked(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Suggestions(_) | SubmitOutcome::Saved { .. }
        )
    }

    /// Whether a request was actually issued.
    pub fn was_sent(&self) -> bool {
        !matches!(self, SubmitOutcome::Blocked(_))
    }

    /// User-facing status line for this outcome.
    pub fn banner(&self) -> StatusBanner {
        match self {
            SubmitOutcome::Suggestions(_) => {
                StatusBanner::new(StatusKind::Success, SUGGESTIONS_MESSAGE)
            }
            SubmitOutcome::Saved { message } => {
                StatusBanner::new(StatusKind::Success, message.clone())
            }
            SubmitOutcome::ServerError { status, detail } => {
                let text = match detail {
                    Some(detail) => format!("Server error (HTTP {status}): {detail}"),
                    None => format!("Server error (HTTP {status})"),
                };
                StatusBanner::new(StatusKind::Error, text)
            }
            SubmitOutcome::FormatError => {
                StatusBanner::new(StatusKind::Error, FORMAT_ERROR_MESSAGE)
            }
            SubmitOutcome::NetworkError(_) => {
                StatusBanner::new(StatusKind::Error, NETWORK_ERROR_MESSAGE)
            }
            SubmitOutcome::Blocked(reason) => StatusBanner::new(StatusKind::Error, reason.clone()),
        }
    }
}

/// Interprets a transport response.
///
/// Any non-2xx status is a server error whatever the body says. A 2xx body
/// must be either an array of suggestions or an object with a truthy `ok`.
pub fn classify_response(response: &TransportResponse) -> SubmitOutcome {
    let parsed: Option<Value> = serde_json::from_str(&response.body).ok();

    if !response.is_success() {
        let detail = parsed
            .as_ref()
            .and_then(|value| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string);
        warn!(status = response.status, ?detail, "server rejected submission");
        return SubmitOutcome::ServerError {
            status: response.status,
            detail,
        };
    }

    match parsed {
        Some(Value::Array(items)) => {
            match serde_json::from_value::<Vec<Suggestion>>(Value::Array(items)) {
                Ok(suggestions) => SubmitOutcome::Suggestions(suggestions),
                Err(err) => {
                    warn!(error = %err, "suggestion list has unexpected entries");
                    SubmitOutcome::FormatError
                }
            }
        }
        Some(Value::Object(map)) if map.get("ok").is_some_and(is_truthy) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(SAVED_MESSAGE)
                .to_string();
            SubmitOutcome::Saved { message }
        }
        other => {
            warn!(body = ?other, "unexpected response body");
            SubmitOutcome::FormatError
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
