//! Error normalization for failed requests.
//!
//! # Design
//! Every failed request — non-2xx response or transport-level failure —
//! surfaces as the same `ApiError { status, message, raw }` shape, so callers
//! inspect one structure regardless of what the transport produced. Failures
//! are reshaped, never swallowed.

use serde_json::Value;
use thiserror::Error;

use crate::http::HttpResponse;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Uniform error surfaced for every failed request.
///
/// `status` is the HTTP status code, or `0` when no response was received.
/// `raw` carries the original response payload for callers that need more
/// than the extracted message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub raw: Option<Value>,
}

impl ApiError {
    /// Normalize a non-2xx response.
    ///
    /// The message is taken from the payload's `message` field, then its
    /// `error` field, then the `"Unknown error"` fallback.
    pub fn from_response(response: &HttpResponse) -> Self {
        let raw = payload(&response.body);
        let message = raw
            .as_ref()
            .and_then(embedded_message)
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();
        Self {
            status: response.status,
            message,
            raw,
        }
    }

    /// Normalize a transport failure where no response was received.
    pub fn from_transport(message: Option<String>) -> Self {
        Self {
            status: 0,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            raw: None,
        }
    }
}

/// Parse the response body into a payload value.
///
/// Non-JSON bodies are kept verbatim as a string payload; an empty body
/// means no payload was received.
fn payload(body: &str) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

fn embedded_message(payload: &Value) -> Option<&str> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("error").and_then(Value::as_str))
}
