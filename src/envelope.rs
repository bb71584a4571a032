//! JSON response envelopes. Every body carries a `status` field.

use serde::Serialize;
use strum::Display;

/// Value of the `status` field carried by every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResponseStatus {
    /// Health check passed.
    Ok,
    /// Chat message accepted.
    Success,
    /// Request rejected.
    Error,
    /// Chat endpoint ready for POST.
    Ready,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: ResponseStatus,
}

/// `GET /chat` response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Always `ready`.
    pub status: ResponseStatus,
    /// How to issue a valid POST.
    pub hint: &'static str,
}

/// Accepted chat message.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Always `success`.
    pub status: ResponseStatus,
    /// The extracted message, unmodified.
    pub message: String,
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `error`.
    pub status: ResponseStatus,
    /// Human-readable reason.
    pub error: String,
}

impl ErrorResponse {
    /// Create an error envelope with the given reason.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: error.into(),
        }
    }
}
