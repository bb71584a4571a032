//! Unified error types for the chat echo service.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::envelope::ErrorResponse;

/// Startup and listener errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// None of the input channels produced a non-empty message.
    #[error("'message' field is required (JSON, form field or plain-text body)")]
    MessageRequired,
}

/// Errors a handler answers with. Every variant renders the JSON error envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request carried no usable message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body exceeded the configured limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge {
        /// Limit in bytes.
        limit: usize,
    },

    /// Transport failure while reading the request body.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// No route for the path.
    #[error("no route for {0}")]
    NotFound(String),

    /// Route exists but not for this method.
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else if status == StatusCode::PAYLOAD_TOO_LARGE {
            warn!(error = %self, "request rejected");
        } else {
            debug!(error = %self, "request rejected");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
