//! HTTP API handlers.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::IntoResponse,
    Json,
};
use http_body_util::LengthLimitError;
use tracing::{debug, instrument};

use super::cors::CorsPolicy;
use crate::config::{Config, DEFAULT_BODY_LIMIT};
use crate::envelope::{ChatResponse, HealthResponse, ReadyResponse, ResponseStatus};
use crate::error::ApiError;
use crate::payload::{extract_message, ChatInput};

/// Usage hint returned by `GET /chat`.
pub const CHAT_HINT: &str = "POST /chat with a JSON body {\"message\": \"...\"}, \
     a form field 'message', or a plain-text body";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Maximum accepted chat body size in bytes.
    pub body_limit: usize,
    /// Cross-origin policy applied to every response.
    pub cors: CorsPolicy,
}

impl AppState {
    /// Create new app state with default limits and an allow-all CORS policy.
    pub fn new() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
            cors: CorsPolicy::allow_all(),
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            body_limit: config.max_body_bytes,
            cors: CorsPolicy::allow_all().with_max_age(config.cors_max_age()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: ResponseStatus::Ok,
    })
}

/// Chat usage handler - always returns 200 with a hint, query ignored.
pub async fn chat_ready() -> impl IntoResponse {
    Json(ReadyResponse {
        status: ResponseStatus::Ready,
        hint: CHAT_HINT,
    })
}

/// Chat handler - echoes the first message found in JSON, form or raw text.
#[instrument(skip_all, fields(limit = state.body_limit))]
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<ChatResponse>, ApiError> {
    let bytes = axum::body::to_bytes(body, state.body_limit)
        .await
        .map_err(|e| body_error(e, state.body_limit))?;

    let input = ChatInput::from_headers(&headers, &bytes);
    let payload = extract_message(&input);
    debug!(
        content_kind = %payload.content_kind,
        media_type = input.media_type().unwrap_or("-"),
        body_len = bytes.len(),
        "extracted chat payload"
    );

    let message = payload.into_message()?;
    Ok(Json(ChatResponse {
        status: ResponseStatus::Success,
        message,
    }))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

fn body_error(error: axum::Error, limit: usize) -> ApiError {
    let inner = error.into_inner();
    if inner.downcast_ref::<LengthLimitError>().is_some() {
        ApiError::PayloadTooLarge { limit }
    } else {
        ApiError::BodyRead(inner.to_string())
    }
}
