//! Types describing the per-request chat input and its extraction result.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::ValidationError;

/// Media type of form-encoded bodies.
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Which input channel supplied the message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentKind {
    /// `{"message": "..."}` body.
    Json,
    /// `message=...` form field.
    Form,
    /// Plain-text body, whitespace trimmed.
    RawText,
    /// Nothing usable was found.
    #[default]
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    Missing,
}

/// Read-only view of a chat request handed to every extraction strategy.
#[derive(Debug, Clone)]
pub struct ChatInput<'a> {
    /// Lowercased media type without parameters (e.g. `application/json`).
    media_type: Option<String>,
    /// Raw request body.
    body: &'a [u8],
    /// Body parsed as JSON, if it is valid JSON.
    json: Option<Value>,
}

impl<'a> ChatInput<'a> {
    /// Build the input from a declared media type and the body bytes.
    pub fn new(content_type: Option<&str>, body: &'a [u8]) -> Self {
        let media_type = content_type.and_then(media_type_essence);
        let json = serde_json::from_slice(body).ok();

        Self {
            media_type,
            body,
            json,
        }
    }

    /// Build the input from request headers and the body bytes.
    pub fn from_headers(headers: &HeaderMap, body: &'a [u8]) -> Self {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        Self::new(content_type, body)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Body parsed as JSON, if valid.
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Declared media type, if any.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Whether the client declared a JSON media type (`application/json`, `*+json`).
    pub fn declares_json(&self) -> bool {
        self.media_type()
            .is_some_and(|m| m == "application/json" || m.ends_with("+json"))
    }
}

/// Strip parameters and normalize case: `Application/JSON; charset=utf-8` -> `application/json`.
fn media_type_essence(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim();
    if essence.is_empty() {
        None
    } else {
        Some(essence.to_ascii_lowercase())
    }
}

/// Outcome of running the extraction pipeline on one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPayload {
    /// Channel that supplied the message.
    pub content_kind: ContentKind,
    /// Extracted message.
    pub message: Option<String>,
}

impl RequestPayload {
    /// Payload found on the given channel.
    pub fn found(content_kind: ContentKind, message: String) -> Self {
        Self {
            content_kind,
            message: Some(message),
        }
    }

    /// Return the message, or the validation error when none was found.
    pub fn into_message(self) -> Result<String, ValidationError> {
        self.message.ok_or(ValidationError::MessageRequired)
    }
}
