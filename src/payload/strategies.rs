//! Ordered message extraction: JSON field, then form field, then raw text.

use std::borrow::Cow;

use serde_json::Value;

use super::types::{ChatInput, ContentKind, RequestPayload};

/// Field name looked up in JSON and form bodies.
pub const MESSAGE_FIELD: &str = "message";

/// A single extraction attempt. Returns a non-empty message or nothing.
pub type Strategy = fn(&ChatInput<'_>) -> Option<String>;

/// Strategies in evaluation order. The first non-empty result wins.
pub const STRATEGIES: [(ContentKind, Strategy); 3] = [
    (ContentKind::Json, from_json),
    (ContentKind::Form, from_form),
    (ContentKind::RawText, from_raw_text),
];

/// Run the pipeline against one request.
pub fn extract_message(input: &ChatInput<'_>) -> RequestPayload {
    STRATEGIES
        .iter()
        .find_map(|(kind, strategy)| {
            strategy(input).map(|message| RequestPayload::found(*kind, message))
        })
        .unwrap_or_default()
}

/// `{"message": "<text>"}`. Non-string values count as absent.
pub fn from_json(input: &ChatInput<'_>) -> Option<String> {
    input
        .json()?
        .get(MESSAGE_FIELD)?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

/// `message=<text>` in a form-encoded body. First occurrence wins.
pub fn from_form(input: &ChatInput<'_>) -> Option<String> {
    form_message(input.body())
        .filter(|message| !message.is_empty())
        .map(Cow::into_owned)
}

/// Whole body as text, trimmed. Skipped for bodies a structured channel claimed.
pub fn from_raw_text(input: &ChatInput<'_>) -> Option<String> {
    if is_structured(input) {
        return None;
    }

    let text = String::from_utf8_lossy(input.body());
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// A body is structured when it is a JSON document meant as one, or carries an
/// explicit `message=` pair.
///
/// Malformed JSON is never structured, even under a JSON content type, so it
/// degrades to the raw-text channel. The form content type alone does not
/// count: `curl -d "hello"` still reaches the raw-text channel.
fn is_structured(input: &ChatInput<'_>) -> bool {
    let json_document = input
        .json()
        .is_some_and(|value| matches!(value, Value::Object(_)) || input.declares_json());

    json_document || has_message_pair(input.body())
}

/// Whether some `&`-separated segment is `message=<anything>`. A bare
/// `message` key without `=` is plain text.
fn has_message_pair(body: &[u8]) -> bool {
    body.split(|byte| *byte == b'&').any(|segment| {
        let Some(eq) = segment.iter().position(|byte| *byte == b'=') else {
            return false;
        };
        url::form_urlencoded::parse(&segment[..eq])
            .next()
            .is_some_and(|(key, _)| key == MESSAGE_FIELD)
    })
}

fn form_message(body: &[u8]) -> Option<Cow<'_, str>> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == MESSAGE_FIELD)
        .map(|(_, value)| value)
}
