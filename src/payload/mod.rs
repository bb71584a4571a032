//! Chat message extraction.
//!
//! This module handles:
//! - The per-request input view (media type, body, parsed JSON)
//! - The ordered strategy table (JSON field, form field, raw text)

pub mod strategies;
pub mod types;

pub use strategies::{extract_message, MESSAGE_FIELD};
pub use types::{ChatInput, ContentKind, RequestPayload};
