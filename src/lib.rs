//! Minimal chat echo HTTP service.
//!
//! Two routes behind one listener:
//!
//! ```text
//! GET  /health  -> 200 {"status":"ok"}
//! GET  /chat    -> 200 {"status":"ready","hint":"..."}
//! POST /chat    -> 200 {"status":"success","message":"..."}
//!               -> 400 {"status":"error","error":"..."}
//! ```
//!
//! `POST /chat` looks for the message in a JSON `message` field, then a
//! form-encoded `message` field, then the trimmed plain-text body.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`envelope`]: JSON response bodies
//! - [`payload`]: Message extraction pipeline
//! - [`api`]: Router, handlers and CORS policy
//! - [`server`]: Listener with graceful shutdown
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
