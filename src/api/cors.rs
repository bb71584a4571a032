//! Cross-origin policy applied to every response.

use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

/// Explicit CORS policy value. Any origin, method and header; no credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorsPolicy {
    /// How long browsers may cache a preflight answer.
    pub max_age: Option<Duration>,
}

impl CorsPolicy {
    /// Allow every origin, method and header.
    pub fn allow_all() -> Self {
        Self { max_age: None }
    }

    /// Set the preflight cache duration.
    pub fn with_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_age = max_age;
        self
    }

    /// Build the tower layer enforcing this policy.
    pub fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        match self.max_age {
            Some(max_age) => layer.max_age(max_age),
            None => layer,
        }
    }
}
