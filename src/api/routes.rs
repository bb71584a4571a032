//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{chat, chat_ready, health, method_not_allowed, not_found, AppState};

/// Health check path.
pub const HEALTH_PATH: &str = "/health";
/// Chat echo path.
pub const CHAT_PATH: &str = "/chat";

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(state.cors.layer());

    Router::new()
        .route(HEALTH_PATH, get(health).fallback(method_not_allowed))
        .route(
            CHAT_PATH,
            get(chat_ready).post(chat).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(layers)
        .with_state(state)
}
