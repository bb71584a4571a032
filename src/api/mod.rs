//! HTTP API module for the health and chat endpoints.

pub mod cors;
pub mod handlers;
pub mod routes;

pub use cors::CorsPolicy;
pub use handlers::AppState;
pub use routes::create_router;
