//! HTTP adapters - REST API implementation.

pub mod deck;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use deck::DeckHandlers;

/// Assembles the application router with CORS restricted to the configured
/// origin.
pub fn app(handlers: DeckHandlers, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    deck::deck_routes(handlers)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
