//! HTTP routes for the deck parsing endpoint.

use axum::{routing::post, Router};

use super::handlers::{parse_deck, DeckHandlers};

/// Creates the deck router.
pub fn deck_routes(handlers: DeckHandlers) -> Router {
    Router::new()
        .route("/api/v1/parse-deck", post(parse_deck))
        .with_state(handlers)
}
