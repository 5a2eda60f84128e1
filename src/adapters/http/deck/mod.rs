//! HTTP adapter for the deck parsing endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, ProfileResponse};
pub use handlers::DeckHandlers;
pub use routes::deck_routes;
