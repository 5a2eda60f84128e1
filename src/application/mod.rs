//! Application layer - use cases orchestrating the domain and ports.

mod parse_pitch_deck;

pub use parse_pitch_deck::{ParseDeckError, ParseOutcome, ParsePitchDeck};
