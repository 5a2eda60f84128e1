//! Deck Parser - Pitch Deck Analysis Service
//!
//! This crate extracts text from uploaded pitch-deck PDFs and turns it into
//! structured startup profiles via a generative-language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
