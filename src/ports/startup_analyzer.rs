//! Startup Analyzer Port - Interface for turning deck text into a profile draft.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ProfileDraft;

/// Port for pitch-deck analysis.
///
/// Implementations prompt a generative model with the deck text and parse
/// its JSON reply into a [`ProfileDraft`]. Only
/// [`AnalyzerError::InvalidDocument`] is meant to reach the API boundary;
/// the remaining variants are recovered by the orchestration into a
/// "no profile" outcome.
#[async_trait]
pub trait StartupAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<ProfileDraft, AnalyzerError>;
}

/// Analyzer failures, tagged so callers branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// The model judged the content to be a generic template, not a real
    /// deck. Always propagated unchanged to the caller.
    #[error("{0}")]
    InvalidDocument(String),

    /// Empty input text; the model is never invoked for it.
    #[error("no text to analyze")]
    NoText,

    /// The model call itself failed (network, timeout, service error).
    #[error("model request failed: {0}")]
    ModelFailure(String),

    /// The model replied, but not with parseable JSON.
    #[error("model reply was not valid JSON: {0}")]
    MalformedReply(String),
}

impl AnalyzerError {
    /// True for the one condition that must surface to the user unchanged.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, AnalyzerError::InvalidDocument(_))
    }
}
