//! ParsePitchDeck - use case orchestrating extraction, analysis, and
//! profile construction.

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{IncompleteProfile, StartupProfile};
use crate::ports::{AnalyzerError, ExtractedText, StartupAnalyzer, TextExtractor};

/// Terminal result of a parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A complete profile was constructed.
    Profile(StartupProfile),
    /// The document yielded no extractable text; the analyzer never ran.
    NoText,
    /// The analyzer failed in a recoverable way (service error, bad reply).
    AnalysisFailed,
}

/// Failures that must surface to the caller rather than fold into a
/// "no profile" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDeckError {
    /// The model judged the document to be a template.
    #[error("{0}")]
    InvalidDocument(String),

    /// The analyzer replied without a required profile field.
    #[error("{0}")]
    IncompleteProfile(#[from] IncompleteProfile),
}

/// Orchestrates the extract -> analyze -> construct pipeline.
///
/// Each stage is a hard gate: empty text ends the run before the model is
/// ever invoked, a recoverable analyzer failure ends it before profile
/// construction, and only an invalid-document or incomplete-profile
/// condition escapes as an error.
pub struct ParsePitchDeck {
    extractor: Arc<dyn TextExtractor>,
    analyzer: Arc<dyn StartupAnalyzer>,
}

impl ParsePitchDeck {
    pub fn new(extractor: Arc<dyn TextExtractor>, analyzer: Arc<dyn StartupAnalyzer>) -> Self {
        Self {
            extractor,
            analyzer,
        }
    }

    pub async fn execute(&self, path: &Path) -> Result<ParseOutcome, ParseDeckError> {
        let text = match self.extractor.extract(path).await {
            ExtractedText::Content(text) => text,
            ExtractedText::Empty => {
                tracing::warn!(path = %path.display(), "no text extracted from document");
                return Ok(ParseOutcome::NoText);
            }
        };

        let draft = match self.analyzer.analyze(&text).await {
            Ok(draft) => draft,
            Err(AnalyzerError::InvalidDocument(message)) => {
                return Err(ParseDeckError::InvalidDocument(message));
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis yielded no usable mapping");
                return Ok(ParseOutcome::AnalysisFailed);
            }
        };

        let profile = StartupProfile::try_from_draft(draft)?;
        Ok(ParseOutcome::Profile(profile))
    }
}
