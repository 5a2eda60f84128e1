//! Text Extractor Port - Interface for pulling raw text out of a document.

use async_trait::async_trait;
use std::path::Path;

/// Port for document text extraction.
///
/// Implementations open the document at `path`, concatenate the per-page
/// text in page order, and release the document handle on every exit path.
/// Extraction failures are recovered locally: an unreadable or corrupt
/// document yields [`ExtractedText::Empty`], never an error, so callers
/// have a single "no text" branch for this stage.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> ExtractedText;
}

/// Outcome of a text extraction.
///
/// An explicit tag rather than an empty string, so callers branch on the
/// variant instead of probing string length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    /// At least some non-whitespace text was found.
    Content(String),
    /// The document was unreadable or contained no text.
    Empty,
}

impl ExtractedText {
    /// Classifies raw extractor output; whitespace-only text counts as empty.
    pub fn from_raw(text: String) -> Self {
        if text.trim().is_empty() {
            ExtractedText::Empty
        } else {
            ExtractedText::Content(text)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ExtractedText::Empty)
    }
}
