//! PDF text extractor built on the `pdf-extract` crate.

use async_trait::async_trait;
use std::path::Path;

use crate::ports::{ExtractedText, TextExtractor};

/// Extracts the concatenated page text of a PDF document.
///
/// `pdf-extract` opens the document, walks the pages in order, and releases
/// the handle before returning, on success and failure alike. Decoding runs
/// on the blocking pool; a failure of any kind (unreadable file, corrupt
/// PDF, extraction panic) is logged and reported as [`ExtractedText::Empty`].
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> ExtractedText {
        let path = path.to_path_buf();
        let result =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path)).await;

        match result {
            Ok(Ok(text)) => {
                tracing::debug!(chars = text.len(), "pdf text extracted");
                ExtractedText::from_raw(text)
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "could not read pdf");
                ExtractedText::Empty
            }
            Err(err) => {
                // join error: the decoder panicked on a malformed document
                tracing::warn!(error = %err, "pdf extraction task failed");
                ExtractedText::Empty
            }
        }
    }
}
