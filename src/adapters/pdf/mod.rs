//! PDF adapter - text extraction from uploaded documents.

mod extractor;

pub use extractor::PdfTextExtractor;
