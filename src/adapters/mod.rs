//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative model client, mock, and the startup analyzer
//! - `http` - REST API endpoint
//! - `pdf` - PDF text extraction
//! - `storage` - Filesystem profile persistence

pub mod ai;
pub mod http;
pub mod pdf;
pub mod storage;

pub use ai::{GeminiConfig, GeminiModel, GeminiStartupAnalyzer, MockModel};
pub use pdf::PdfTextExtractor;
pub use storage::FsProfileStore;
