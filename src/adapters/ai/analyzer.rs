//! Startup analyzer over a generative model.
//!
//! Builds the fixed extraction prompt, invokes the model, strips markdown
//! code fences from the raw reply, parses it as JSON, and enforces the
//! template-document and sectors invariants.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ProfileDraft, COMPANY_NOT_FOUND};
use crate::ports::{AnalyzerError, GenerativeModel, StartupAnalyzer};

/// Message surfaced to the caller when the model recognizes a template
/// rather than a specific pitch deck.
const TEMPLATE_DOCUMENT_MESSAGE: &str =
    "The document appears to be a template, not a specific pitch deck.";

/// Analyzer that prompts a generative model and validates its JSON reply.
pub struct GeminiStartupAnalyzer {
    model: Arc<dyn GenerativeModel>,
}

impl GeminiStartupAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Builds the fixed extraction prompt with the deck text interpolated
    /// verbatim.
    fn build_prompt(text: &str) -> String {
        format!(
            r#"Act as an expert Venture Capital analyst. Your primary goal is to parse a startup's pitch deck to find inputs for a lead generation tool.

**Important Instructions:**
- Ignore any text that is generic, instructional, or appears to be a template.
- If you cannot find a specific company name because the text is a guide, you MUST return "{sentinel}" for the "companyName" field.
- For "sectors", identify a list of relevant industries, technologies, or verticals. Be specific (e.g., "AI", "Healthcare Tech", "B2B SaaS").

Extract the following information and return it ONLY as a valid JSON object:
1.  **companyName**: The official name of the startup.
2.  **description**: A single, concise sentence describing what the company does.
3.  **problem**: The core problem the startup is solving.
4.  **solution**: The startup's proposed solution.
5.  **fundingInfo**: The specific funding amount and round they are seeking (e.g., "$5M Series A", "Seed Round"). If not found, leave as null.
6.  **sectors**: A JSON list of keywords, sectors, and verticals that describe the company's focus.

Pitch Deck Text:
---
{text}
---"#,
            sentinel = COMPANY_NOT_FOUND,
            text = text
        )
    }

    /// Strips markdown code-fence markers the model tends to wrap JSON in.
    fn strip_code_fences(reply: &str) -> String {
        reply.trim().replace("```json", "").replace("```", "")
    }
}

#[async_trait]
impl StartupAnalyzer for GeminiStartupAnalyzer {
    async fn analyze(&self, text: &str) -> Result<ProfileDraft, AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::NoText);
        }

        tracing::info!(
            model = %self.model.model_info().model,
            "sending pitch deck text for analysis"
        );

        let reply = self
            .model
            .generate(&Self::build_prompt(text))
            .await
            .map_err(|err| AnalyzerError::ModelFailure(err.to_string()))?;

        let cleaned = Self::strip_code_fences(&reply);
        let draft: ProfileDraft = serde_json::from_str(&cleaned)
            .map_err(|err| AnalyzerError::MalformedReply(err.to_string()))?;

        if draft.company_name.as_deref() == Some(COMPANY_NOT_FOUND) {
            return Err(AnalyzerError::InvalidDocument(
                TEMPLATE_DOCUMENT_MESSAGE.to_string(),
            ));
        }

        tracing::info!("analysis complete");
        Ok(draft)
    }
}
