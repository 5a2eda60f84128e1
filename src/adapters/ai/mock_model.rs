//! Mock generative model for testing.
//!
//! Configurable to return queued replies or inject errors, with call
//! tracking so tests can verify whether and how the model was prompted.
//!
//! # Example
//!
//! ```ignore
//! let model = MockModel::new().with_reply(r#"{"companyName": "Acme"}"#);
//!
//! let reply = model.generate("prompt").await?;
//! assert_eq!(model.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerativeModel, ModelError, ModelInfo};

/// Mock generative model for testing.
#[derive(Debug, Clone, Default)]
pub struct MockModel {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<Result<String, ModelError>>>>,
    /// Prompts received, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// Creates a new mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ModelError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock reply".to_string()))
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo::new("mock", "mock-model-1")
    }
}
