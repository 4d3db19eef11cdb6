//! LLM completion seam shared by all pipeline services
//!
//! The completion capability is a trait so tests can substitute scripted
//! models without touching process-wide state.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited")]
    RateLimited,

    #[error("Completion request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse model response: {0}")]
    Parse(String),
}

/// A model that answers a single free-text prompt with a JSON object
///
/// Implementations must surface provider rate limiting as
/// `LlmError::RateLimited`; the pipeline degrades that case differently from
/// opaque failures.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Issue a prompt expecting structured output; returns the raw JSON text
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted model that replays queued responses in call order
    pub struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String, LlmError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of completion calls issued so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        async fn complete_json(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("ScriptedModel received more calls than scripted responses")
        }
    }
}
