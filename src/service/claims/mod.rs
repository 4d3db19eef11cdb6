//! Patent claims fetcher
//!
//! Asks the LLM to enumerate claims for a patent identifier. Every failure
//! mode degrades to an empty list; nothing here raises to the caller.

use std::sync::Arc;

use crate::model::ExtractedClaims;
use crate::service::llm::{LanguageModel, LlmError};
use crate::service::sanitize::sanitize_for_prompt;

pub mod prompts;

use prompts::build_claims_prompt;

/// Service for fetching patent claims via the LLM
pub struct ClaimsService {
    model: Arc<dyn LanguageModel>,
}

impl ClaimsService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Fetch claims for a patent identifier
    ///
    /// Returns an empty list on rate limiting, parse failure, or any other
    /// provider error. An empty list signals a failed fetch downstream.
    pub async fn fetch(&self, patent_id: &str) -> Vec<String> {
        let prompt = build_claims_prompt(&sanitize_for_prompt(patent_id));

        let raw = match self.model.complete_json(&prompt).await {
            Ok(raw) => raw,
            Err(LlmError::RateLimited) => {
                tracing::warn!(patent_id = %patent_id, "Claims fetch rate limited");
                return vec![];
            }
            Err(e) => {
                tracing::error!(patent_id = %patent_id, error = %e, "Claims fetch failed");
                return vec![];
            }
        };

        match serde_json::from_str::<ExtractedClaims>(&raw) {
            Ok(extracted) => {
                tracing::debug!(
                    patent_id = %patent_id,
                    claim_count = extracted.claims.len(),
                    "Fetched patent claims"
                );
                extracted.claims
            }
            Err(e) => {
                tracing::error!(
                    patent_id = %patent_id,
                    error = %e,
                    "Failed to parse claims response"
                );
                vec![]
            }
        }
    }
}
