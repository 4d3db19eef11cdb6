//! Infringement judge
//!
//! Compares one product against the fetched claim set via the LLM and always
//! produces a verdict: canned Unknown verdicts stand in for every failure
//! mode, with the explanation distinguishing rate limiting from other errors.

use std::sync::Arc;

use crate::model::InfringementVerdict;
use crate::service::llm::{LanguageModel, LlmError};

pub mod prompts;

use prompts::build_infringement_prompt;

/// Explanation used when the claim set is empty and no analysis is possible
const NO_CLAIMS_EXPLANATION: &str = "No patent claims available for analysis.";
/// Explanation used when the provider reports quota exhaustion
const RATE_LIMIT_EXPLANATION: &str =
    "Unable to analyze due to OpenAI API rate limit. Please try again later or check your API quota.";
/// Explanation used for any other analysis failure
const ANALYSIS_FAILED_EXPLANATION: &str = "Error during infringement analysis.";

/// Service judging products against a claim set
pub struct InfringementService {
    model: Arc<dyn LanguageModel>,
}

impl InfringementService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Judge one product against the claim set
    ///
    /// With an empty claim set this short-circuits to a canned Unknown
    /// verdict without calling the model.
    pub async fn judge(
        &self,
        claims: &[String],
        product_name: &str,
        product_summary: &str,
    ) -> InfringementVerdict {
        if claims.is_empty() {
            return InfringementVerdict::unavailable(NO_CLAIMS_EXPLANATION);
        }

        let prompt = build_infringement_prompt(claims, product_name, product_summary);

        let raw = match self.model.complete_json(&prompt).await {
            Ok(raw) => raw,
            Err(LlmError::RateLimited) => {
                tracing::warn!(product = %product_name, "Infringement analysis rate limited");
                return InfringementVerdict::unavailable(RATE_LIMIT_EXPLANATION);
            }
            Err(e) => {
                tracing::error!(
                    product = %product_name,
                    error = %e,
                    "Infringement analysis failed"
                );
                return InfringementVerdict::unavailable(ANALYSIS_FAILED_EXPLANATION);
            }
        };

        match serde_json::from_str::<InfringementVerdict>(&raw) {
            Ok(verdict) => {
                tracing::debug!(
                    product = %product_name,
                    likelihood = ?verdict.infringement_likelihood,
                    "Infringement verdict produced"
                );
                verdict
            }
            Err(e) => {
                tracing::error!(
                    product = %product_name,
                    error = %e,
                    "Failed to parse infringement verdict"
                );
                InfringementVerdict::unavailable(ANALYSIS_FAILED_EXPLANATION)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InfringementLikelihood;
    use crate::service::llm::testing::ScriptedModel;

    fn claims() -> Vec<String> {
        vec!["1: A widget with a rotating gear".to_string()]
    }

    #[tokio::test]
    async fn empty_claims_short_circuits_without_model_call() {
        let model = Arc::new(ScriptedModel::new(vec![]));
        let service = InfringementService::new(Arc::clone(&model) as Arc<dyn LanguageModel>);

        let verdict = service.judge(&[], "GearBot", "a robot").await;

        assert_eq!(verdict.infringement_likelihood, InfringementLikelihood::Unknown);
        assert_eq!(verdict.explanation, NO_CLAIMS_EXPLANATION);
        assert!(verdict.relevant_claims.is_empty());
        assert!(verdict.specific_features.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn passes_through_model_verdict() {
        let model = Arc::new(ScriptedModel::new(vec![Ok(r#"{
            "infringement_likelihood": "High",
            "relevant_claims": ["1"],
            "explanation": "The rotating gear matches claim 1.",
            "specific_features": ["rotating gear"]
        }"#
            .to_string())]));
        let service = InfringementService::new(model);

        let verdict = service
            .judge(&claims(), "GearBot", "a robot with rotating gears")
            .await;

        assert_eq!(verdict.infringement_likelihood, InfringementLikelihood::High);
        assert_eq!(verdict.relevant_claims, vec!["1"]);
        assert_eq!(verdict.specific_features, vec!["rotating gear"]);
    }

    #[tokio::test]
    async fn rate_limit_yields_quota_explanation() {
        let model = Arc::new(ScriptedModel::new(vec![Err(LlmError::RateLimited)]));
        let service = InfringementService::new(model);

        let verdict = service.judge(&claims(), "GearBot", "a robot").await;

        assert_eq!(verdict.infringement_likelihood, InfringementLikelihood::Unknown);
        assert_eq!(verdict.explanation, RATE_LIMIT_EXPLANATION);
    }

    #[tokio::test]
    async fn unparseable_verdict_yields_generic_explanation() {
        let model = Arc::new(ScriptedModel::new(vec![Ok("not json".to_string())]));
        let service = InfringementService::new(model);

        let verdict = service.judge(&claims(), "GearBot", "a robot").await;

        assert_eq!(verdict.infringement_likelihood, InfringementLikelihood::Unknown);
        assert_eq!(verdict.explanation, ANALYSIS_FAILED_EXPLANATION);
    }

    #[tokio::test]
    async fn unknown_likelihood_value_coerces_to_unknown() {
        let model = Arc::new(ScriptedModel::new(vec![Ok(
            r#"{"infringement_likelihood": "Severe", "explanation": "odd output"}"#.to_string(),
        )]));
        let service = InfringementService::new(model);

        let verdict = service.judge(&claims(), "GearBot", "a robot").await;

        assert_eq!(verdict.infringement_likelihood, InfringementLikelihood::Unknown);
        assert_eq!(verdict.explanation, "odd output");
    }
}
