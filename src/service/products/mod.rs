//! Company products fetcher
//!
//! Symmetric to the claims fetcher: asks the LLM for a product list and
//! degrades every failure mode to an empty list.

use std::sync::Arc;

use crate::model::{ExtractedProducts, Product};
use crate::service::llm::{LanguageModel, LlmError};
use crate::service::sanitize::sanitize_for_prompt;

pub mod prompts;

use prompts::build_products_prompt;

/// Service for fetching a company's products via the LLM
pub struct ProductsService {
    model: Arc<dyn LanguageModel>,
}

impl ProductsService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Fetch products for a company, in the order the model returned them
    pub async fn fetch(&self, company_name: &str) -> Vec<Product> {
        let prompt = build_products_prompt(&sanitize_for_prompt(company_name));

        let raw = match self.model.complete_json(&prompt).await {
            Ok(raw) => raw,
            Err(LlmError::RateLimited) => {
                tracing::warn!(company = %company_name, "Products fetch rate limited");
                return vec![];
            }
            Err(e) => {
                tracing::error!(company = %company_name, error = %e, "Products fetch failed");
                return vec![];
            }
        };

        match serde_json::from_str::<ExtractedProducts>(&raw) {
            Ok(extracted) => {
                tracing::debug!(
                    company = %company_name,
                    product_count = extracted.products.len(),
                    "Fetched company products"
                );
                extracted.products
            }
            Err(e) => {
                tracing::error!(
                    company = %company_name,
                    error = %e,
                    "Failed to parse products response"
                );
                vec![]
            }
        }
    }
}
