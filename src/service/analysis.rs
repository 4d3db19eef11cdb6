//! Analysis orchestration
//!
//! Runs the pipeline for one request: fetch claims, fetch products, judge the
//! top products, assemble the report.

use chrono::Utc;

use crate::model::{AnalysisReport, InfringementLikelihood, ProductAssessment};
use crate::service::claims::ClaimsService;
use crate::service::infringement::InfringementService;
use crate::service::products::ProductsService;

/// Number of products judged per analysis, in fetcher return order
const TOP_PRODUCT_COUNT: usize = 2;

/// Reports carry a fixed placeholder identifier; no uniqueness scheme exists
/// upstream.
const ANALYSIS_ID: &str = "1";

const HIGH_RISK: &str = "High risk";
const MODERATE_RISK: &str = "Moderate risk";

/// Error type for a failed analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Could not fetch patent claims or company products")]
    UpstreamEmpty,
}

/// Service orchestrating one infringement analysis per request
pub struct AnalysisService {
    claims: ClaimsService,
    products: ProductsService,
    infringement: InfringementService,
}

impl AnalysisService {
    pub fn new(
        claims: ClaimsService,
        products: ProductsService,
        infringement: InfringementService,
    ) -> Self {
        Self {
            claims,
            products,
            infringement,
        }
    }

    /// Run the full pipeline for one patent/company pair
    ///
    /// Fails only when either upstream fetch yields nothing; judge failures
    /// degrade into the report as Unknown verdicts.
    pub async fn analyze(
        &self,
        patent_id: &str,
        company_name: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let claims = self.claims.fetch(patent_id).await;
        let products = self.products.fetch(company_name).await;

        if claims.is_empty() || products.is_empty() {
            tracing::warn!(
                patent_id = %patent_id,
                company = %company_name,
                claim_count = claims.len(),
                product_count = products.len(),
                "Analysis aborted, upstream fetch returned nothing"
            );
            return Err(AnalysisError::UpstreamEmpty);
        }

        let mut assessments = Vec::with_capacity(TOP_PRODUCT_COUNT);
        for product in products.iter().take(TOP_PRODUCT_COUNT) {
            let verdict = self
                .infringement
                .judge(&claims, &product.name, &product.summary)
                .await;
            assessments.push(ProductAssessment {
                product_name: product.name.clone(),
                verdict,
            });
        }

        // Any High verdict marks the whole report High; everything else,
        // including all-Low and all-Unknown, stays Moderate. There is no
        // lower category.
        let overall = if assessments
            .iter()
            .any(|a| a.verdict.infringement_likelihood == InfringementLikelihood::High)
        {
            HIGH_RISK
        } else {
            MODERATE_RISK
        };

        tracing::info!(
            patent_id = %patent_id,
            company = %company_name,
            products_assessed = assessments.len(),
            overall_risk = overall,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            analysis_id: ANALYSIS_ID.to_string(),
            patent_id: patent_id.to_string(),
            company_name: company_name.to_string(),
            analysis_date: Utc::now().format("%Y-%m-%d").to_string(),
            top_infringing_products: assessments,
            overall_risk_assessment: overall.to_string(),
        })
    }
}
