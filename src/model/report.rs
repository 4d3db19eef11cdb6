//! Analysis report models returned by the /analyze endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Likelihood that a product infringes the analyzed claim set
///
/// Values outside the known set coerce to `Unknown` on deserialization so a
/// misbehaving model cannot break the API contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InfringementLikelihood {
    High,
    Moderate,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Structured infringement assessment for one product against the claim set
///
/// All fields are defaulted on ingress: the LLM is asked for exactly this
/// shape, but missing or malformed fields degrade to empty values rather than
/// failing the analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct InfringementVerdict {
    #[serde(default)]
    pub infringement_likelihood: InfringementLikelihood,
    #[serde(default)]
    pub relevant_claims: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub specific_features: Vec<String>,
}

impl InfringementVerdict {
    /// Canned Unknown verdict used when no analysis could be performed
    pub fn unavailable(explanation: &str) -> Self {
        Self {
            infringement_likelihood: InfringementLikelihood::Unknown,
            relevant_claims: vec![],
            explanation: explanation.to_string(),
            specific_features: vec![],
        }
    }
}

/// One entry of `top_infringing_products`: the product name plus the verdict
/// fields at the same JSON level
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductAssessment {
    pub product_name: String,
    #[serde(flatten)]
    pub verdict: InfringementVerdict,
}

/// Complete analysis report for one patent/company pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub patent_id: String,
    pub company_name: String,
    /// Generation date, `YYYY-MM-DD`
    pub analysis_date: String,
    pub top_infringing_products: Vec<ProductAssessment>,
    pub overall_risk_assessment: String,
}
