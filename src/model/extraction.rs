//! JSON envelopes expected back from the LLM for claim and product fetches

use serde::{Deserialize, Serialize};

/// Response envelope for a patent claims fetch
///
/// A response without a `claims` field parses as an empty list, which the
/// pipeline treats as a failed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedClaims {
    #[serde(default)]
    pub claims: Vec<String>,
}

/// Response envelope for a company products fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedProducts {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A single product as described by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_claims_field_defaults_to_empty() {
        let extracted: ExtractedClaims = serde_json::from_str("{}").unwrap();
        assert!(extracted.claims.is_empty());
    }

    #[test]
    fn missing_products_field_defaults_to_empty() {
        let extracted: ExtractedProducts =
            serde_json::from_str(r#"{"unexpected": true}"#).unwrap();
        assert!(extracted.products.is_empty());
    }

    #[test]
    fn products_parse_name_and_summary() {
        let extracted: ExtractedProducts = serde_json::from_str(
            r#"{"products": [{"name": "GearBot", "summary": "a robot with rotating gears"}]}"#,
        )
        .unwrap();
        assert_eq!(extracted.products.len(), 1);
        assert_eq!(extracted.products[0].name, "GearBot");
    }
}
