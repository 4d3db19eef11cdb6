//! Prompt for patent claim enumeration

/// Build the claims fetch prompt for a (sanitized) patent identifier
pub fn build_claims_prompt(patent_id: &str) -> String {
    format!(
        "Provide the patent claims for patent ID '{patent_id}'. Return a JSON response with a \
         'claims' field containing a list of claims in the format 'claim_id: claim_description'."
    )
}
