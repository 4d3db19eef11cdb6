//! Prompt for the infringement judgment

/// Build the infringement analysis prompt for one product against the full
/// claim set
pub fn build_infringement_prompt(
    claims: &[String],
    product_name: &str,
    product_summary: &str,
) -> String {
    format!(
        "Analyze whether '{product_name}' with the summary '{product_summary}' infringes on the \
         following patent claims: {claims}. Provide a JSON response with the following fields: \
         infringement_likelihood (High, Moderate, or Low), relevant_claims (list of claim IDs), \
         explanation (string), and specific_features (list of features from the claims that \
         match).",
        claims = claims.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_all_claims_comma_joined() {
        let claims = vec![
            "1: A widget with a rotating gear".to_string(),
            "2: A widget with a lever".to_string(),
        ];
        let prompt = build_infringement_prompt(&claims, "GearBot", "a robot with rotating gears");

        assert!(prompt.contains("1: A widget with a rotating gear, 2: A widget with a lever"));
        assert!(prompt.contains("'GearBot'"));
        assert!(prompt.contains("'a robot with rotating gears'"));
        assert!(prompt.contains("infringement_likelihood"));
    }
}
