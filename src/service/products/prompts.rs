//! Prompt for company product enumeration

/// Build the products fetch prompt for a (sanitized) company name
pub fn build_products_prompt(company_name: &str) -> String {
    format!(
        "Provide a list of products for the company '{company_name}'. Return a JSON response \
         with a 'products' field containing a list of objects with 'name' and 'summary' fields."
    )
}
