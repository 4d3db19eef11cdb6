//! Input constraints applied before interpolating caller-supplied text into
//! prompts
//!
//! The prompt is a trust boundary with the LLM: identifiers arrive verbatim
//! from the request body, so control characters are stripped and length is
//! capped before templating. Reports still echo the caller's original values.

/// Maximum length, in characters, of a caller-supplied field inside a prompt
const MAX_PROMPT_FIELD_CHARS: usize = 256;

/// Strip control characters and cap length for prompt interpolation
pub fn sanitize_for_prompt(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_PROMPT_FIELD_CHARS)
        .collect()
}
