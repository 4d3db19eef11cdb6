//! OpenAI chat completions client
//!
//! Requests JSON-object responses and maps HTTP 429 to a distinct rate-limit
//! error so callers can degrade it separately from opaque failures.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::service::llm::{LanguageModel, LlmError};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable overriding the completion model
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";
/// Environment variable overriding the API base URL
const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// OpenAI-backed completion client, constructed once at startup and shared
/// across requests
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str) -> Self {
        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var(ENV_OPENAI_BASE_URL).unwrap_or_else(|_| OPENAI_API_BASE.to_string());

        tracing::info!(model = %model, "OpenAI completion client initialized");

        Self {
            client: Client::builder()
                .user_agent("patent-infringement-intel/0.1")
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: api_key.to_string(),
            model,
            base_url,
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Initiating OpenAI API call"
        );

        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(model = %self.model, "OpenAI API rate limited");
            return Err(LlmError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Parse("completion contained no choices".to_string()))?;

        tracing::info!(
            model = %self.model,
            elapsed_ms = start_time.elapsed().as_millis(),
            prompt_length = prompt.len(),
            "OpenAI API call completed successfully"
        );

        Ok(content)
    }
}
