//! Unified API error handling
//!
//! The endpoint contract has exactly two error bodies, both of the shape
//! `{"error": "..."}` with fixed messages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required request field absent or empty (400)
    #[error("Missing patent_id or company_name")]
    MissingFields,

    /// Claims or products fetch returned nothing usable (404)
    #[error("Could not fetch patent claims or company products")]
    UpstreamEmpty,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::UpstreamEmpty => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        tracing::debug!(
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

impl From<crate::service::analysis::AnalysisError> for ApiError {
    fn from(err: crate::service::analysis::AnalysisError) -> Self {
        match err {
            crate::service::analysis::AnalysisError::UpstreamEmpty => ApiError::UpstreamEmpty,
        }
    }
}
