//! REST API endpoint for infringement analysis

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::{AnalysisReport, InfringementLikelihood, InfringementVerdict, ProductAssessment};
use crate::service::AnalysisService;

/// Request body for an infringement analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub patent_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Analyze whether a company's products infringe a patent
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisReport),
        (status = 400, description = "Missing patent_id or company_name"),
        (status = 404, description = "Claims or products could not be fetched")
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let patent_id = body.patent_id.as_deref().unwrap_or("");
    let company_name = body.company_name.as_deref().unwrap_or("");

    if patent_id.is_empty() || company_name.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let report = service.analyze(patent_id, company_name).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(
        AnalyzeRequest,
        AnalysisReport,
        ProductAssessment,
        InfringementVerdict,
        InfringementLikelihood
    )),
    tags(
        (name = "analysis", description = "Patent infringement analysis"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;
