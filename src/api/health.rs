//! Health check endpoints for liveness and readiness probes

use actix_web::{HttpResponse, Responder, get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe endpoint
///
/// The only dependency is the stateless LLM API, which is not probed per
/// request, so readiness mirrors liveness.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/ready")]
pub async fn readiness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(liveness).service(readiness);
}
