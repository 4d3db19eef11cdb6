use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::{
    AnalysisService, ClaimsService, InfringementService, LanguageModel, OpenAiClient,
    ProductsService,
};

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // Shared LLM client (required)
    let api_key = std::env::var(ENV_OPENAI_API_KEY).expect("OPENAI_API_KEY must be set");
    let model: Arc<dyn LanguageModel> = Arc::new(OpenAiClient::new(&api_key));

    let analysis_service = web::Data::new(AnalysisService::new(
        ClaimsService::new(Arc::clone(&model)),
        ProductsService::new(Arc::clone(&model)),
        InfringementService::new(model),
    ));

    tracing::info!("Starting patent infringement intel server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(analysis_service.clone())
            .configure(api::analyze::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
