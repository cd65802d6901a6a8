mod config;
mod errors;
mod explanation;
mod extract;
mod llm_client;
mod model;
mod prediction;
mod roadmap;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::explanation::service::ExplanationService;
use crate::explanation::shapley::{ShapleyAttributor, DEFAULT_SEED};
use crate::model::artifact::PipelineArtifact;
use crate::model::mapper::validate_against;
use crate::model::pipeline::CareerPipeline;
use crate::prediction::service::PredictionService;
use crate::roadmap::provider::LlmRoadmapProvider;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Prediction API v{}", env!("CARGO_PKG_VERSION"));
    match &config.env_file {
        Some(path) => info!("Configuration file loaded: {}", path.display()),
        None => warn!("No configuration file found; using process environment only"),
    }

    // Load the fitted pipeline; the service cannot start without it
    let artifact = PipelineArtifact::load(&config.model_path).with_context(|| {
        format!(
            "failed to load model artifact from {}",
            config.model_path.display()
        )
    })?;
    validate_against(&artifact).context("model artifact does not match the input schema")?;
    let pipeline = Arc::new(CareerPipeline::from_artifact(&artifact)?);
    info!(
        "Model ready: {} classes, {} transformed features",
        pipeline.classes().len(),
        pipeline.n_features()
    );

    let predictor = PredictionService::new(pipeline.clone());

    let attributor = Arc::new(ShapleyAttributor::new(config.xai_permutations, DEFAULT_SEED));
    let explainer = Arc::new(ExplanationService::new(
        pipeline,
        attributor,
        config.static_dir.clone(),
    ));
    info!(
        "Explanations: {} sampled permutations, charts under {}",
        config.xai_permutations,
        config.static_dir.display()
    );

    let roadmap = Arc::new(LlmRoadmapProvider::from_config(&config)?);

    let state = AppState {
        predictor,
        explainer,
        roadmap,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
