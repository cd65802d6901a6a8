use std::sync::Arc;

use crate::config::Config;
use crate::explanation::service::ExplanationService;
use crate::prediction::service::PredictionService;
use crate::roadmap::provider::RoadmapProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub predictor: PredictionService,
    /// Runs on the blocking pool, hence the `Arc`.
    pub explainer: Arc<ExplanationService>,
    /// Pluggable roadmap source. Default: LlmRoadmapProvider.
    pub roadmap: Arc<dyn RoadmapProvider>,
    pub config: Config,
}
