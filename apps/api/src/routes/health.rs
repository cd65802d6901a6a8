use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Career Prediction API Running!" }))
}

/// GET /health
/// Returns a simple status object with service version and whether roadmaps
/// can reach the LLM.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "llm_configured": state.config.llm_api_key.is_some()
    }))
}
