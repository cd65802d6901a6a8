pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::explanation::handlers as explanation;
use crate::prediction::handlers as prediction;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Prediction API
        .route("/predict_career", post(prediction::handle_predict_career))
        .route(
            "/predict_top3_careers",
            post(prediction::handle_predict_top3),
        )
        // Explanation API
        .route(
            "/xai_explanations/:role",
            post(explanation::handle_xai_explanations),
        )
        // Roadmap API
        .route(
            "/career_roadmap/:role",
            get(roadmap::handle_career_roadmap),
        )
        // Charts written by the explanation service
        .nest_service("/static", static_files)
        .with_state(state)
}
