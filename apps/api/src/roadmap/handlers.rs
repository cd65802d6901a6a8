//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::roadmap::provider::CareerRoadmap;
use crate::state::AppState;

/// GET /career_roadmap/:role
///
/// The role arrives percent-decoded. Provider failures come back as placeholder
/// content with status 200; only an internal error yields 500.
pub async fn handle_career_roadmap(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let roadmap = state.roadmap.get_roadmap(&role).await?;
    Ok(Json(roadmap))
}
