//! Axum route handlers for the Prediction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::model::record::CareerInput;
use crate::prediction::service::{CareerPrediction, DEFAULT_TOP_K};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CareerOutput {
    pub predicted_role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Top3CareerOutput {
    pub top_predictions: Vec<CareerPrediction>,
}

/// POST /predict_career
///
/// Returns the single most likely role.
pub async fn handle_predict_career(
    State(state): State<AppState>,
    AppJson(input): AppJson<CareerInput>,
) -> Result<Json<CareerOutput>, AppError> {
    let predicted_role = state.predictor.predict_one(input.into_record()?)?;
    debug!("Predicted role: {predicted_role}");
    Ok(Json(CareerOutput { predicted_role }))
}

/// POST /predict_top3_careers
///
/// Returns the three most likely roles with a 1–10 confidence score each.
pub async fn handle_predict_top3(
    State(state): State<AppState>,
    AppJson(input): AppJson<CareerInput>,
) -> Result<Json<Top3CareerOutput>, AppError> {
    let top_predictions = state
        .predictor
        .predict_top_k(input.into_record()?, DEFAULT_TOP_K)?;
    Ok(Json(Top3CareerOutput { top_predictions }))
}
