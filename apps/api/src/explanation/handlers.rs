//! Axum route handlers for the Explanation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{de, Deserialize, Deserializer};
use tracing::warn;

use crate::explanation::fallback::fallback_explanation;
use crate::explanation::service::ExplanationResult;
use crate::extract::{AppJson, AppQuery};
use crate::model::record::CareerInput;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct XaiQuery {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub generate_visualization: bool,
}

/// Accepts the usual query-string spellings of a boolean, case-insensitively.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::custom(format!(
            "{raw:?} is not a valid boolean (expected true/false, 1/0, yes/no, on/off)"
        ))),
    }
}

/// POST /xai_explanations/:role?generate_visualization=true
///
/// Always 200 once the body and query parse. Attribution runs on the blocking
/// pool; if anything goes wrong there the seeded fallback is returned.
pub async fn handle_xai_explanations(
    State(state): State<AppState>,
    Path(role): Path<String>,
    AppQuery(query): AppQuery<XaiQuery>,
    AppJson(input): AppJson<CareerInput>,
) -> Json<ExplanationResult> {
    let record = match input.into_record() {
        Ok(record) => record,
        Err(e) => {
            warn!("Could not build feature record for explanation: {e}");
            return Json(fallback_explanation(&role));
        }
    };

    let explainer = state.explainer.clone();
    let task_role = role.clone();
    let result = tokio::task::spawn_blocking(move || {
        explainer.explain(record, &task_role, query.generate_visualization)
    })
    .await;

    match result {
        Ok(explanation) => Json(explanation),
        Err(e) => {
            warn!("Explanation task for {role:?} did not complete: {e}");
            Json(fallback_explanation(&role))
        }
    }
}
