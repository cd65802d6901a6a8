//! Explanation Service: per-feature attributions for one prediction.
//!
//! Always returns a structurally valid result. When attribution fails for any
//! reason the seeded fallback is served and `attribution_source` says so.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::explanation::chart::{render_svg, safe_role, write_chart};
use crate::explanation::fallback::{fallback_explanation, round3};
use crate::explanation::insights::{feature_insight, summarize};
use crate::explanation::shapley::{AttributionError, Attributor};
use crate::model::fields::label_for;
use crate::model::pipeline::CareerPipeline;
use crate::model::record::FeatureRecord;
use crate::model::PipelineError;

pub const TOP_FACTORS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributionSource {
    /// Shapley values computed against the model.
    Shap,
    /// Synthetic values; attribution failed.
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFactor {
    pub feature: String,
    pub impact: Impact,
    /// Absolute attribution, three decimals.
    pub contribution: f64,
    pub insight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub career: String,
    pub top_factors: Vec<TopFactor>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
    pub attribution_source: AttributionSource,
    /// Class whose probability was attributed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributed_role: Option<String>,
}

#[derive(Debug, Error)]
enum ExplainError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("attribution failed: {0}")]
    Attribution(#[from] AttributionError),
}

/// Signed attributions for the target class, strongest first.
struct Attribution {
    target_role: String,
    ranked: Vec<(String, f64)>,
}

pub struct ExplanationService {
    pipeline: Arc<CareerPipeline>,
    attributor: Arc<dyn Attributor>,
    static_dir: PathBuf,
}

impl ExplanationService {
    pub fn new(
        pipeline: Arc<CareerPipeline>,
        attributor: Arc<dyn Attributor>,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            pipeline,
            attributor,
            static_dir,
        }
    }

    /// Explains the prediction for `record`.
    ///
    /// Attributions target `role` when it names a known class and the model's own
    /// top prediction otherwise. CPU-bound; call from a blocking task.
    pub fn explain(
        &self,
        record: FeatureRecord,
        role: &str,
        generate_visualization: bool,
    ) -> ExplanationResult {
        let attribution = match self.attribute(record, role) {
            Ok(a) => a,
            Err(e) => {
                warn!("Explanation for {role:?} fell back to synthetic values: {e}");
                return fallback_explanation(role);
            }
        };

        let top: Vec<(String, f64)> = attribution.ranked.into_iter().take(TOP_FACTORS).collect();
        let top_factors: Vec<TopFactor> = top
            .iter()
            .map(|(feature, value)| TopFactor {
                feature: feature.clone(),
                impact: if *value >= 0.0 {
                    Impact::Positive
                } else {
                    Impact::Negative
                },
                contribution: round3(value.abs()),
                insight: feature_insight(feature),
            })
            .collect();
        let names: Vec<&str> = top_factors.iter().map(|f| f.feature.as_str()).collect();
        let summary = summarize(&names);

        let visualization = if generate_visualization && !role.trim().is_empty() {
            self.render_chart(role, &top)
        } else {
            None
        };

        ExplanationResult {
            career: role.to_string(),
            top_factors,
            summary,
            visualization,
            attribution_source: AttributionSource::Shap,
            attributed_role: Some(attribution.target_role),
        }
    }

    fn attribute(&self, record: FeatureRecord, role: &str) -> Result<Attribution, ExplainError> {
        let pipeline = &self.pipeline;
        let row = pipeline.transform(record)?;

        let target = match pipeline.class_index(role) {
            Some(index) => index,
            None => {
                let probs = pipeline.predict_proba_row(row.view())?;
                argmax(&probs)
            }
        };
        let target_role = pipeline.classes()[target].clone();
        debug!("Attributing probability of {target_role:?} (requested {role:?})");

        let slots = pipeline.column_slots();
        let groups: Vec<_> = slots.iter().map(|s| s.range.clone()).collect();
        let payoff = |z: &Array1<f64>| {
            pipeline
                .predict_proba_row(z.view())
                .map(|p| p[target])
                .unwrap_or(f64::NAN)
        };

        let values = self.attributor.attribute(&payoff, row.view(), &groups)?;

        let mut ranked: Vec<(String, f64)> = slots
            .iter()
            .map(|s| label_for(&s.column).to_string())
            .zip(values)
            .collect();
        ranked.sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(Ordering::Equal));

        Ok(Attribution {
            target_role,
            ranked,
        })
    }

    /// Best-effort: a failed render is logged and leaves the explanation intact.
    fn render_chart(&self, role: &str, bars: &[(String, f64)]) -> Option<String> {
        let file_name = format!("shap_{}.svg", safe_role(role));
        let svg = render_svg(role, bars);
        match write_chart(&self.static_dir, &file_name, &svg) {
            Ok(()) => Some(format!("/static/{file_name}")),
            Err(e) => {
                warn!(
                    "Could not write chart {} under {}: {e}",
                    file_name,
                    self.static_dir.display()
                );
                None
            }
        }
    }
}

fn argmax(values: &Array1<f64>) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &v)| {
            if v > best.1 {
                (i, v)
            } else {
                best
            }
        })
        .0
}
