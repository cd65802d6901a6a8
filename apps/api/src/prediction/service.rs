//! Prediction Service: single-label and ranked predictions over the loaded pipeline.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::pipeline::CareerPipeline;
use crate::model::record::FeatureRecord;
use crate::model::PipelineError;

pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPrediction {
    pub role: String,
    /// 1.0 – 10.0, one decimal.
    pub confidence_score: f64,
}

/// Maps a probability onto the 1–10 confidence scale: `1 + 9p`, one decimal.
pub fn confidence_score(probability: f64) -> f64 {
    let score = 1.0 + 9.0 * probability.clamp(0.0, 1.0);
    (score * 10.0).round() / 10.0
}

#[derive(Clone)]
pub struct PredictionService {
    pipeline: Arc<CareerPipeline>,
}

impl PredictionService {
    pub fn new(pipeline: Arc<CareerPipeline>) -> Self {
        Self { pipeline }
    }

    /// The single highest-scoring role.
    pub fn predict_one(&self, record: FeatureRecord) -> Result<String, PipelineError> {
        let ranked = self.ranked(record)?;
        ranked
            .into_iter()
            .next()
            .map(|(role, _)| role)
            .ok_or_else(|| PipelineError::InvalidInput("classifier has no classes".to_string()))
    }

    /// Up to `k` roles by descending probability; ties keep class order.
    pub fn predict_top_k(
        &self,
        record: FeatureRecord,
        k: usize,
    ) -> Result<Vec<CareerPrediction>, PipelineError> {
        Ok(self
            .ranked(record)?
            .into_iter()
            .take(k)
            .map(|(role, p)| CareerPrediction {
                role,
                confidence_score: confidence_score(p),
            })
            .collect())
    }

    fn ranked(&self, record: FeatureRecord) -> Result<Vec<(String, f64)>, PipelineError> {
        let row = self.pipeline.transform(record)?;
        let probs = self.pipeline.predict_proba_row(row.view())?;

        let mut ranked: Vec<(String, f64)> = self
            .pipeline
            .classes()
            .iter()
            .cloned()
            .zip(probs.iter().copied())
            .collect();
        // sort_by is stable, so equal probabilities stay in class order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }
}
