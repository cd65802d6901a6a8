use ndarray::{Array1, ArrayView1};

use crate::model::artifact::PipelineArtifact;
use crate::model::mapper::map_record;
use crate::model::mlp::MlpClassifier;
use crate::model::preprocessing::{ColumnSlot, Preprocessor};
use crate::model::record::FeatureRecord;
use crate::model::{ArtifactError, PipelineError};

/// The loaded, read-only model: preprocessing, classifier and class labels.
///
/// Built once at startup and shared behind an `Arc` by the prediction and
/// explanation services, which both go through [`CareerPipeline::transform`].
#[derive(Debug, Clone)]
pub struct CareerPipeline {
    preprocessor: Preprocessor,
    classifier: MlpClassifier,
    classes: Vec<String>,
}

impl CareerPipeline {
    pub fn from_artifact(artifact: &PipelineArtifact) -> Result<Self, ArtifactError> {
        artifact.validate()?;
        Ok(Self {
            preprocessor: Preprocessor::from_artifact(artifact),
            classifier: MlpClassifier::from_params(&artifact.classifier)?,
            classes: artifact.classes.clone(),
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn class_index(&self, role: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == role)
    }

    pub fn column_slots(&self) -> Vec<ColumnSlot> {
        self.preprocessor.column_slots()
    }

    pub fn n_features(&self) -> usize {
        self.preprocessor.n_features()
    }

    /// Maps external names and applies the fitted preprocessing.
    pub fn transform(&self, record: FeatureRecord) -> Result<Array1<f64>, PipelineError> {
        self.preprocessor.transform(&map_record(record))
    }

    /// Probabilities over `classes()` for an already transformed row.
    pub fn predict_proba_row(&self, row: ArrayView1<f64>) -> Result<Array1<f64>, PipelineError> {
        let probs = self.classifier.predict_proba(row);
        if probs.iter().any(|p| !p.is_finite()) {
            return Err(PipelineError::InvalidInput(
                "classifier produced a non-finite probability".to_string(),
            ));
        }
        Ok(probs)
    }
}
