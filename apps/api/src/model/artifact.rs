//! Fitted Pipeline Artifact: the exported state of the trained scikit-learn pipeline.
//!
//! The file is a JSON document written by the offline training job:
//!
//! ```json
//! {
//!   "classes":    ["Database Developer", "..."],        // MLPClassifier.classes_
//!   "num_cols":   ["Acedamic percentage in Operating Systems", "..."],
//!   "cat_cols":   ["can work long time before system?", "..."],
//!   "scaler":     { "mean": [..], "scale": [..] },       // StandardScaler.mean_ / scale_
//!   "encoder":    { "categories": [[..], ..] },          // OneHotEncoder.categories_
//!   "classifier": {
//!     "activation": "relu",
//!     "out_activation": "softmax",
//!     "coefs": [[[..]]],                                 // MLPClassifier.coefs_ (in × out)
//!     "intercepts": [[..]]                               // MLPClassifier.intercepts_
//!   }
//! }
//! ```
//!
//! Loaded once at startup and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::mlp::{Activation, OutputActivation};
use crate::model::ArtifactError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderParams {
    pub categories: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierParams {
    pub activation: Activation,
    pub out_activation: OutputActivation,
    pub coefs: Vec<Vec<Vec<f64>>>,
    pub intercepts: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub classes: Vec<String>,
    pub num_cols: Vec<String>,
    pub cat_cols: Vec<String>,
    pub scaler: ScalerParams,
    pub encoder: EncoderParams,
    pub classifier: ClassifierParams,
}

impl PipelineArtifact {
    /// Reads and validates the artifact. Any failure here should abort startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: PipelineArtifact = serde_json::from_str(&raw)?;
        artifact.validate()?;

        info!(
            "Loaded pipeline artifact from {}: {} numeric, {} categorical columns, {} classes",
            path.display(),
            artifact.num_cols.len(),
            artifact.cat_cols.len(),
            artifact.classes.len()
        );
        Ok(artifact)
    }

    /// Width of the transformed feature row (numeric columns + all one-hot indicators).
    pub fn n_features(&self) -> usize {
        self.num_cols.len() + self.encoder.categories.iter().map(Vec::len).sum::<usize>()
    }

    /// Internal consistency of the fitted parameters.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let shape = |msg: String| -> Result<(), ArtifactError> { Err(ArtifactError::Shape(msg)) };

        if self.classes.is_empty() {
            return shape("artifact has no classes".to_string());
        }
        if self.scaler.mean.len() != self.num_cols.len()
            || self.scaler.scale.len() != self.num_cols.len()
        {
            return shape(format!(
                "scaler was fitted on {} columns but {} numeric columns are listed",
                self.scaler.mean.len(),
                self.num_cols.len()
            ));
        }
        if let Some(i) = self.scaler.scale.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            return shape(format!("scaler scale for {:?} is not positive", self.num_cols[i]));
        }
        if self.encoder.categories.len() != self.cat_cols.len() {
            return shape(format!(
                "encoder was fitted on {} columns but {} categorical columns are listed",
                self.encoder.categories.len(),
                self.cat_cols.len()
            ));
        }

        let layers = &self.classifier.coefs;
        if layers.is_empty() || layers.len() != self.classifier.intercepts.len() {
            return shape(format!(
                "classifier has {} weight matrices and {} bias vectors",
                layers.len(),
                self.classifier.intercepts.len()
            ));
        }

        let mut width = self.n_features();
        for (i, (coef, bias)) in layers.iter().zip(&self.classifier.intercepts).enumerate() {
            if coef.len() != width {
                return shape(format!(
                    "layer {i} expects {} inputs but receives {width}",
                    coef.len()
                ));
            }
            let out = bias.len();
            if coef.iter().any(|row| row.len() != out) {
                return shape(format!("layer {i} weight rows do not all have {out} columns"));
            }
            width = out;
        }

        let expected_out = match self.classes.len() {
            2 if self.classifier.out_activation == OutputActivation::Logistic => 1,
            n => n,
        };
        if width != expected_out {
            return shape(format!(
                "classifier emits {width} outputs for {} classes",
                self.classes.len()
            ));
        }
        Ok(())
    }
}
