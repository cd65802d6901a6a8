//! Preprocessing: the fitted scaler and one-hot encoder, applied in artifact column order.

use std::ops::Range;

use ndarray::Array1;

use crate::model::artifact::PipelineArtifact;
use crate::model::record::{FeatureRecord, FeatureValue};
use crate::model::PipelineError;

/// Position of one input column inside the transformed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    pub column: String,
    pub range: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct Preprocessor {
    num_cols: Vec<String>,
    cat_cols: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
    categories: Vec<Vec<String>>,
    n_features: usize,
}

impl Preprocessor {
    pub fn from_artifact(artifact: &PipelineArtifact) -> Self {
        Self {
            num_cols: artifact.num_cols.clone(),
            cat_cols: artifact.cat_cols.clone(),
            mean: artifact.scaler.mean.clone(),
            scale: artifact.scaler.scale.clone(),
            categories: artifact.encoder.categories.clone(),
            n_features: artifact.n_features(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Scaled numeric block followed by one-hot categorical blocks.
    ///
    /// Unseen categories leave their block all-zero instead of failing.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Array1<f64>, PipelineError> {
        let mut row = Array1::zeros(self.n_features);

        for (i, column) in self.num_cols.iter().enumerate() {
            let value = match lookup(record, column)? {
                FeatureValue::Number(v) => *v,
                FeatureValue::Category(s) => {
                    return Err(PipelineError::InvalidInput(format!(
                        "column {column:?} expects a number, got {s:?}"
                    )))
                }
            };
            if !value.is_finite() {
                return Err(PipelineError::InvalidInput(format!(
                    "column {column:?} is not a finite number"
                )));
            }
            row[i] = (value - self.mean[i]) / self.scale[i];
        }

        let mut offset = self.num_cols.len();
        for (column, categories) in self.cat_cols.iter().zip(&self.categories) {
            let value = match lookup(record, column)? {
                FeatureValue::Category(s) => s,
                FeatureValue::Number(v) => {
                    return Err(PipelineError::InvalidInput(format!(
                        "column {column:?} expects a category, got {v}"
                    )))
                }
            };
            if let Some(k) = categories.iter().position(|c| c == value) {
                row[offset + k] = 1.0;
            }
            offset += categories.len();
        }

        Ok(row)
    }

    /// Index range of every input column in the transformed row, numeric first.
    pub fn column_slots(&self) -> Vec<ColumnSlot> {
        let numeric = self.num_cols.iter().enumerate().map(|(i, c)| ColumnSlot {
            column: c.clone(),
            range: i..i + 1,
        });

        let mut offset = self.num_cols.len();
        let categorical = self
            .cat_cols
            .iter()
            .zip(&self.categories)
            .map(|(c, cats)| {
                let slot = ColumnSlot {
                    column: c.clone(),
                    range: offset..offset + cats.len(),
                };
                offset += cats.len();
                slot
            })
            .collect::<Vec<_>>();

        numeric.chain(categorical).collect()
    }
}

fn lookup<'a>(record: &'a FeatureRecord, column: &str) -> Result<&'a FeatureValue, PipelineError> {
    record
        .get(column)
        .ok_or_else(|| PipelineError::SchemaMismatch(column.to_string()))
}
