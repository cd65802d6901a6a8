//! Feature Mapper: renames external field names to the training-time column names.

use std::collections::HashSet;

use crate::model::artifact::PipelineArtifact;
use crate::model::fields::{self, FieldKind, FIELDS};
use crate::model::record::FeatureRecord;
use crate::model::ArtifactError;

/// Renames known external keys; anything else passes through untouched.
/// Values are not inspected here.
pub fn map_record(record: FeatureRecord) -> FeatureRecord {
    record
        .into_iter()
        .map(|(key, value)| match fields::by_external(&key) {
            Some(field) => (field.internal.to_string(), value),
            None => (key, value),
        })
        .collect()
}

/// Startup check: the field table and the fitted artifact must describe the
/// same columns with the same kinds, or every request would fail at transform time.
pub fn validate_against(artifact: &PipelineArtifact) -> Result<(), ArtifactError> {
    check_columns(&artifact.num_cols, FieldKind::Numeric)?;
    check_columns(&artifact.cat_cols, FieldKind::Categorical)?;

    let fitted: HashSet<&str> = artifact
        .num_cols
        .iter()
        .chain(artifact.cat_cols.iter())
        .map(String::as_str)
        .collect();
    let missing: Vec<&str> = FIELDS
        .iter()
        .map(|f| f.internal)
        .filter(|name| !fitted.contains(name))
        .collect();
    if !missing.is_empty() {
        return Err(ArtifactError::SchemaDrift(format!(
            "artifact was not fitted on columns: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

fn check_columns(columns: &[String], kind: FieldKind) -> Result<(), ArtifactError> {
    for column in columns {
        let field = fields::by_internal(column).ok_or_else(|| {
            ArtifactError::SchemaDrift(format!("artifact column {column:?} has no input field"))
        })?;
        if field.kind != kind {
            return Err(ArtifactError::SchemaDrift(format!(
                "column {column:?} is {:?} in the artifact but {:?} in the input schema",
                kind, field.kind
            )));
        }
    }
    Ok(())
}
