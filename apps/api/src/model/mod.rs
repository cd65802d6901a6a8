// The fitted career model: input schema, feature mapping, preprocessing and the
// MLP forward pass. Everything here is pure and synchronous; services wrap it.

pub mod artifact;
pub mod fields;
pub mod mapper;
pub mod mlp;
pub mod pipeline;
pub mod preprocessing;
pub mod record;

#[cfg(test)]
pub mod testing;

use thiserror::Error;

/// Per-request failures while turning a record into a model input.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing required column: {0}")]
    SchemaMismatch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Startup failures while loading or validating the fitted artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Cannot read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Inconsistent model artifact: {0}")]
    Shape(String),

    #[error("Model artifact does not match the input schema: {0}")]
    SchemaDrift(String),
}
