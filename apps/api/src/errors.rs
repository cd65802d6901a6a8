use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Provider and attribution failures never reach this type: those services
/// degrade to placeholder content instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::SchemaMismatch(column) => {
                AppError::SchemaMismatch(format!("missing required column {column:?}"))
            }
            PipelineError::InvalidInput(msg) => AppError::InvalidInput(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::SchemaMismatch(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Schema mismatch",
                msg.clone(),
            ),
            AppError::InvalidInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid input",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_is_422() {
        let response =
            AppError::from(PipelineError::SchemaMismatch("hackathons".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_input_is_422() {
        let response = AppError::InvalidInput("NaN".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_query_rejection_is_invalid_input() {
        use axum::extract::Query;
        use axum::http::Uri;

        let uri: Uri = "/x?n=abc".parse().unwrap();
        let rejection = Query::<std::collections::HashMap<String, u32>>::try_from_uri(&uri)
            .unwrap_err();
        let response = AppError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_is_500() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
