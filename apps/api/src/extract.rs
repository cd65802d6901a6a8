use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// `axum::Json` whose rejections (bad syntax, missing or mistyped fields,
/// wrong content type) are reported as 422 in the application's error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with the same 422 error shape for bad query strings.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
