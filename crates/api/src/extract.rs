//! Extractors whose rejections use the error envelope.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `axum::extract::Path` that rejects with a `BadRequestError` envelope
/// instead of plain text.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
