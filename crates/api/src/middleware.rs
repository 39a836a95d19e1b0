//! Request-level middleware that answers with the error envelope.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Abort handlers that run past `request_timeout_secs` with a 408
/// `TimeoutError` envelope.
pub async fn request_timeout(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let after_secs = state.config.request_timeout_secs;

    match tokio::time::timeout(Duration::from_secs(after_secs), next.run(request)).await {
        Ok(response) => response,
        Err(_) => AppError::Timeout { after_secs }.into_response(),
    }
}
