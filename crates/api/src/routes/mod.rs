pub mod health;

use axum::extract::{OriginalUri, State};
use axum::http::Method;
use axum::response::Response;

use crate::state::AppState;

/// Fallback for unknown paths and for known paths called with an
/// unsupported method. Both answer with the 404 envelope.
pub async fn not_found(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    state.controller.not_found(&method, url)
}
