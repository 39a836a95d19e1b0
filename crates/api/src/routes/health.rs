use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / and GET /health -- liveness check.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    state.controller.health_check()
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
}
