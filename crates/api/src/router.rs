//! Application router: health routes, the not-found fallback and the
//! middleware stack, shared by the binary and the integration tests.

use std::any::Any;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::request_timeout;
use crate::routes;
use crate::state::AppState;

/// Invalid configuration detected while assembling the router.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("Invalid CORS origin '{origin}': {reason}")]
    InvalidCorsOrigin { origin: String, reason: String },
}

/// Build the full application [`Router`] with all middleware layers.
pub fn build_app_router(state: AppState) -> Result<Router, RouterError> {
    build_app_router_with(state, Router::new())
}

/// Build the application router with additional resource routes merged in.
///
/// Layers, outermost first: CORS, request id, tracing, request id echo,
/// request timeout, panic recovery. Unmatched requests, timeouts and panics
/// all answer with the error envelope.
pub fn build_app_router_with(
    state: AppState,
    resources: Router<AppState>,
) -> Result<Router, RouterError> {
    let cors = build_cors_layer(&state.config)?;
    let request_id = HeaderName::from_static("x-request-id");
    let controller = state.controller.clone();

    Ok(Router::new()
        .merge(routes::health::router())
        .merge(resources)
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(
            move |payload: Box<dyn Any + Send + 'static>| controller.handle_panic(payload),
        ))
        .layer(from_fn_with_state(state.clone(), request_timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state))
}

/// Build the CORS middleware layer from server configuration.
pub fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, RouterError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| RouterError::InvalidCorsOrigin {
                    origin: o.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
