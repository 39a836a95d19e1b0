#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bcr_api::config::ServerConfig;
use bcr_api::error::{AppError, AppResult};
use bcr_api::extract::AppPath;
use bcr_api::query::Pagination;
use bcr_api::response::PaginatedResponse;
use bcr_api::router::build_app_router_with;
use bcr_api::state::AppState;
use bcr_core::error::CoreError;

/// Number of cars served by the in-memory `/cars` fixture.
pub const CAR_COUNT: i64 = 23;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        service_name: "BCR".to_string(),
        default_page_size: 10,
    }
}

/// Build the full application router, with the fixture routes below merged
/// in, using the same middleware stack as production.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router_with(AppState::new(config), fixture_routes())
        .expect("test config must produce a valid router")
}

fn fixture_routes() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/cars/{id}", get(get_car))
        .route("/boom", get(fail))
        .route("/panic", get(explode))
        .route("/slow", get(stall))
}

async fn list_cars(pagination: Pagination) -> AppResult<Json<PaginatedResponse<String>>> {
    let offset = usize::try_from(pagination.offset()?).unwrap_or(usize::MAX);
    let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);

    let cars = (1..=CAR_COUNT)
        .map(|i| format!("car-{i}"))
        .skip(offset)
        .take(limit)
        .collect();

    Ok(Json(PaginatedResponse::new(cars, pagination.info(CAR_COUNT)?)))
}

async fn get_car(AppPath(id): AppPath<i64>) -> AppResult<Json<String>> {
    if (1..=CAR_COUNT).contains(&id) {
        Ok(Json(format!("car-{id}")))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Car", id }))
    }
}

async fn fail() -> AppResult<Json<String>> {
    Err(AppError::InternalError("Some Error".into()))
}

async fn explode() -> &'static str {
    panic!("handler exploded");
}

async fn stall() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_request(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
