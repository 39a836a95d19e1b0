//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get_request};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET / returns 200 with the fixed liveness payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_ok_with_fixed_payload() {
    let app = common::build_test_app();
    let response = get_request(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "OK", "message": "BCR API is up and running!" })
    );
}

// ---------------------------------------------------------------------------
// Test: GET /health answers identically to GET /
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_path_matches_root() {
    let root = body_json(get_request(common::build_test_app(), "/").await).await;

    let response = get_request(common::build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, root);
}

// ---------------------------------------------------------------------------
// Test: health check ignores query parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_ignores_query_string() {
    let app = common::build_test_app();
    let response = get_request(app, "/health?page=0&pageSize=abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "OK");
}

// ---------------------------------------------------------------------------
// Test: the configured service name appears in the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_message_uses_configured_service_name() {
    let mut config = common::test_config();
    config.service_name = "Rentals".to_string();

    let app = common::build_test_app_with(config);
    let json = body_json(get_request(app, "/health").await).await;

    assert_eq!(json["message"], "Rentals API is up and running!");
}

// ---------------------------------------------------------------------------
// Test: generated request ids reach both success and error responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_id_generated_for_success_and_error() {
    for uri in ["/health", "/no-such-page"] {
        let response = get_request(common::build_test_app(), uri).await;
        let id = response
            .headers()
            .get("x-request-id")
            .unwrap_or_else(|| panic!("GET {uri} has no x-request-id"));
        assert_eq!(id.len(), 36, "GET {uri} should carry a UUID request id");
    }
}

// ---------------------------------------------------------------------------
// Test: a caller-supplied request id is kept
// ---------------------------------------------------------------------------

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/")
        .header("x-request-id", "rental-42")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "rental-42");
}

// ---------------------------------------------------------------------------
// Test: allowed origins see CORS headers even on the 404 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_headers_on_not_found_envelope() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/no-such-page")
        .header("Origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(body_json(response).await["error"]["name"], "NotFoundError");
}

// ---------------------------------------------------------------------------
// Test: unknown origins get no CORS grant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_origin_not_granted() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/cars")
        .header("Origin", "http://evil.example")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app().oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
