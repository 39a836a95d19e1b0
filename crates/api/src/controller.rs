//! Shared request/response formatting for every route.
//!
//! [`ApplicationController`] owns the fixed responses of the API (health
//! check, not found, unhandled error) and the page arithmetic list handlers
//! use to turn `?page=&pageSize=` into a query offset and pagination
//! metadata.

use std::any::Any;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Json;
use bcr_core::envelope::{ApiError, ErrorEnvelope};
use bcr_core::error::CoreError;
use bcr_core::pagination::{PageQuery, PageRequest, PaginationInfo, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{envelope_response, error_response, AppError};

/// Liveness payload returned by the health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ApplicationController {
    service_name: Arc<str>,
    default_page_size: i64,
}

impl ApplicationController {
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: Arc::from(service_name),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size used when a request omits `pageSize`. Must be at least 1.
    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// `200 { "status": "OK", "message": "<service> API is up and running!" }`
    pub fn health_check(&self) -> (StatusCode, Json<HealthResponse>) {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK".to_string(),
                message: format!("{} API is up and running!", self.service_name),
            }),
        )
    }

    /// 404 envelope for a request no route answers.
    pub fn not_found(&self, method: &Method, url: &str) -> Response {
        let err = CoreError::route_not_found(method.as_str(), url);
        tracing::debug!(%method, url, "No route matched");
        error_response(StatusCode::NOT_FOUND, &err)
    }

    /// 500 envelope for an error nothing else handled.
    ///
    /// `details` is `null` unless the error carries structured details.
    pub fn handle_error(&self, err: &(impl ApiError + ?Sized)) -> Response {
        tracing::error!(name = err.name(), error = %err, "Unhandled error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// 500 envelope for a foreign error with no API description: name
    /// `Error`, the error's message, `null` details.
    pub fn handle_std_error(&self, err: &(dyn std::error::Error + '_)) -> Response {
        tracing::error!(error = %err, "Unhandled error");
        envelope_response(StatusCode::INTERNAL_SERVER_ERROR, ErrorEnvelope::from_std(err))
    }

    /// Recover from a handler panic with the same 500 envelope as
    /// [`handle_error`](Self::handle_error).
    pub fn handle_panic(&self, payload: Box<dyn Any + Send + 'static>) -> Response {
        let err = AppError::InternalError(panic_message(payload.as_ref()));
        self.handle_error(&err)
    }

    /// Validate `query` and fill in defaults.
    pub fn page_request(&self, query: &PageQuery) -> Result<PageRequest, CoreError> {
        PageRequest::from_query(query, self.default_page_size)
    }

    /// `(page - 1) * pageSize`: the index of the first item on the page.
    pub fn offset_from_request(&self, query: &PageQuery) -> Result<i64, CoreError> {
        self.page_request(query)?.offset()
    }

    /// `{ page, pageCount, pageSize, count }` for `count` total items.
    pub fn build_pagination_object(
        &self,
        query: &PageQuery,
        count: i64,
    ) -> Result<PaginationInfo, CoreError> {
        PaginationInfo::new(&self.page_request(query)?, count)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "Unknown panic".to_string()
    }
}
