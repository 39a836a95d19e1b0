use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bcr_core::envelope::{ApiError, ErrorBody, ErrorEnvelope};
use bcr_core::error::CoreError;
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bcr_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed request, e.g. a query string that does not parse.
    #[error("{0}")]
    BadRequest(String),

    /// The handler did not finish within the configured request timeout.
    #[error("Request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// An internal error with a human-readable message.
    #[error("{0}")]
    InternalError(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::RouteNotFound { .. } | CoreError::NotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                CoreError::Validation { .. } => StatusCode::BAD_REQUEST,
                CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError for AppError {
    fn name(&self) -> &str {
        match self {
            AppError::Core(core) => core.name(),
            AppError::BadRequest(_) => "BadRequestError",
            AppError::Timeout { .. } => "TimeoutError",
            AppError::InternalError(_) => "InternalError",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            AppError::Core(core) => core.details(),
            AppError::Timeout { after_secs } => Some(json!({ "timeoutSecs": after_secs })),
            AppError::BadRequest(_) | AppError::InternalError(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, name = self.name(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        error_response(status, &self)
    }
}

/// Render `err` as `{ "error": { name, message, details } }` with `status`.
///
/// Every non-2xx response built by this crate goes through here.
pub fn error_response(status: StatusCode, err: &(impl ApiError + ?Sized)) -> Response {
    envelope_response(status, ErrorEnvelope::from_error(err))
}

pub fn envelope_response(status: StatusCode, envelope: ErrorEnvelope) -> Response {
    (status, Json(ErrorBody::from(envelope))).into_response()
}
