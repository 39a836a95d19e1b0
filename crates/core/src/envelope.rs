//! Uniform error envelope for every non-2xx response.
//!
//! Errors that reach a client are rendered as
//!
//! ```json
//! { "error": { "name": "...", "message": "...", "details": null } }
//! ```
//!
//! The envelope is built from the [`ApiError`] interface so each error type
//! declares its own `name` and `details` instead of the formatter probing for
//! them.

use serde::Serialize;
use serde_json::Value;

/// An error that knows how to describe itself to an API client.
///
/// `message` is the error's `Display` output.
pub trait ApiError: std::error::Error {
    /// Stable, machine-readable error name (e.g. `"NotFoundError"`).
    fn name(&self) -> &str;

    /// Structured detail attached to the error, if any.
    fn details(&self) -> Option<Value> {
        None
    }
}

/// Name used for errors that do not implement [`ApiError`].
pub const GENERIC_ERROR_NAME: &str = "Error";

/// `{ name, message, details }` describing a single error.
///
/// `details` always serializes, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub name: String,
    pub message: String,
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_error(err: &(impl ApiError + ?Sized)) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
            details: err.details(),
        }
    }

    /// Envelope for a foreign error type with no API description.
    pub fn from_std(err: &(dyn std::error::Error + '_)) -> Self {
        Self::new(GENERIC_ERROR_NAME, err.to_string())
    }
}

/// `{ "error": ErrorEnvelope }` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorEnvelope,
}

impl From<ErrorEnvelope> for ErrorBody {
    fn from(error: ErrorEnvelope) -> Self {
        Self { error }
    }
}
