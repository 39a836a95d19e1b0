use serde_json::{json, Value};

use crate::envelope::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No route matched the request's method and url.
    #[error("{method} {url} is not found")]
    RouteNotFound { method: String, url: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn route_not_found(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self::RouteNotFound {
            method: method.into(),
            url: url.into(),
        }
    }

    /// Validation failure without structured details.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }
}

impl ApiError for CoreError {
    fn name(&self) -> &str {
        match self {
            Self::RouteNotFound { .. } | Self::NotFound { .. } => "NotFoundError",
            Self::Validation { .. } => "ValidationError",
            Self::Internal(_) => "InternalError",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::RouteNotFound { method, url } => Some(json!({
                "method": method,
                "url": url,
            })),
            Self::NotFound { entity, id } => Some(json!({
                "entity": entity,
                "id": id,
            })),
            Self::Validation { details, .. } => details.clone(),
            Self::Internal(_) => None,
        }
    }
}
