//! Shared response envelope types for list handlers.
//!
//! Paginated lists use `{ "data": [...], "meta": { "pagination": {...} } }`.
//! Errors use [`bcr_core::envelope::ErrorBody`].

use bcr_core::pagination::PaginationInfo;
use serde::{Deserialize, Serialize};

/// `{ "data": [T], "meta": { "pagination": PaginationInfo } }`
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub pagination: PaginationInfo,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationInfo) -> Self {
        Self {
            data,
            meta: PaginationMeta { pagination },
        }
    }
}
