//! Page-based pagination: query parameters, offsets and response metadata.
//!
//! Pages are 1-based. A request for `page` at `page_size` items per page
//! starts at offset `(page - 1) * page_size`; the offset may point past the
//! end of the collection, which the caller's query simply returns empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Page used when the client does not send one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when neither the client nor configuration sets one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw `?page=&pageSize=` query parameters.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[validate(range(min = 1))]
    pub page: Option<i64>,
    #[validate(range(min = 1))]
    pub page_size: Option<i64>,
}

/// A validated page request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Reject a page or page size below 1.
    pub fn new(page: i64, page_size: i64) -> Result<Self, CoreError> {
        PageQuery {
            page: Some(page),
            page_size: Some(page_size),
        }
        .validate()
        .map_err(from_validation_errors)?;

        Ok(Self { page, page_size })
    }

    /// Resolve query parameters, filling in defaults for missing values.
    pub fn from_query(query: &PageQuery, default_page_size: i64) -> Result<Self, CoreError> {
        Self::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.page_size.unwrap_or(default_page_size),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> Result<i64, CoreError> {
        (self.page - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| CoreError::validation("page is too large for the requested pageSize"))
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub count: i64,
}

impl PaginationInfo {
    /// Build metadata for `count` total items. `page_count` is
    /// `ceil(count / page_size)`.
    pub fn new(request: &PageRequest, count: i64) -> Result<Self, CoreError> {
        if count < 0 {
            return Err(CoreError::validation("count must not be negative"));
        }

        Ok(Self {
            page: request.page,
            page_count: page_count(count, request.page_size),
            page_size: request.page_size,
            count,
        })
    }
}

/// Number of pages needed to hold `count` items. Both arguments must be
/// non-negative and `page_size` non-zero.
fn page_count(count: i64, page_size: i64) -> i64 {
    count / page_size + i64::from(count % page_size != 0)
}

const POSITIVE_INTEGER: &str = "must be a positive integer";

fn from_validation_errors(errors: ValidationErrors) -> CoreError {
    let fields: Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, _)| (wire_name(&field).to_string(), Value::from(POSITIVE_INTEGER)))
        .collect();
    let names: Vec<&str> = fields.keys().map(String::as_str).collect();

    CoreError::Validation {
        message: format!("Invalid pagination parameters: {}", names.join(", ")),
        details: Some(Value::Object(fields)),
    }
}

fn wire_name(field: &str) -> &str {
    match field {
        "page_size" => "pageSize",
        other => other,
    }
}
