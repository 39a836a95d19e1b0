//! Query-string extractors shared by list handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use bcr_core::pagination::{PageQuery, PageRequest, PaginationInfo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Validated `?page=&pageSize=` parameters.
///
/// Missing values fall back to page 1 and the configured default page size.
/// Values that do not parse as integers are rejected with `BadRequestError`,
/// non-positive values with `ValidationError`.
///
/// ```ignore
/// async fn list_cars(State(state): State<AppState>, pagination: Pagination) -> AppResult<...> {
///     let offset = pagination.offset()?;
///     // SELECT ... LIMIT page_size OFFSET offset
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl Pagination {
    pub fn offset(&self) -> AppResult<i64> {
        Ok(self.0.offset()?)
    }

    pub fn limit(&self) -> i64 {
        self.0.page_size()
    }

    /// Pagination metadata for a result set of `count` total items.
    pub fn info(&self, count: i64) -> AppResult<PaginationInfo> {
        Ok(PaginationInfo::new(&self.0, count)?)
    }
}

impl FromRequestParts<AppState> for Pagination {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::try_from_uri(&parts.uri)?;

        Ok(Pagination(state.controller.page_request(&query)?))
    }
}
