//! Request and response shapes for the SGT API.
//!
//! Create shapes carry only client-supplied fields and validate presence;
//! response shapes mirror persisted rows plus their nested children.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

pub mod lote;
pub mod test_class;
pub mod test_result;

// Re-export commonly used types
pub use lote::{CreateLoteRequest, LoteResponse, UpdateLoteStatusRequest};
pub use test_class::{
    CreateTestClassRequest, CreateTestItemRequest, TestClassResponse, TestItemResponse,
};
pub use test_result::{
    CreateTestResultItemRequest, CreateTestResultRequest, TestResultItemResponse,
    TestResultItemStatus, TestResultResponse,
};

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest page a caller may request.
pub const MAX_LIMIT: i64 = 1000;

/// Offset/limit pagination parameters.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Rows to skip (default 0).
    pub skip: Option<i64>,
    /// Rows to return (default 100, max 1000).
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Resolve to `(offset, limit)` for database queries.
    pub fn resolve(&self) -> AppResult<(u64, u64)> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err(AppError::InvalidInput("skip must not be negative".to_string()));
        }
        if limit < 0 {
            return Err(AppError::InvalidInput("limit must not be negative".to_string()));
        }

        Ok((skip as u64, limit.min(MAX_LIMIT) as u64))
    }
}

/// Reject missing or whitespace-only values for required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
