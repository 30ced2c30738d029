//! Lote domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::lote;
use crate::error::AppResult;

use super::require_text;
use super::test_result::TestResultResponse;

/// Status given to every new lote.
pub const DEFAULT_LOTE_STATUS: &str = "Open";

/// Request to create a lote.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLoteRequest {
    /// Unique lote name.
    pub name: String,
}

impl CreateLoteRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)
    }
}

/// Request to replace a lote's status.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateLoteStatusRequest {
    /// Free-text status (e.g. "Open", "Closed", "In Review").
    pub status: String,
}

impl UpdateLoteStatusRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("status", &self.status)
    }
}

/// Lote with its test results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoteResponse {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub test_results: Vec<TestResultResponse>,
}

impl LoteResponse {
    pub fn from_entity(m: lote::Model, test_results: Vec<TestResultResponse>) -> Self {
        LoteResponse {
            id: m.id,
            name: m.name,
            status: m.status,
            created_at: m.created_at,
            test_results,
        }
    }
}
