//! Test result domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{test_result, test_result_item};
use crate::error::AppResult;

use super::require_text;

/// Outcome of a single checked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TestResultItemStatus {
    #[serde(alias = "Aprovado")]
    Approved,
    #[serde(alias = "Reprovado")]
    Rejected,
}

impl TestResultItemStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Approved" | "Aprovado" => Some(Self::Approved),
            "Rejected" | "Reprovado" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One item outcome submitted with a test result.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestResultItemRequest {
    /// Name of the catalog item, copied as-is.
    pub test_item_name: String,
    pub status: TestResultItemStatus,
    #[serde(default)]
    pub observation: Option<String>,
}

/// Request to record a test result for a lote.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestResultRequest {
    pub equipment_type: String,
    pub equipment_sku: String,
    pub equipment_barebone: String,
    /// Must be unique across all results.
    pub equipment_serial: String,
    #[serde(default)]
    pub general_observations: Option<String>,
    /// Item outcomes, stored in the order given.
    pub test_result_items: Vec<CreateTestResultItemRequest>,
}

impl CreateTestResultRequest {
    /// Check required fields are present.
    pub fn validate(&self) -> AppResult<()> {
        require_text("equipment_type", &self.equipment_type)?;
        require_text("equipment_sku", &self.equipment_sku)?;
        require_text("equipment_barebone", &self.equipment_barebone)?;
        require_text("equipment_serial", &self.equipment_serial)?;
        for (index, item) in self.test_result_items.iter().enumerate() {
            require_text(
                &format!("test_result_items[{}].test_item_name", index),
                &item.test_item_name,
            )?;
        }
        Ok(())
    }
}

/// Stored outcome of one item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestResultItemResponse {
    pub id: Uuid,
    pub test_result_id: Uuid,
    pub test_item_name: String,
    pub status: TestResultItemStatus,
    pub observation: Option<String>,
}

impl TestResultItemResponse {
    pub fn from_entity(m: test_result_item::Model) -> Self {
        TestResultItemResponse {
            id: m.id,
            test_result_id: m.test_result_id,
            status: TestResultItemStatus::parse(&m.status).unwrap_or_else(|| {
                warn!(
                    "Test result item {} has unknown stored status {:?}, reporting Rejected",
                    m.id, m.status
                );
                TestResultItemStatus::Rejected
            }),
            test_item_name: m.test_item_name,
            observation: m.observation,
        }
    }
}

/// Stored test result with its item outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestResultResponse {
    pub id: Uuid,
    /// When the result was recorded.
    pub timestamp: DateTime<Utc>,
    pub lote_id: Uuid,
    pub equipment_type: String,
    pub equipment_sku: String,
    pub equipment_barebone: String,
    pub equipment_serial: String,
    pub general_observations: Option<String>,
    /// Item outcomes in submission order.
    pub test_result_items: Vec<TestResultItemResponse>,
}

impl TestResultResponse {
    pub fn from_entity(m: test_result::Model, items: Vec<test_result_item::Model>) -> Self {
        TestResultResponse {
            id: m.id,
            timestamp: m.timestamp,
            lote_id: m.lote_id,
            equipment_type: m.equipment_type,
            equipment_sku: m.equipment_sku,
            equipment_barebone: m.equipment_barebone,
            equipment_serial: m.equipment_serial,
            general_observations: m.general_observations,
            test_result_items: items
                .into_iter()
                .map(TestResultItemResponse::from_entity)
                .collect(),
        }
    }
}
