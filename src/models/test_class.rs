//! Test catalog models: classes and the items they group.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{test_class, test_item};
use crate::error::AppResult;

use super::require_text;

/// Request to create a test class.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestClassRequest {
    /// Unique class name.
    pub name: String,
}

impl CreateTestClassRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)
    }
}

/// Request to add an item to a test class.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTestItemRequest {
    pub name: String,
    pub description: String,
}

impl CreateTestItemRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)
    }
}

/// Catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub test_class_id: Uuid,
}

impl TestItemResponse {
    pub fn from_entity(m: test_item::Model) -> Self {
        TestItemResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            test_class_id: m.test_class_id,
        }
    }
}

/// Test class with its items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestClassResponse {
    pub id: Uuid,
    pub name: String,
    pub test_items: Vec<TestItemResponse>,
}

impl TestClassResponse {
    pub fn from_entity(m: test_class::Model, items: Vec<test_item::Model>) -> Self {
        TestClassResponse {
            id: m.id,
            name: m.name,
            test_items: items.into_iter().map(TestItemResponse::from_entity).collect(),
        }
    }
}
