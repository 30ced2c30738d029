//! Database queries for catalog test items.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entity::test_class::Entity as TestClass;
use crate::entity::test_item::{self, ActiveModel, Entity as TestItem};
use crate::error::{AppError, AppResult};
use crate::models::{CreateTestItemRequest, TestItemResponse};

use super::{write_error, DbPool};

/// Load items for a set of classes, grouped by class ID.
pub(crate) async fn load_items_by_class_ids<C: ConnectionTrait>(
    conn: &C,
    class_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, Vec<test_item::Model>>> {
    let mut grouped: HashMap<Uuid, Vec<test_item::Model>> = HashMap::new();

    if class_ids.is_empty() {
        return Ok(grouped);
    }

    let items = TestItem::find()
        .filter(test_item::Column::TestClassId.is_in(class_ids.to_vec()))
        .order_by_asc(test_item::Column::Id) // UUIDv7 is time-ordered
        .all(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get test items: {}", e)))?;

    for item in items {
        grouped.entry(item.test_class_id).or_default().push(item);
    }

    Ok(grouped)
}

impl DbPool {
    /// Add an item to a test class. Returns `None` when the class does not exist.
    pub async fn create_test_item(
        &self,
        test_class_id: Uuid,
        req: CreateTestItemRequest,
    ) -> AppResult<Option<TestItemResponse>> {
        let txn = self.begin().await?;

        let class = TestClass::find_by_id(test_class_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test class: {}", e)))?;
        if class.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(req.name),
            description: Set(req.description),
            test_class_id: Set(test_class_id),
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| write_error("Failed to insert test item", e))?;

        txn.commit()
            .await
            .map_err(|e| write_error("Failed to commit test item", e))?;

        info!(
            "Test item created: id={}, test_class_id={}, name={}",
            result.id, test_class_id, result.name
        );

        Ok(Some(TestItemResponse::from_entity(result)))
    }

    /// Get a test item by ID.
    pub async fn get_test_item(&self, id: Uuid) -> AppResult<Option<TestItemResponse>> {
        let result = TestItem::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test item: {}", e)))?;

        Ok(result.map(TestItemResponse::from_entity))
    }

    /// Delete a test item. Returns the deleted state.
    pub async fn delete_test_item(&self, id: Uuid) -> AppResult<Option<TestItemResponse>> {
        let Some(item) = TestItem::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test item: {}", e)))?
        else {
            return Ok(None);
        };

        let deleted = TestItem::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test item: {}", e)))?;

        // Lost a race with another delete.
        if deleted.rows_affected == 0 {
            return Ok(None);
        }

        info!("Test item deleted: id={}", id);

        Ok(Some(TestItemResponse::from_entity(item)))
    }
}
