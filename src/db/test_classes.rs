//! Database queries for test classes.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entity::test_class::{self, ActiveModel, Entity as TestClass};
use crate::entity::test_item::{self, Entity as TestItem};
use crate::error::{AppError, AppResult};
use crate::models::TestClassResponse;

use super::test_items::load_items_by_class_ids;
use super::{write_error, DbPool};

impl DbPool {
    /// Insert a new test class.
    pub async fn create_test_class(&self, name: String) -> AppResult<TestClassResponse> {
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| write_error("Failed to insert test class", e))?;

        info!("Test class created: id={}, name={}", result.id, result.name);

        Ok(TestClassResponse::from_entity(result, Vec::new()))
    }

    /// Get a test class (with items) by ID.
    pub async fn get_test_class(&self, id: Uuid) -> AppResult<Option<TestClassResponse>> {
        let class = TestClass::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test class: {}", e)))?;

        let Some(class) = class else {
            return Ok(None);
        };

        let mut items = load_items_by_class_ids(self.connection(), &[class.id]).await?;
        let test_items = items.remove(&class.id).unwrap_or_default();

        Ok(Some(TestClassResponse::from_entity(class, test_items)))
    }

    /// Get a test class row by name.
    pub async fn get_test_class_by_name(
        &self,
        name: &str,
    ) -> AppResult<Option<test_class::Model>> {
        let result = TestClass::find()
            .filter(test_class::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test class by name: {}", e)))?;

        Ok(result)
    }

    /// List test classes (with items), oldest first.
    pub async fn list_test_classes(
        &self,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<TestClassResponse>> {
        let classes = TestClass::find()
            .order_by_asc(test_class::Column::Id) // UUIDv7 is time-ordered
            .offset(offset)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test classes: {}", e)))?;

        let ids: Vec<Uuid> = classes.iter().map(|c| c.id).collect();
        let mut items = load_items_by_class_ids(self.connection(), &ids).await?;

        Ok(classes
            .into_iter()
            .map(|c| {
                let test_items = items.remove(&c.id).unwrap_or_default();
                TestClassResponse::from_entity(c, test_items)
            })
            .collect())
    }

    /// Delete a test class and, by cascade, its items. Returns the deleted state.
    pub async fn delete_test_class(&self, id: Uuid) -> AppResult<Option<TestClassResponse>> {
        let txn = self.begin().await?;

        let class = TestClass::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test class: {}", e)))?;

        let Some(class) = class else {
            return Ok(None);
        };

        let mut items = load_items_by_class_ids(&txn, &[class.id]).await?;
        let test_items = items.remove(&class.id).unwrap_or_default();

        // SQLite only honours ON DELETE CASCADE with foreign_keys enabled.
        TestItem::delete_many()
            .filter(test_item::Column::TestClassId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test items: {}", e)))?;

        TestClass::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test class: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit delete: {}", e)))?;

        info!(
            "Test class deleted: id={}, removed {} test items",
            id,
            test_items.len()
        );

        Ok(Some(TestClassResponse::from_entity(class, test_items)))
    }
}
