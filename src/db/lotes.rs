//! Database queries for lotes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entity::lote::{self, ActiveModel, Entity as Lote};
use crate::entity::test_result::{self, Entity as TestResult};
use crate::entity::test_result_item::{self, Entity as TestResultItem};
use crate::error::{AppError, AppResult};
use crate::models::lote::DEFAULT_LOTE_STATUS;
use crate::models::LoteResponse;

use super::test_results::load_results_by_lote_ids;
use super::{write_error, DbPool};

impl DbPool {
    /// Insert a new lote with the default status.
    pub async fn create_lote(&self, name: String) -> AppResult<LoteResponse> {
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name),
            status: Set(DEFAULT_LOTE_STATUS.to_string()),
            created_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| write_error("Failed to insert lote", e))?;

        info!("Lote created: id={}, name={}", result.id, result.name);

        Ok(LoteResponse::from_entity(result, Vec::new()))
    }

    /// Get a lote (with results) by ID.
    pub async fn get_lote(&self, id: Uuid) -> AppResult<Option<LoteResponse>> {
        let lote = Lote::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get lote: {}", e)))?;

        let Some(lote) = lote else {
            return Ok(None);
        };

        let mut results = load_results_by_lote_ids(self.connection(), &[lote.id]).await?;
        let test_results = results.remove(&lote.id).unwrap_or_default();

        Ok(Some(LoteResponse::from_entity(lote, test_results)))
    }

    /// Get a lote row by name.
    pub async fn get_lote_by_name(&self, name: &str) -> AppResult<Option<lote::Model>> {
        let result = Lote::find()
            .filter(lote::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get lote by name: {}", e)))?;

        Ok(result)
    }

    /// List lotes (with results), oldest first.
    pub async fn list_lotes(&self, offset: u64, limit: u64) -> AppResult<Vec<LoteResponse>> {
        let lotes = Lote::find()
            .order_by_asc(lote::Column::Id) // UUIDv7 is time-ordered
            .offset(offset)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list lotes: {}", e)))?;

        let ids: Vec<Uuid> = lotes.iter().map(|l| l.id).collect();
        let mut results = load_results_by_lote_ids(self.connection(), &ids).await?;

        Ok(lotes
            .into_iter()
            .map(|l| {
                let test_results = results.remove(&l.id).unwrap_or_default();
                LoteResponse::from_entity(l, test_results)
            })
            .collect())
    }

    /// Replace a lote's status. Returns `None` when the lote does not exist.
    pub async fn update_lote_status(
        &self,
        id: Uuid,
        status: String,
    ) -> AppResult<Option<LoteResponse>> {
        let lote = Lote::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get lote: {}", e)))?;

        let Some(lote) = lote else {
            return Ok(None);
        };

        let mut active: ActiveModel = lote.into();
        active.status = Set(status);

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update lote status: {}", e)))?;

        info!("Lote status updated: id={}, status={}", updated.id, updated.status);

        let mut results = load_results_by_lote_ids(self.connection(), &[updated.id]).await?;
        let test_results = results.remove(&updated.id).unwrap_or_default();

        Ok(Some(LoteResponse::from_entity(updated, test_results)))
    }

    /// Delete a lote together with its results and their items.
    /// Returns the deleted state.
    pub async fn delete_lote(&self, id: Uuid) -> AppResult<Option<LoteResponse>> {
        let txn = self.begin().await?;

        let lote = Lote::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to get lote: {}", e)))?;

        let Some(lote) = lote else {
            return Ok(None);
        };

        let mut results = load_results_by_lote_ids(&txn, &[lote.id]).await?;
        let test_results = results.remove(&lote.id).unwrap_or_default();
        let result_ids: Vec<Uuid> = test_results.iter().map(|r| r.id).collect();

        // SQLite only honours ON DELETE CASCADE with foreign_keys enabled.
        if !result_ids.is_empty() {
            TestResultItem::delete_many()
                .filter(test_result_item::Column::TestResultId.is_in(result_ids))
                .exec(&txn)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Failed to delete test result items: {}", e))
                })?;
        }

        TestResult::delete_many()
            .filter(test_result::Column::LoteId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test results: {}", e)))?;

        Lote::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete lote: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit delete: {}", e)))?;

        info!(
            "Lote deleted: id={}, removed {} test results",
            id,
            test_results.len()
        );

        Ok(Some(LoteResponse::from_entity(lote, test_results)))
    }
}
