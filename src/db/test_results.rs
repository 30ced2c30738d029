//! Database queries for test results and their item outcomes.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entity::lote::Entity as Lote;
use crate::entity::test_result::{self, ActiveModel, Entity as TestResult};
use crate::entity::test_result_item::{
    self, ActiveModel as TestResultItemActiveModel, Entity as TestResultItem,
};
use crate::error::{AppError, AppResult};
use crate::models::{CreateTestResultRequest, TestResultResponse};

use super::{write_error, DbPool};

/// Load item outcomes for a set of results, grouped by result ID in submission order.
pub(crate) async fn load_items_by_result_ids<C: ConnectionTrait>(
    conn: &C,
    result_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, Vec<test_result_item::Model>>> {
    let mut grouped: HashMap<Uuid, Vec<test_result_item::Model>> = HashMap::new();

    if result_ids.is_empty() {
        return Ok(grouped);
    }

    let items = TestResultItem::find()
        .filter(test_result_item::Column::TestResultId.is_in(result_ids.to_vec()))
        .order_by_asc(test_result_item::Column::TestResultId)
        .order_by_asc(test_result_item::Column::Sequence)
        .all(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get test result items: {}", e)))?;

    for item in items {
        grouped.entry(item.test_result_id).or_default().push(item);
    }

    Ok(grouped)
}

/// Attach item outcomes to already-loaded results, preserving their order.
pub(crate) async fn with_items<C: ConnectionTrait>(
    conn: &C,
    results: Vec<test_result::Model>,
) -> AppResult<Vec<TestResultResponse>> {
    let ids: Vec<Uuid> = results.iter().map(|r| r.id).collect();
    let mut items = load_items_by_result_ids(conn, &ids).await?;

    Ok(results
        .into_iter()
        .map(|r| {
            let children = items.remove(&r.id).unwrap_or_default();
            TestResultResponse::from_entity(r, children)
        })
        .collect())
}

/// Load results (with items) for a set of lotes, grouped by lote ID.
pub(crate) async fn load_results_by_lote_ids<C: ConnectionTrait>(
    conn: &C,
    lote_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, Vec<TestResultResponse>>> {
    let mut grouped: HashMap<Uuid, Vec<TestResultResponse>> = HashMap::new();

    if lote_ids.is_empty() {
        return Ok(grouped);
    }

    let results = TestResult::find()
        .filter(test_result::Column::LoteId.is_in(lote_ids.to_vec()))
        .order_by_asc(test_result::Column::Id) // UUIDv7 is time-ordered
        .all(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get test results for lotes: {}", e)))?;

    for result in with_items(conn, results).await? {
        grouped.entry(result.lote_id).or_default().push(result);
    }

    Ok(grouped)
}

impl DbPool {
    /// Record a test result and all of its item outcomes as one unit.
    ///
    /// Returns `None` when the lote does not exist. A duplicate equipment
    /// serial is reported as a conflict and nothing is written.
    pub async fn create_test_result(
        &self,
        lote_id: Uuid,
        req: CreateTestResultRequest,
    ) -> AppResult<Option<TestResultResponse>> {
        let txn = self.begin().await?;

        let lote = Lote::find_by_id(lote_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to get lote: {}", e)))?;
        if lote.is_none() {
            return Ok(None);
        }

        let duplicate = TestResult::find()
            .filter(test_result::Column::EquipmentSerial.eq(req.equipment_serial.as_str()))
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check equipment serial: {}", e)))?;
        if duplicate.is_some() {
            return Err(AppError::Conflict(format!(
                "Equipment serial {} already registered",
                req.equipment_serial
            )));
        }

        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            timestamp: Set(Utc::now()),
            lote_id: Set(lote_id),
            equipment_type: Set(req.equipment_type),
            equipment_sku: Set(req.equipment_sku),
            equipment_barebone: Set(req.equipment_barebone),
            equipment_serial: Set(req.equipment_serial),
            general_observations: Set(req.general_observations),
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| write_error("Failed to insert test result", e))?;

        let mut items = Vec::with_capacity(req.test_result_items.len());
        for (sequence, item) in req.test_result_items.into_iter().enumerate() {
            let item_model = TestResultItemActiveModel {
                id: Set(Uuid::now_v7()),
                test_result_id: Set(result.id),
                test_item_name: Set(item.test_item_name),
                status: Set(item.status.as_str().to_string()),
                observation: Set(item.observation),
                sequence: Set(sequence as i32),
            };

            let inserted = item_model
                .insert(&txn)
                .await
                .map_err(|e| write_error("Failed to insert test result item", e))?;
            items.push(inserted);
        }

        txn.commit()
            .await
            .map_err(|e| write_error("Failed to commit test result", e))?;

        info!(
            "Test result created: id={}, lote_id={}, serial={}, items={}",
            result.id,
            lote_id,
            result.equipment_serial,
            items.len()
        );

        Ok(Some(TestResultResponse::from_entity(result, items)))
    }

    /// Get a test result (with items) by ID.
    pub async fn get_test_result(&self, id: Uuid) -> AppResult<Option<TestResultResponse>> {
        let result = TestResult::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test result: {}", e)))?;

        match result {
            Some(r) => Ok(with_items(self.connection(), vec![r]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Get a test result row by equipment serial.
    pub async fn get_test_result_by_serial(
        &self,
        serial: &str,
    ) -> AppResult<Option<test_result::Model>> {
        let result = TestResult::find()
            .filter(test_result::Column::EquipmentSerial.eq(serial))
            .one(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to get test result by serial: {}", e))
            })?;

        Ok(result)
    }

    /// List test results (with items), oldest first.
    pub async fn list_test_results(
        &self,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<TestResultResponse>> {
        let results = TestResult::find()
            .order_by_asc(test_result::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test results: {}", e)))?;

        with_items(self.connection(), results).await
    }

    /// Delete a test result and its items. Returns the deleted state.
    pub async fn delete_test_result(&self, id: Uuid) -> AppResult<Option<TestResultResponse>> {
        let txn = self.begin().await?;

        let result = TestResult::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test result: {}", e)))?;
        let Some(result) = result else {
            return Ok(None);
        };

        let snapshot = with_items(&txn, vec![result]).await?.pop();

        // SQLite only honours ON DELETE CASCADE with foreign_keys enabled.
        TestResultItem::delete_many()
            .filter(test_result_item::Column::TestResultId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test result items: {}", e)))?;

        TestResult::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete test result: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit delete: {}", e)))?;

        info!("Test result deleted: id={}", id);

        Ok(snapshot)
    }
}
