//! Create test_results table.
//!
//! One row per equipment unit tested within a lote.

use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_lotes::Lote;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResult::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestResult::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(TestResult::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(TestResult::LoteId).uuid().not_null())
                    .col(ColumnDef::new(TestResult::EquipmentType).string().not_null())
                    .col(ColumnDef::new(TestResult::EquipmentSku).string().not_null())
                    .col(
                        ColumnDef::new(TestResult::EquipmentBarebone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestResult::EquipmentSerial)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TestResult::GeneralObservations).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_results_lote_id")
                            .from(TestResult::Table, TestResult::LoteId)
                            .to(Lote::Table, Lote::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_results_lote_id")
                    .table(TestResult::Table)
                    .col(TestResult::LoteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestResult {
    #[sea_orm(iden = "test_results")]
    Table,
    Id,
    Timestamp,
    LoteId,
    EquipmentType,
    EquipmentSku,
    EquipmentBarebone,
    EquipmentSerial,
    GeneralObservations,
}
