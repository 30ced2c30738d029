//! Create test_result_items table.
//!
//! Item names are stored as text snapshots so results survive catalog edits.

use sea_orm_migration::prelude::*;

use super::m20250601_000004_create_test_results::TestResult;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResultItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestResultItem::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestResultItem::TestResultId).uuid().not_null())
                    .col(
                        ColumnDef::new(TestResultItem::TestItemName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestResultItem::Status).string_len(20).not_null())
                    .col(ColumnDef::new(TestResultItem::Observation).text())
                    .col(
                        ColumnDef::new(TestResultItem::Sequence)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_result_items_test_result_id")
                            .from(TestResultItem::Table, TestResultItem::TestResultId)
                            .to(TestResult::Table, TestResult::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_result_items_sequence")
                    .table(TestResultItem::Table)
                    .col(TestResultItem::TestResultId)
                    .col(TestResultItem::Sequence)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResultItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestResultItem {
    #[sea_orm(iden = "test_result_items")]
    Table,
    Id,
    TestResultId,
    TestItemName,
    Status,
    Observation,
    Sequence,
}
