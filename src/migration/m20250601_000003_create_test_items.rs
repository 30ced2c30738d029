//! Create test_items table.

use sea_orm_migration::prelude::*;

use super::m20250601_000002_create_test_classes::TestClass;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestItem::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestItem::Name).string().not_null())
                    .col(ColumnDef::new(TestItem::Description).text().not_null())
                    .col(ColumnDef::new(TestItem::TestClassId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_items_test_class_id")
                            .from(TestItem::Table, TestItem::TestClassId)
                            .to(TestClass::Table, TestClass::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_items_test_class_id")
                    .table(TestItem::Table)
                    .col(TestItem::TestClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_items_name")
                    .table(TestItem::Table)
                    .col(TestItem::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestItem {
    #[sea_orm(iden = "test_items")]
    Table,
    Id,
    Name,
    Description,
    TestClassId,
}
