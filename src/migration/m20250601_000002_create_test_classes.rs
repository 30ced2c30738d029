//! Create test_classes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestClass::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestClass::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(TestClass::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestClass {
    #[sea_orm(iden = "test_classes")]
    Table,
    Id,
    Name,
}
