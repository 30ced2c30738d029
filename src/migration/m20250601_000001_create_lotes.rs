//! Create lotes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lote::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lote::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lote::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Lote::Status)
                            .string()
                            .not_null()
                            .default("Open"),
                    )
                    .col(
                        ColumnDef::new(Lote::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lote {
    #[sea_orm(iden = "lotes")]
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
}
