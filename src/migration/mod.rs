//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_lotes;
mod m20250601_000002_create_test_classes;
mod m20250601_000003_create_test_items;
mod m20250601_000004_create_test_results;
mod m20250601_000005_create_test_result_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_lotes::Migration),
            Box::new(m20250601_000002_create_test_classes::Migration),
            Box::new(m20250601_000003_create_test_items::Migration),
            Box::new(m20250601_000004_create_test_results::Migration),
            Box::new(m20250601_000005_create_test_result_items::Migration),
        ]
    }
}
