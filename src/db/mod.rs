//! Database module providing connection management, migrations, and queries.
//!
//! Every query checks a connection out of the SeaORM pool for the lifetime of
//! its future and hands it back on completion, error paths included. Writes
//! that touch several rows run inside a [`DatabaseTransaction`], which rolls
//! back when dropped without `commit()`.

pub mod lotes;
pub mod test_classes;
pub mod test_items;
pub mod test_results;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    Statement, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::DatabaseSettings;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the configured database.
    pub async fn new(settings: &DatabaseSettings) -> AppResult<Self> {
        let mut opts = ConnectOptions::new(settings.url.clone());
        opts.max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(settings.connect_timeout)
            .sqlx_logging(false);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        info!(
            "Database pool ready ({:?}, max {} connections)",
            conn.get_database_backend(),
            settings.max_connections
        );

        Ok(DbPool { conn })
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))
    }

    /// Get the underlying pooled connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Open a transaction. Dropping it without `commit()` rolls back.
    pub async fn begin(&self) -> AppResult<DatabaseTransaction> {
        self.conn
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    pub async fn ping(&self) -> AppResult<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one_raw(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await
            .map_err(|e| AppError::Database(format!("Database ping failed: {}", e)))?;
        Ok(())
    }
}

/// Convert a write failure, keeping unique-constraint violations as conflicts.
pub(crate) fn write_error(context: &str, err: sea_orm::DbErr) -> AppError {
    match AppError::from(err) {
        AppError::Database(detail) => AppError::Database(format!("{}: {}", context, detail)),
        other => other,
    }
}
