//! Persistence layer for the game catalog.
//!
//! Provides the connection pool, embedded migrations, row models and DTOs
//! (`models`), and zero-sized repositories (`repositories`).

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Schema and seed migrations embedded from `db/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`, including genre seeds.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// How far the database schema is behind the embedded migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Migrations recorded as successfully applied.
    pub applied: i64,
    /// Migrations compiled into this binary.
    pub expected: i64,
}

impl MigrationStatus {
    pub fn is_current(&self) -> bool {
        self.applied >= self.expected
    }
}

/// Compare the `_sqlx_migrations` ledger against the embedded migrations.
///
/// Fails if the ledger table does not exist yet.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
        .fetch_one(pool)
        .await?;
    Ok(MigrationStatus {
        applied,
        expected: MIGRATOR
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .count() as i64,
    })
}
