//! PostgreSQL store access for the storefront service.

pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use storefront_core::error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Classify a sqlx error into a [`StoreError`].
///
/// - Foreign key (`23503`) and unique (`23505`) violations become `Constraint`.
/// - Everything else, including `RowNotFound` from an update, is a `Fault`.
pub(crate) fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.code().as_deref(), Some("23503" | "23505")) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::warn!(constraint, error = %db_err, "Constraint violation");
            return StoreError::Constraint(format!("violates constraint {constraint}"));
        }
    }
    StoreError::Fault(err.to_string())
}
