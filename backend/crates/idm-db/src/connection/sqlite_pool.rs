//! Pool construction and schema migration.

use crate::{DbError, Result as DbErrorResult};

use idm_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Database path that selects a private in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// Open (creating if missing) a file-backed pool in WAL mode.
pub async fn create_pool(
    path: &Path,
    max_connections: u32,
    busy_timeout: Duration,
) -> DbErrorResult<SqlitePool> {
    if path == Path::new(MEMORY_PATH) {
        return create_memory_pool().await;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(busy_timeout)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    log::debug!(
        "Opened SQLite pool at {} (max_connections={})",
        path.display(),
        max_connections
    );

    Ok(pool)
}

/// Single-connection in-memory pool. The database lives as long as the pool.
pub async fn create_memory_pool() -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(MEMORY_PATH)
        .create_if_missing(true)
        .foreign_keys(true);

    // In-memory needs a single connection that is never recycled
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
