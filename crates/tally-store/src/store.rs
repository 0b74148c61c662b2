//! Store handle and connection management.

use crate::error::StoreResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Handle to the sqlite store.
///
/// The pool is capped at a single connection, so all store operations are
/// serialized without explicit locking. Cloning is cheap and shares the
/// underlying connection.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (and creates if missing) the database file at `path`.
    pub async fn connect(path: &str) -> StoreResult<Self> {
        info!("Opening database: {path}");

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Opens a private in-memory database, used by tests.
    pub async fn in_memory() -> StoreResult<Self> {
        // Every new connection to sqlite::memory: opens a separate database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
