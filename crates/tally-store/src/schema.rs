//! Idempotent schema management for the three tables and their indexes.

use crate::error::StoreResult;
use crate::store::Store;
use tracing::{debug, info};

/// Statements that build the schema, executed one by one.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL UNIQUE,
        user_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS counters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        item_id INTEGER NOT NULL,
        count INTEGER NOT NULL DEFAULT 0,
        UNIQUE (user_id, item_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_counters_user ON counters (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_counters_item ON counters (item_id)",
];

impl Store {
    /// Creates the tables and indexes if they do not exist yet.
    ///
    /// Safe to call on every startup.
    pub async fn initialize_schema(&self) -> StoreResult<()> {
        debug!("Initializing database schema");

        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(self.pool()).await?;
        }

        Ok(())
    }

    /// Drops all three tables and rebuilds the empty schema.
    pub async fn recreate_schema(&self) -> StoreResult<()> {
        info!("Recreating database schema");

        for table in ["counters", "items", "users"] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(self.pool())
                .await?;
        }

        self.initialize_schema().await
    }
}
