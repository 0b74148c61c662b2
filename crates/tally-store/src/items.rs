//! Item accessor: the admin-curated list of allowed names.

use crate::error::StoreResult;
use crate::records::Item;
use crate::store::Store;
use tracing::debug;

impl Store {
    /// Looks up an item by its unique name.
    pub async fn item_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>("SELECT id, item_name FROM items WHERE item_name = ?")
            .bind(name)
            .fetch_optional(self.pool())
            .await?;

        Ok(item)
    }

    /// Registers a new allowed item name.
    ///
    /// Returns `false` without touching the table when the name is already
    /// present. Items are immutable once created.
    pub async fn create_item(&self, name: &str) -> StoreResult<bool> {
        let result = sqlx::query("INSERT OR IGNORE INTO items (item_name) VALUES (?)")
            .bind(name)
            .execute(self.pool())
            .await?;

        let created = result.rows_affected() == 1;
        debug!("create_item({name}) -> {created}");
        Ok(created)
    }
}
