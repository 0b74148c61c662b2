//! Aggregate view across all users, items, and counters.

use crate::error::StoreResult;
use crate::records::FullListEntry;
use crate::store::Store;

impl Store {
    /// All counters joined to items and users, ordered by user name then
    /// item name. Consumers group the rows by item name for display.
    pub async fn full_list(&self) -> StoreResult<Vec<FullListEntry>> {
        let entries = sqlx::query_as::<_, FullListEntry>(
            r#"
            SELECT users.user_name, items.item_name, counters.count
            FROM counters
            INNER JOIN users ON users.user_id = counters.user_id
            INNER JOIN items ON items.id = counters.item_id
            ORDER BY users.user_name ASC, items.item_name ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }
}
