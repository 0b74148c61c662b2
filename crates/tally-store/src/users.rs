//! User accessor: lazily created users and their counters.

use crate::error::StoreResult;
use crate::records::{CounterEntry, User};
use crate::store::Store;
use tally_common::ChatUser;
use tracing::debug;

impl Store {
    /// Looks up a user by external chat-platform id.
    pub async fn user_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, user_id, user_name FROM users WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(self.pool())
                .await?;

        Ok(user)
    }

    /// Looks up a user by the display name recorded at first interaction.
    pub async fn user_by_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, user_id, user_name FROM users WHERE user_name = ?",
        )
        .bind(user_name)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    /// Records a user if unseen so far. The stored name is never updated.
    pub async fn ensure_user(&self, user: &ChatUser) -> StoreResult<()> {
        sqlx::query("INSERT OR IGNORE INTO users (user_id, user_name) VALUES (?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Adds `delta` to the counter of `user` for `item_id`.
    ///
    /// Creates the user row and a zero counter row on first contact with
    /// the (user, item) pair, then applies the additive update.
    pub async fn increment_counter(
        &self,
        user: &ChatUser,
        item_id: i64,
        delta: i64,
    ) -> StoreResult<()> {
        self.ensure_user(user).await?;

        sqlx::query("INSERT OR IGNORE INTO counters (user_id, item_id, count) VALUES (?, ?, 0)")
            .bind(&user.id)
            .bind(item_id)
            .execute(self.pool())
            .await?;

        sqlx::query("UPDATE counters SET count = count + ? WHERE user_id = ? AND item_id = ?")
            .bind(delta)
            .bind(&user.id)
            .bind(item_id)
            .execute(self.pool())
            .await?;

        debug!("increment_counter(user={}, item={item_id}, delta={delta})", user.id);
        Ok(())
    }

    /// Current count for one (user, item) pair, 0 when no row exists.
    pub async fn counter(&self, user_id: &str, item_id: i64) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT count FROM counters WHERE user_id = ? AND item_id = ?",
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(count.unwrap_or(0))
    }

    /// All counters of one user with their item names, ordered by item name.
    pub async fn counter_list(&self, user_id: &str) -> StoreResult<Vec<CounterEntry>> {
        let entries = sqlx::query_as::<_, CounterEntry>(
            r#"
            SELECT items.item_name, counters.count
            FROM counters
            INNER JOIN items ON items.id = counters.item_id
            WHERE counters.user_id = ?
            ORDER BY items.item_name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }
}
