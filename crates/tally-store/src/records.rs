//! Typed records for every table and projection.

use sqlx::FromRow;

/// An admin-registered item users may accumulate counts against.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    /// Generated primary key.
    pub id: i64,
    /// Unique item name.
    pub item_name: String,
}

/// A chat-platform identity tracked locally once it first interacted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    /// Generated primary key.
    pub id: i64,
    /// External chat-platform identity.
    pub user_id: String,
    /// Display name recorded at first interaction.
    pub user_name: String,
}

/// One row of a single user's counter list.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CounterEntry {
    /// Name of the counted item.
    pub item_name: String,
    /// Accumulated count.
    pub count: i64,
}

/// One row of the cross-user aggregate view.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FullListEntry {
    /// Display name of the counting user.
    pub user_name: String,
    /// Name of the counted item.
    pub item_name: String,
    /// Accumulated count.
    pub count: i64,
}
