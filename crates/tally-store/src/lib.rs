//! # Tally Store
//!
//! Sqlite-backed item, user, and counter storage for Tally Bot.
//!
//! This crate owns the relational accounting model: admin-curated items,
//! lazily created users, and one monotonically increasing counter per
//! (user, item) pair, reached through a single serialized connection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod items;
pub mod list;
pub mod records;
pub mod schema;
pub mod store;
pub mod users;

pub use error::*;
pub use records::*;
pub use store::*;
