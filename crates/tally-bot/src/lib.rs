//! # Tally Bot
//!
//! Discord bot that tracks per-user tallies against a shared item list.
//!
//! This is the main binary crate that wires configuration, the sqlite
//! store, and the command framework into a running client.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
