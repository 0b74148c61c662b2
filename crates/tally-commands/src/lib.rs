//! # Tally Commands
//!
//! Chat command implementations using the Poise framework for Tally Bot.
//!
//! Every command is a thin Poise wrapper around a `run_*` function that
//! takes the store and a [`tally_common::ChatUser`], so the dispatch and
//! reply logic is testable without a Discord connection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod add;
pub mod deletelist;
pub mod framework;
pub mod help;
pub mod messages;
pub mod newitem;
pub mod showfulllist;
pub mod showlist;

pub use framework::*;
