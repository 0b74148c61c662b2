//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use tally_common::TallyError;

/// Main configuration structure for Tally Bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Prefix that marks a message as a command.
    pub command_prefix: String,
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the sqlite database file.
    pub path: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.discord.token.is_empty() {
            return Err(TallyError::Config(
                "Discord token cannot be empty".to_string(),
            ));
        }

        if self.discord.command_prefix.is_empty() {
            return Err(TallyError::Config(
                "Command prefix cannot be empty".to_string(),
            ));
        }

        if self.database.path.is_empty() {
            return Err(TallyError::Config(
                "Database path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
