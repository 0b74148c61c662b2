//! Core bot logic wiring store and command framework into the client.

use crate::error::{BotError, BotResult};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tally_commands::{create_framework, Data};
use tally_config::Config;
use tally_store::Store;
use tracing::info;

/// Main bot structure.
pub struct TallyBot {
    config: Arc<Config>,
}

impl TallyBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Connects the store, builds the framework, and runs the client
    /// until it disconnects.
    pub async fn start(&self) -> BotResult<()> {
        let store = Store::connect(&self.config.database.path).await?;
        store.initialize_schema().await?;
        info!("Database ready: {}", self.config.database.path);

        let config = self.config.clone();
        let framework = create_framework(&self.config.discord.command_prefix)
            .setup(move |_ctx, ready, _framework| {
                Box::pin(async move {
                    info!("Ready! Logged in as {}", ready.user.name);
                    Ok(Data { config, store })
                })
            })
            .build();

        // The same intents the message-driven command surface needs:
        // guilds, their messages, and the message text itself
        let intents = serenity::GatewayIntents::GUILDS
            | serenity::GatewayIntents::GUILD_MESSAGES
            | serenity::GatewayIntents::MESSAGE_CONTENT;

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;

        client.start().await?;
        Ok(())
    }
}
