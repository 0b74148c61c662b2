//! Poise framework setup, command registration, and error routing.

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tally_common::ChatUser;
use tally_config::Config;
use tally_store::Store;
use tracing::{debug, error, info};

use crate::messages;

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Handle to the sqlite store.
    pub store: Store,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Converts a message author into the chat-layer identity handed to
/// command logic.
pub fn chat_user(user: &serenity::User) -> ChatUser {
    ChatUser::new(user.id.to_string(), user.name.clone())
}

/// Creates a new Poise framework with the enumerated command table.
pub fn create_framework(prefix: &str) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: vec![
            crate::help::help(),
            crate::newitem::newitem(),
            crate::showlist::showlist(),
            crate::showfulllist::showfulllist(),
            crate::add::add(),
            crate::deletelist::deletelist(),
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.into()),
            ..Default::default()
        },
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(
                    "Executing command '{}' for {}",
                    ctx.command().qualified_name,
                    ctx.author().name
                );
            })
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Routes framework errors to log lines and fixed reply texts.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {error:?}", ctx.command().name);
        }
        poise::FrameworkError::ArgumentParse { ctx, .. } => {
            let prefix = &ctx.data().config.discord.command_prefix;
            let usage = match ctx.command().name.as_str() {
                "add" => messages::add_usage(prefix),
                "newitem" => messages::newitem_usage(prefix),
                _ => messages::help(prefix),
            };
            if let Err(e) = ctx.say(usage).await {
                error!("Failed to send usage reply: {e:?}");
            }
        }
        poise::FrameworkError::UnknownCommand { msg_content, .. } => {
            info!("Unknown command \"{msg_content}\", ignoring.");
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e:?}");
            }
        }
    }
}
