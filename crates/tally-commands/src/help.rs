//! Help command listing every available command.

use crate::framework::{Context, Error};
use crate::messages;

/// Zeigt alle verfügbaren Befehle an.
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let prefix = &ctx.data().config.discord.command_prefix;
    ctx.say(messages::help(prefix)).await?;
    Ok(())
}
