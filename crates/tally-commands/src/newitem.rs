//! Command to register a new allowed item name.

use tally_common::{normalize_name, ChatUser};
use tally_store::{Store, StoreError};

use crate::framework::{chat_user, Context, Error};
use crate::messages;

/// Fügt ein neues erlaubtes Item hinzu.
#[poise::command(prefix_command)]
pub async fn newitem(ctx: Context<'_>, #[rest] item_name: String) -> Result<(), Error> {
    let author = chat_user(ctx.author());
    let prefix = &ctx.data().config.discord.command_prefix;
    let reply = run_newitem(&ctx.data().store, prefix, &author, &item_name).await?;
    ctx.say(reply).await?;
    Ok(())
}

/// Registers `item_name` and returns the reply text.
pub async fn run_newitem(
    store: &Store,
    prefix: &str,
    author: &ChatUser,
    item_name: &str,
) -> Result<String, StoreError> {
    let name = normalize_name(item_name);
    if name.is_empty() {
        return Ok(messages::newitem_usage(prefix));
    }

    if store.create_item(&name).await? {
        Ok(messages::item_created(&author.name, &name))
    } else {
        Ok(messages::item_already_allowed(&name))
    }
}
