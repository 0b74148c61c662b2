//! Command to count an item for the invoking user.

use tally_common::{normalize_name, ChatUser};
use tally_store::{Store, StoreError};

use crate::framework::{chat_user, Context, Error};
use crate::messages;

/// Zählt ein Item für den aufrufenden User hoch.
#[poise::command(prefix_command)]
pub async fn add(
    ctx: Context<'_>,
    count: i64,
    #[rest] item_name: String,
) -> Result<(), Error> {
    let author = chat_user(ctx.author());
    let prefix = &ctx.data().config.discord.command_prefix;
    let reply = run_add(&ctx.data().store, prefix, &author, count, &item_name).await?;
    ctx.say(reply).await?;
    Ok(())
}

/// Applies `count` to the author's counter for `item_name` and returns the
/// reply text.
///
/// Counts are strictly positive; anything else gets the usage message and
/// leaves the store untouched. Non-numeric counts never reach this
/// function, the argument parser routes them to the same usage message.
pub async fn run_add(
    store: &Store,
    prefix: &str,
    author: &ChatUser,
    count: i64,
    item_name: &str,
) -> Result<String, StoreError> {
    let name = normalize_name(item_name);
    if count <= 0 || name.is_empty() {
        return Ok(messages::add_usage(prefix));
    }

    let Some(item) = store.item_by_name(&name).await? else {
        return Ok(messages::item_not_allowed(prefix, &name));
    };

    store.increment_counter(author, item.id, count).await?;
    let total = store.counter(&author.id, item.id).await?;

    Ok(messages::counter_added(&author.name, count, &name, total))
}
