//! Command to show one user's counter list.

use tally_common::ChatUser;
use tally_store::{CounterEntry, Store, StoreError};

use crate::framework::{chat_user, Context, Error};
use crate::messages;

/// Zeigt die Liste eines Users (ohne Angabe: die eigene).
#[poise::command(prefix_command)]
pub async fn showlist(ctx: Context<'_>, username: Option<String>) -> Result<(), Error> {
    let author = chat_user(ctx.author());
    let reply = run_showlist(&ctx.data().store, &author, username.as_deref()).await?;
    ctx.say(reply).await?;
    Ok(())
}

/// Builds the list reply for `username`, or for the author when absent.
pub async fn run_showlist(
    store: &Store,
    author: &ChatUser,
    username: Option<&str>,
) -> Result<String, StoreError> {
    let (user_id, display_name) = match username {
        Some(name) => match store.user_by_name(name).await? {
            Some(user) => (user.user_id, user.user_name),
            None => return Ok(messages::user_not_found(name)),
        },
        None => (author.id.clone(), author.name.clone()),
    };

    let entries = store.counter_list(&user_id).await?;
    if entries.is_empty() {
        return Ok(messages::empty_list(&display_name));
    }

    Ok(render_counter_list(&display_name, &entries))
}

fn render_counter_list(user_name: &str, entries: &[CounterEntry]) -> String {
    let mut out = messages::list_header(user_name);
    for entry in entries {
        out.push_str(&format!("\n{}: {}", entry.item_name, entry.count));
    }
    out
}
