//! Command to show the aggregate list across all users.

use tally_store::{FullListEntry, Store, StoreError};

use crate::framework::{Context, Error};
use crate::messages;

/// Zeigt die Gesamtliste aller User.
#[poise::command(prefix_command)]
pub async fn showfulllist(ctx: Context<'_>) -> Result<(), Error> {
    let reply = run_showfulllist(&ctx.data().store).await?;
    ctx.say(reply).await?;
    Ok(())
}

/// Builds the aggregate-list reply.
pub async fn run_showfulllist(store: &Store) -> Result<String, StoreError> {
    let rows = store.full_list().await?;
    if rows.is_empty() {
        return Ok(messages::FULL_LIST_EMPTY.to_string());
    }

    Ok(render_full_list(&rows))
}

/// Groups the user-then-item ordered rows by item name, keeping the items
/// in first-appearance order, and renders one block per item.
fn render_full_list(rows: &[FullListEntry]) -> String {
    let mut groups: Vec<(&str, Vec<&FullListEntry>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(name, _)| *name == row.item_name) {
            Some((_, members)) => members.push(row),
            None => groups.push((row.item_name.as_str(), vec![row])),
        }
    }

    let mut out = messages::FULL_LIST_HEADER.to_string();
    for (item_name, members) in groups {
        out.push_str(&format!("\n{item_name}:"));
        for member in members {
            out.push_str(&format!("\n\t{}: {}", member.user_name, member.count));
        }
    }
    out
}
