//! Command to delete the full list, guarded by an interactive confirmation.

use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::info;

use crate::framework::{Context, Error};
use crate::messages;

const CONFIRM_ID: &str = "deletelist-confirm";
const CANCEL_ID: &str = "deletelist-cancel";

/// How long the confirmation buttons stay active.
const CONFIRMATION_WINDOW: Duration = Duration::from_secs(60);

/// Löscht die Gesamtliste nach einer Bestätigung.
#[poise::command(prefix_command)]
pub async fn deletelist(ctx: Context<'_>) -> Result<(), Error> {
    let components = vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(CONFIRM_ID)
            .label(messages::DELETE_CONFIRM_LABEL)
            .style(serenity::ButtonStyle::Danger),
        serenity::CreateButton::new(CANCEL_ID)
            .label(messages::DELETE_CANCEL_LABEL)
            .style(serenity::ButtonStyle::Secondary),
    ])];

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .content(messages::DELETE_CONFIRM_PROMPT)
                .components(components),
        )
        .await?;
    let prompt_id = reply.message().await?.id;

    // Only the invoking user may answer, and only on this prompt
    let interaction = serenity::ComponentInteractionCollector::new(ctx)
        .author_id(ctx.author().id)
        .message_id(prompt_id)
        .timeout(CONFIRMATION_WINDOW)
        .await;

    match interaction {
        Some(press) if press.data.custom_id == CONFIRM_ID => {
            info!("Full-list deletion confirmed by {}", ctx.author().name);
            // TODO: wire Store::recreate_schema here once the deletion
            // behavior is decided
            respond(ctx, &press, messages::DELETE_CONFIRMED).await?;
        }
        Some(press) => {
            respond(ctx, &press, messages::DELETE_CANCELLED).await?;
        }
        None => {
            reply
                .edit(
                    ctx,
                    poise::CreateReply::default()
                        .content(messages::DELETE_TIMEOUT)
                        .components(vec![]),
                )
                .await?;
        }
    }

    Ok(())
}

/// Replaces the prompt (and its buttons) with the outcome text.
async fn respond(
    ctx: Context<'_>,
    press: &serenity::ComponentInteraction,
    content: &str,
) -> Result<(), Error> {
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(content)
                    .components(vec![]),
            ),
        )
        .await?;
    Ok(())
}
