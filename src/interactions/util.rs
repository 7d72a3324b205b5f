//! Shared interaction helpers: ephemeral replies and role granting.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::model::guild::Member;
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use thiserror::Error;

/// Failure modes of the grant path. Only `RoleNotConfigured` is user-facing;
/// API errors are logged and the interaction is left to the platform's own
/// timeout UX (no retry, no backoff).
#[derive(Debug, Error)]
pub enum GrantError {
    #[error("role `{0}` does not exist in the guild")]
    RoleNotConfigured(String),
    #[error(transparent)]
    Api(#[from] serenity::Error),
}

/// Look up a role by exact name in the guild's live role list and grant it to
/// the member.
pub async fn grant_named_role(
    ctx: &Context,
    guild_id: GuildId,
    member: &Member,
    role_name: &str,
) -> Result<(), GrantError> {
    let roles = guild_id.roles(&ctx.http).await?;
    let Some(role_id) = roles
        .iter()
        .find_map(|(id, role)| (role.name == role_name).then_some(*id))
    else {
        return Err(GrantError::RoleNotConfigured(role_name.to_string()));
    };
    member.add_role(&ctx.http, role_id).await?;
    Ok(())
}

/// Reply ephemerally, logging instead of propagating a failed send.
pub async fn ephemeral_reply(
    ctx: &Context,
    component: &ComponentInteraction,
    content: impl Into<String>,
) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );
    if let Err(e) = component.create_response(&ctx.http, builder).await {
        tracing::error!(
            target: "ui.reply",
            cid = %component.data.custom_id,
            error = ?e,
            "create_response failed"
        );
    }
}
