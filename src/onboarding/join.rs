//! New-member welcome flow.

use serenity::builder::CreateMessage;
use serenity::model::channel::ChannelType;
use serenity::model::guild::Member;
use serenity::model::id::{ChannelId, GuildId};
use serenity::model::mention::Mentionable;
use serenity::prelude::Context;

use crate::AppState;
use crate::constants::WELCOME_CHANNEL_NAME;
use crate::onboarding::pages::PageOrdinal;
use crate::onboarding::ui;

/// Greet a new member in the welcome channel and start their session on the
/// first page. A guild without a `welcome` text channel gets a warning in the
/// logs and nothing else; in particular no session entry is created.
pub async fn welcome_new_member(ctx: &Context, member: &Member, app_state: &AppState) {
    let channel = match find_welcome_channel(ctx, member.guild_id).await {
        Ok(Some(channel)) => channel,
        Ok(None) => {
            tracing::warn!(
                target: "onboarding.join",
                guild_id = %member.guild_id,
                channel = WELCOME_CHANNEL_NAME,
                "welcome channel not found; onboarding is inactive for this guild"
            );
            return;
        }
        Err(e) => {
            tracing::error!(
                target: "onboarding.join",
                guild_id = %member.guild_id,
                error = ?e,
                "failed to list guild channels"
            );
            return;
        }
    };

    app_state.sessions.set(member.user.id, PageOrdinal::FIRST).await;

    let (embed, components) = ui::render_page(PageOrdinal::FIRST);
    let message = CreateMessage::new()
        .content(format!("Welcome, {}!", member.mention()))
        .embed(embed)
        .components(components);
    if let Err(e) = channel.send_message(&ctx.http, message).await {
        tracing::error!(
            target: "onboarding.join",
            user_id = %member.user.id,
            error = ?e,
            "failed to send welcome message"
        );
    }
}

/// Resolve the guild's welcome channel by exact name over the live channel
/// list. `Ok(None)` when no text channel carries the name.
async fn find_welcome_channel(
    ctx: &Context,
    guild_id: GuildId,
) -> serenity::Result<Option<ChannelId>> {
    let channels = guild_id.channels(&ctx.http).await?;
    Ok(channels
        .values()
        .find(|c| c.kind == ChannelType::Text && c.name == WELCOME_CHANNEL_NAME)
        .map(|c| c.id))
}
