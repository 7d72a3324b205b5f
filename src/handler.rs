//! Gateway event handler wiring member joins and component interactions into
//! the onboarding flow.

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::guild::Member;
use serenity::model::id::GuildId;
use serenity::model::user::User;
use serenity::prelude::EventHandler;

use crate::{AppState, interactions, onboarding};

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(target: "gateway", user = %ready.user.name, "connected and ready");
    }

    async fn guild_member_addition(&self, ctx: Context, member: Member) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target: "gateway", "AppState missing from TypeMap");
            return;
        };
        onboarding::join::welcome_new_member(&ctx, &member, &app_state).await;
    }

    async fn guild_member_removal(
        &self,
        ctx: Context,
        _guild_id: GuildId,
        user: User,
        _member: Option<Member>,
    ) {
        if let Some(app_state) = AppState::from_ctx(&ctx).await {
            app_state.sessions.remove(user.id).await;
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target: "gateway", "AppState missing from TypeMap");
            return;
        };
        interactions::onboarding_handler::handle(&ctx, &component, app_state).await;
    }
}
