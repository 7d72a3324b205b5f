//! Handles all component interactions for the onboarding flow.

use std::sync::Arc;

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};
use serenity::prelude::Context;

use crate::AppState;
use crate::constants::VERIFIED_ROLE_NAME;
use crate::interactions::ids;
use crate::interactions::util::{GrantError, ephemeral_reply, grant_named_role};
use crate::onboarding::pages::NavAction;
use crate::onboarding::roles::RoleCategory;
use crate::onboarding::ui;

/// The main entry point for onboarding component interactions.
pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let custom_id = component.data.custom_id.as_str();

    if let Some(action) = ids::nav_action(custom_id) {
        handle_nav(ctx, component, &app_state, action).await;
    } else if custom_id == ids::VERIFY {
        handle_grant(ctx, component, None).await;
    } else if let Some(category) = RoleCategory::from_custom_id(custom_id) {
        handle_grant(ctx, component, Some(category)).await;
    } else {
        // Unknown families are dropped without an acknowledgment.
        tracing::debug!(target: "onboarding.route", cid = %custom_id, "unhandled component interaction");
    }
}

/// Move the member's session and re-render the originating message in place.
async fn handle_nav(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    action: NavAction,
) {
    let page = app_state.sessions.advance(component.user.id, action).await;
    let (embed, components) = ui::render_page(page);
    let builder = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    if let Err(e) = component.create_response(&ctx.http, builder).await {
        tracing::error!(
            target: "ui.update",
            cid = %component.data.custom_id,
            page = page.get(),
            error = ?e,
            "message update failed"
        );
    }
}

/// Grant the role behind a selection (or the verification button when
/// `category` is `None`) and confirm ephemerally. Session state is untouched.
async fn handle_grant(
    ctx: &Context,
    component: &ComponentInteraction,
    category: Option<RoleCategory>,
) {
    let Some(guild_id) = component.guild_id else {
        tracing::debug!(target: "onboarding.grant", cid = %component.data.custom_id, "component used outside a guild");
        return;
    };
    let Some(member) = component.member.as_ref() else {
        tracing::debug!(target: "onboarding.grant", cid = %component.data.custom_id, "component event without member data");
        return;
    };

    let (role_name, not_found_msg, confirmation) = match category {
        None => (
            VERIFIED_ROLE_NAME,
            "Verification role not found!",
            "✅ You are now Verified!".to_string(),
        ),
        Some(category) => {
            let Some(key) = selected_value(component) else {
                tracing::warn!(target: "onboarding.grant", cid = %component.data.custom_id, "select interaction without a string value");
                return;
            };
            match category.role_for(key) {
                Some(role) => (role, "Role not found!", category.confirmation(role)),
                None => {
                    // Declared menus only submit declared keys; a miss means a
                    // forged or stale component.
                    tracing::warn!(target: "onboarding.grant", cid = %component.data.custom_id, key = %key, "selection key not in catalog");
                    ephemeral_reply(ctx, component, "Role not found!").await;
                    return;
                }
            }
        }
    };

    match grant_named_role(ctx, guild_id, member, role_name).await {
        Ok(()) => ephemeral_reply(ctx, component, confirmation).await,
        Err(GrantError::RoleNotConfigured(name)) => {
            tracing::warn!(
                target: "onboarding.grant",
                guild_id = %guild_id,
                role = %name,
                "role missing from guild; check server setup"
            );
            ephemeral_reply(ctx, component, not_found_msg).await;
        }
        Err(GrantError::Api(e)) => {
            tracing::error!(
                target: "onboarding.grant",
                guild_id = %guild_id,
                role = %role_name,
                error = ?e,
                "role grant failed"
            );
        }
    }
}

fn selected_value(component: &ComponentInteraction) -> Option<&str> {
    match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    }
}
