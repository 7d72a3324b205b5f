//! Shared application state stored in serenity's global `TypeMap`.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;

use crate::onboarding::session::SessionStore;

/// The central, shared state of the bot. An `Arc<AppState>` lives in the
/// global context so every event handler reaches the same session repository.
#[derive(Default)]
pub struct AppState {
    /// Per-user onboarding progress.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
