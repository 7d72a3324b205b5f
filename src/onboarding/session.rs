//! Per-user onboarding progress, kept in memory for the process lifetime.

use std::collections::HashMap;

use serenity::model::id::UserId;
use tokio::sync::RwLock;

use crate::onboarding::pages::{NavAction, PageOrdinal};

/// Repository of each member's current onboarding page.
///
/// Entries default to the first page when absent and are dropped when a
/// member leaves. No expiry, no durability across restarts.
#[derive(Default)]
pub struct SessionStore {
    pages: RwLock<HashMap<UserId, PageOrdinal>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page for a member, defaulting to the first page when unknown.
    pub async fn page(&self, user: UserId) -> PageOrdinal {
        self.pages
            .read()
            .await
            .get(&user)
            .copied()
            .unwrap_or(PageOrdinal::FIRST)
    }

    pub async fn set(&self, user: UserId, page: PageOrdinal) {
        self.pages.write().await.insert(user, page);
    }

    /// Apply a navigation action and return the resulting page.
    ///
    /// The whole read-modify-write runs under one write guard with no await
    /// points inside, so two rapid presses from the same user both land.
    pub async fn advance(&self, user: UserId, action: NavAction) -> PageOrdinal {
        let mut pages = self.pages.write().await;
        let page = pages.entry(user).or_insert(PageOrdinal::FIRST);
        *page = page.apply(action);
        *page
    }

    pub async fn remove(&self, user: UserId) {
        self.pages.write().await.remove(&user);
    }
}
