//! Tests for the in-memory session repository.

use std::sync::Arc;

use gatekeeper_bot::onboarding::pages::{NavAction, PageOrdinal};
use gatekeeper_bot::onboarding::session::SessionStore;
use serenity::model::id::UserId;

#[tokio::test]
async fn unknown_user_defaults_to_first_page() {
    let store = SessionStore::new();
    assert_eq!(store.page(UserId::new(1)).await, PageOrdinal::FIRST);
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let store = SessionStore::new();
    let user = UserId::new(7);
    store.set(user, PageOrdinal::new(3).unwrap()).await;
    assert_eq!(store.page(user).await.get(), 3);
}

#[tokio::test]
async fn advance_walks_forward() {
    let store = SessionStore::new();
    let user = UserId::new(7);
    store.set(user, PageOrdinal::new(2).unwrap()).await;
    assert_eq!(store.advance(user, NavAction::Next).await.get(), 3);
    assert_eq!(store.page(user).await.get(), 3);
}

#[tokio::test]
async fn next_on_last_page_is_a_noop() {
    let store = SessionStore::new();
    let user = UserId::new(7);
    store.set(user, PageOrdinal::LAST).await;
    assert_eq!(store.advance(user, NavAction::Next).await, PageOrdinal::LAST);
    assert_eq!(store.page(user).await, PageOrdinal::LAST);
}

#[tokio::test]
async fn previous_on_first_page_is_a_noop() {
    let store = SessionStore::new();
    let user = UserId::new(7);
    // No session yet: the entry defaults to the first page, then clamps.
    assert_eq!(
        store.advance(user, NavAction::Previous).await,
        PageOrdinal::FIRST
    );
}

#[tokio::test]
async fn removed_user_falls_back_to_default() {
    let store = SessionStore::new();
    let user = UserId::new(7);
    store.set(user, PageOrdinal::LAST).await;
    store.remove(user).await;
    assert_eq!(store.page(user).await, PageOrdinal::FIRST);
}

#[tokio::test]
async fn concurrent_presses_are_not_lost() {
    let store = Arc::new(SessionStore::new());
    let user = UserId::new(42);

    // A double-clicked Next from page 1 must land both presses: 1 -> 2 -> 3.
    let a = tokio::spawn({
        let store = store.clone();
        async move { store.advance(user, NavAction::Next).await }
    });
    let b = tokio::spawn({
        let store = store.clone();
        async move { store.advance(user, NavAction::Next).await }
    });
    let (a, b) = (a.await.unwrap(), b.await.unwrap());

    assert_eq!(store.page(user).await.get(), 3);
    // One press observed page 2, the other page 3, in either order.
    let mut seen = [a.get(), b.get()];
    seen.sort_unstable();
    assert_eq!(seen, [2, 3]);
}
