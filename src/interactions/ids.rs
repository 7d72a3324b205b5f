//! Centralized custom_id string constants for interaction components.

use crate::onboarding::pages::NavAction;

pub const LANGUAGE_SELECT: &str = "language_select";
pub const CLASS_SELECT: &str = "class_select";
pub const KINGDOM_SELECT: &str = "kingdom_select";
pub const VERIFY: &str = "verify";
pub const NEXT_PAGE: &str = "next_page";
pub const PREV_PAGE: &str = "prev_page";

/// Interpret a custom_id as a navigation press.
pub fn nav_action(id: &str) -> Option<NavAction> {
    match id {
        NEXT_PAGE => Some(NavAction::Next),
        PREV_PAGE => Some(NavAction::Previous),
        _ => None,
    }
}
