//! The onboarding flow: a fixed four-page sequence (welcome, verification,
//! class, kingdom) walked with navigation buttons, with role grants driven by
//! the selection menus on each page.

pub mod join;
pub mod pages;
pub mod roles;
pub mod session;
pub mod ui;
