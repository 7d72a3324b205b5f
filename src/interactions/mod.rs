//! Component interaction routing.
//!
//! `handler.rs` delegates every component event here; the onboarding handler
//! then dispatches on the component's custom_id. Identifiers live in `ids` so
//! rendering and routing cannot drift apart.

pub mod ids;
pub mod onboarding_handler;
pub mod util;
