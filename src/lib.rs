// Library entry so integration tests can reference internal modules.
// The binary (`main.rs`) drives the same modules through this crate.
pub mod constants;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod onboarding;
pub mod ui;

pub use model::AppState;
