// Central constants for channel and role identity.
// Both are matched by exact name against the guild's live configuration.
pub const WELCOME_CHANNEL_NAME: &str = "welcome";
pub const VERIFIED_ROLE_NAME: &str = "Verified";
