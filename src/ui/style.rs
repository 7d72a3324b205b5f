//! Central UI style constants.
pub const COLOR_WELCOME: u32 = 0x3498DB; // Blue
pub const COLOR_VERIFY: u32 = 0x2ECC71; // Green
pub const COLOR_CLASS: u32 = 0x9B59B6; // Purple
pub const COLOR_KINGDOM: u32 = 0xF1C40F; // Gold
