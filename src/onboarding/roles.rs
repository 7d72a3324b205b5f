//! Lookup tables mapping menu selections to guild role names.
//!
//! Resolution is pure: no state, no I/O. Whether a resolved name actually
//! exists in the guild is the caller's problem (`interactions::util`).

use crate::interactions::ids;

/// One selectable entry in a role menu.
pub struct RoleOption {
    pub key: &'static str,
    pub label: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleCategory {
    Language,
    Class,
    Kingdom,
}

const LANGUAGES: &[RoleOption] = &[
    RoleOption { key: "english", label: "English 🇺🇸", role: "English Speaker" },
    RoleOption { key: "spanish", label: "Español 🇪🇸", role: "Spanish Speaker" },
    RoleOption { key: "french", label: "Français 🇫🇷", role: "French Speaker" },
];

const CLASSES: &[RoleOption] = &[
    RoleOption { key: "warrior", label: "Warrior ⚔️", role: "Warrior" },
    RoleOption { key: "mage", label: "Mage 🔮", role: "Mage" },
    RoleOption { key: "archer", label: "Archer 🏹", role: "Archer" },
];

const KINGDOMS: &[RoleOption] = &[
    RoleOption { key: "red_kingdom", label: "Red Kingdom 🔴", role: "Red Kingdom" },
    RoleOption { key: "blue_kingdom", label: "Blue Kingdom 🔵", role: "Blue Kingdom" },
    RoleOption { key: "green_kingdom", label: "Green Kingdom 🟢", role: "Green Kingdom" },
];

impl RoleCategory {
    pub fn custom_id(self) -> &'static str {
        match self {
            Self::Language => ids::LANGUAGE_SELECT,
            Self::Class => ids::CLASS_SELECT,
            Self::Kingdom => ids::KINGDOM_SELECT,
        }
    }

    pub fn from_custom_id(id: &str) -> Option<Self> {
        match id {
            ids::LANGUAGE_SELECT => Some(Self::Language),
            ids::CLASS_SELECT => Some(Self::Class),
            ids::KINGDOM_SELECT => Some(Self::Kingdom),
            _ => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Language => "Choose your language",
            Self::Class => "Choose your class",
            Self::Kingdom => "Choose your kingdom",
        }
    }

    /// The declared option set rendered into this category's menu.
    pub fn options(self) -> &'static [RoleOption] {
        match self {
            Self::Language => LANGUAGES,
            Self::Class => CLASSES,
            Self::Kingdom => KINGDOMS,
        }
    }

    /// Resolve a selection key to its role name. `None` for undeclared keys.
    pub fn role_for(self, key: &str) -> Option<&'static str> {
        self.options().iter().find(|o| o.key == key).map(|o| o.role)
    }

    /// Ephemeral confirmation sent after a successful grant.
    pub fn confirmation(self, role: &str) -> String {
        match self {
            Self::Language => format!("✅ You have been assigned the **{role}** role!"),
            Self::Class => format!("✅ You are now a **{role}**!"),
            Self::Kingdom => format!("✅ You joined the **{role}**!"),
        }
    }
}
