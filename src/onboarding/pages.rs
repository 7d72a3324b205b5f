//! The fixed onboarding page sequence and its ordinal arithmetic.

use crate::onboarding::roles::RoleCategory;
use crate::ui::style::{COLOR_CLASS, COLOR_KINGDOM, COLOR_VERIFY, COLOR_WELCOME};

pub const PAGE_COUNT: u8 = 4;

/// A 1-based position in the onboarding flow, always within `1..=PAGE_COUNT`.
///
/// `next`/`prev` saturate at the bounds, so navigation can never skip or wrap
/// regardless of how button events are interleaved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageOrdinal(u8);

impl PageOrdinal {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(PAGE_COUNT);

    pub fn new(ordinal: u8) -> Option<Self> {
        (1..=PAGE_COUNT).contains(&ordinal).then_some(Self(ordinal))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    pub fn is_last(self) -> bool {
        self.0 == PAGE_COUNT
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1).min(PAGE_COUNT))
    }

    pub fn prev(self) -> Self {
        Self((self.0 - 1).max(1))
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Next => self.next(),
            NavAction::Previous => self.prev(),
        }
    }
}

/// A navigation button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
}

/// The interactive element a page leads with, besides the shared nav row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primary {
    Select(RoleCategory),
    VerifyButton,
}

/// Static display payload and primary component of one onboarding page.
pub struct PageDef {
    pub title: &'static str,
    pub description: &'static str,
    pub color: u32,
    pub image: Option<&'static str>,
    pub primary: Primary,
}

const PAGES: [PageDef; PAGE_COUNT as usize] = [
    PageDef {
        title: "🌍 Welcome to the Server!",
        description: "Choose your **language** and **role** below.",
        color: COLOR_WELCOME,
        image: None,
        primary: Primary::Select(RoleCategory::Language),
    },
    PageDef {
        title: "✅ Verification",
        description: "Click the **button** below to verify yourself and gain access.",
        color: COLOR_VERIFY,
        image: None,
        primary: Primary::VerifyButton,
    },
    PageDef {
        title: "⚔️ Choose Your Class",
        description: "Select your **class** from the menu below.",
        color: COLOR_CLASS,
        image: None,
        primary: Primary::Select(RoleCategory::Class),
    },
    PageDef {
        title: "🏰 Choose Your Kingdom",
        description: "Select your **kingdom** from the menu below.",
        color: COLOR_KINGDOM,
        image: None,
        primary: Primary::Select(RoleCategory::Kingdom),
    },
];

/// Look up a page definition. Total over `PageOrdinal` by construction.
pub fn page(ordinal: PageOrdinal) -> &'static PageDef {
    &PAGES[(ordinal.get() - 1) as usize]
}
