//! Navigation button row shared by every onboarding page.

use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

use crate::interactions::ids;
use crate::onboarding::pages::PageOrdinal;

/// Previous/Next row sized to the given page: previous is disabled on the
/// first page, next on the last. Disabling is a rendering hint only; the
/// session store clamps independently.
pub fn nav_row(page: PageOrdinal) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::PREV_PAGE)
            .label("⬅️ Previous")
            .style(ButtonStyle::Secondary)
            .disabled(page.is_first()),
        CreateButton::new(ids::NEXT_PAGE)
            .label("Next ➡️")
            .style(ButtonStyle::Primary)
            .disabled(page.is_last()),
    ])
}
