//! Embed and component rendering for onboarding pages.

use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::application::ButtonStyle;

use crate::interactions::ids;
use crate::onboarding::pages::{self, PageOrdinal, Primary};
use crate::onboarding::roles::RoleCategory;
use crate::ui::nav;

/// Render a page as its embed plus component rows (primary element, then the
/// nav row sized to the ordinal).
pub fn render_page(page: PageOrdinal) -> (CreateEmbed, Vec<CreateActionRow>) {
    let def = pages::page(page);
    let mut embed = CreateEmbed::new()
        .title(def.title)
        .description(def.description)
        .color(def.color);
    if let Some(url) = def.image {
        embed = embed.image(url);
    }
    let primary = match def.primary {
        Primary::Select(category) => CreateActionRow::SelectMenu(role_select_menu(category)),
        Primary::VerifyButton => CreateActionRow::Buttons(vec![verify_button()]),
    };
    (embed, vec![primary, nav::nav_row(page)])
}

fn role_select_menu(category: RoleCategory) -> CreateSelectMenu {
    let options = category
        .options()
        .iter()
        .map(|o| CreateSelectMenuOption::new(o.label, o.key))
        .collect();
    CreateSelectMenu::new(category.custom_id(), CreateSelectMenuKind::String { options })
        .placeholder(category.placeholder())
}

fn verify_button() -> CreateButton {
    CreateButton::new(ids::VERIFY)
        .label("✅ Verify")
        .style(ButtonStyle::Success)
}
