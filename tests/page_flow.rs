//! Tests for the fixed page sequence and ordinal clamping.

use gatekeeper_bot::onboarding::pages::{self, NavAction, PAGE_COUNT, PageOrdinal, Primary};
use gatekeeper_bot::onboarding::roles::RoleCategory;

#[test]
fn ordinal_construction_enforces_bounds() {
    assert!(PageOrdinal::new(0).is_none());
    assert!(PageOrdinal::new(PAGE_COUNT + 1).is_none());
    assert_eq!(PageOrdinal::new(1), Some(PageOrdinal::FIRST));
    assert_eq!(PageOrdinal::new(PAGE_COUNT), Some(PageOrdinal::LAST));
}

#[test]
fn next_saturates_at_last_page() {
    assert_eq!(PageOrdinal::LAST.next(), PageOrdinal::LAST);
}

#[test]
fn previous_saturates_at_first_page() {
    assert_eq!(PageOrdinal::FIRST.prev(), PageOrdinal::FIRST);
}

#[test]
fn mixed_sequences_stay_in_bounds() {
    use NavAction::{Next, Previous};
    // Overshoots both ends on purpose.
    let actions = [
        Next, Next, Next, Next, Next, Next, Previous, Previous, Previous, Previous, Previous,
        Next, Previous, Next, Next,
    ];
    let mut page = PageOrdinal::FIRST;
    for action in actions {
        page = page.apply(action);
        assert!((1..=PAGE_COUNT).contains(&page.get()));
    }
}

#[test]
fn primary_components_match_the_flow() {
    let expected = [
        Primary::Select(RoleCategory::Language),
        Primary::VerifyButton,
        Primary::Select(RoleCategory::Class),
        Primary::Select(RoleCategory::Kingdom),
    ];
    for (i, want) in expected.iter().enumerate() {
        let ordinal = PageOrdinal::new(i as u8 + 1).unwrap();
        assert_eq!(pages::page(ordinal).primary, *want, "page {}", i + 1);
    }
}

#[test]
fn page_titles_match_the_flow() {
    let titles: Vec<&str> = (1..=PAGE_COUNT)
        .map(|n| pages::page(PageOrdinal::new(n).unwrap()).title)
        .collect();
    assert_eq!(
        titles,
        [
            "🌍 Welcome to the Server!",
            "✅ Verification",
            "⚔️ Choose Your Class",
            "🏰 Choose Your Kingdom",
        ]
    );
}
