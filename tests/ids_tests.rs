use gatekeeper_bot::interactions::ids;
use gatekeeper_bot::onboarding::pages::NavAction;

#[test]
fn nav_ids_parse() {
    assert_eq!(ids::nav_action(ids::NEXT_PAGE), Some(NavAction::Next));
    assert_eq!(ids::nav_action(ids::PREV_PAGE), Some(NavAction::Previous));
}

#[test]
fn non_nav_ids_do_not_parse() {
    assert_eq!(ids::nav_action(ids::VERIFY), None);
    assert_eq!(ids::nav_action(ids::LANGUAGE_SELECT), None);
    assert_eq!(ids::nav_action("next_page_2"), None);
    assert_eq!(ids::nav_action(""), None);
}
