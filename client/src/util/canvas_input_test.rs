use super::*;

#[test]
fn removal_and_escape_keys_are_consumed() {
    assert!(should_prevent_default_key("Delete"));
    assert!(should_prevent_default_key("Backspace"));
    assert!(should_prevent_default_key("Escape"));
}

#[test]
fn other_keys_keep_browser_default() {
    assert!(!should_prevent_default_key("Enter"));
    assert!(!should_prevent_default_key("a"));
    assert!(!should_prevent_default_key("Tab"));
    assert!(!should_prevent_default_key(""));
}
