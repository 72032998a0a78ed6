use super::*;

#[test]
fn escape_and_backdrop_close_by_default() {
    assert!(dismisses(Some("Escape"), false));
    assert!(dismisses(None, false));
}

#[test]
fn other_keys_never_close() {
    assert!(!dismisses(Some("Enter"), false));
    assert!(!dismisses(Some("a"), false));
}

#[test]
fn disabled_backdrop_close_ignores_escape_and_clicks() {
    assert!(!dismisses(Some("Escape"), true));
    assert!(!dismisses(None, true));
}
