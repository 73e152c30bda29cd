use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", " ", "Esc", "escape", "ArrowLeft", "Tab"] {
        assert!(!is_dismiss_key(key), "{key:?}");
    }
}
