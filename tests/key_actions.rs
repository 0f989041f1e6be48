use viewer_overlay::input::{key_action, KeyAction};

#[test]
fn q_quits() {
    assert_eq!(key_action(0x51), Some(KeyAction::Quit));
}

#[test]
fn t_toggles_pin() {
    assert_eq!(key_action(0x54), Some(KeyAction::TogglePin));
}

#[test]
fn unbound_keys_are_ignored() {
    assert_eq!(key_action(0x41), None); // A
    assert_eq!(key_action(0x1b), None); // Escape
    assert_eq!(key_action(0x70), None); // F1
    assert_eq!(key_action(0x20), None); // Space
}
