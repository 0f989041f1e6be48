use crate::state::{OPACITY_MAX, OPACITY_MIN};

/// Opacity change applied per wheel notch over the overlay itself.
pub const OPACITY_STEP: f64 = 0.05;

const VK_Q: u32 = 0x51;
const VK_T: u32 = 0x54;

/// Action bound to a key press on the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Stop refreshing and close the window.
    Quit,
    /// Toggle membership of the always-on-top band.
    TogglePin,
}

/// Map a virtual-key code to its bound action. Unbound keys map to `None`
/// and are left to normal key processing.
pub fn key_action(virtual_key: u32) -> Option<KeyAction> {
    match virtual_key {
        VK_Q => Some(KeyAction::Quit),
        VK_T => Some(KeyAction::TogglePin),
        _ => None,
    }
}

/// New opacity after a local wheel movement of `delta`. Positive deltas step
/// up, negative step down, zero leaves the value unchanged. The result is
/// clamped to `[OPACITY_MIN, OPACITY_MAX]`.
pub fn adjust_opacity(current: f64, delta: i32) -> f64 {
    if delta > 0 {
        (current + OPACITY_STEP).min(OPACITY_MAX)
    } else if delta < 0 {
        (current - OPACITY_STEP).max(OPACITY_MIN)
    } else {
        current
    }
}
