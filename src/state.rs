/// Lower bound for the overlay opacity. Below this the window becomes too
/// faint to find again with the mouse.
pub const OPACITY_MIN: f64 = 0.35;
/// Upper bound for the overlay opacity (fully opaque).
pub const OPACITY_MAX: f64 = 1.0;

/// Integer pixel dimensions of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Authoritative UI state of the overlay. Owned by the window loop; all
/// mutation happens there.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// Text currently shown by the counter label.
    pub display_text: String,
    /// Window opacity in `[OPACITY_MIN, OPACITY_MAX]`.
    pub opacity: f64,
    /// Whether the window is kept in the always-on-top band.
    pub pinned: bool,
    /// Enforced window size; bounds changes are clamped to this.
    pub minimum_size: Size,
    /// Actual window size. Height always equals `minimum_size.height`.
    pub current_size: Size,
    /// Cleared on quit so late refresh completions are discarded.
    pub running: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            display_text: "0".to_string(),
            opacity: 0.75,
            pinned: true,
            minimum_size: Size::new(100, 42),
            current_size: Size::new(100, 42),
            running: true,
        }
    }
}
