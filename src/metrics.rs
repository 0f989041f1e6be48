use crate::state::Size;

/// Side length of the square icon cell at the left edge of the window.
pub const ICON_SIZE: i32 = 40;
/// Fixed window height: the icon cell plus a one pixel border top and bottom.
pub const OVERLAY_HEIGHT: i32 = ICON_SIZE + 2;

/// Typeface used for the counter label.
pub const FONT_FAMILY: &str = "Iosevka";
/// Label size in typographic points.
pub const FONT_POINT_SIZE: f32 = 28.0;

/// Measures rendered text in the overlay font. The live implementation asks
/// the platform text engine; tests substitute a fixed-width fake.
pub trait TextMeasure {
    /// Pixel extents of `text` on a single line. Must not fail.
    fn measure(&self, text: &str) -> (i32, i32);
}

/// Window dimensions derived from a measured label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFit {
    pub minimum: Size,
    pub current: Size,
}

/// Compute the window size for `text`: measured text width plus the icon
/// cell, at the fixed overlay height. Minimum and current size move together
/// so the enforced bounds always match what is on screen.
pub fn fit_to_text<M: TextMeasure + ?Sized>(measure: &M, text: &str) -> WindowFit {
    let (text_width, _) = measure.measure(text);
    let size = Size::new(ICON_SIZE + text_width, OVERLAY_HEIGHT);
    WindowFit {
        minimum: size,
        current: size,
    }
}
