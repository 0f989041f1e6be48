use viewer_overlay::metrics::{fit_to_text, TextMeasure, ICON_SIZE, OVERLAY_HEIGHT};
use viewer_overlay::state::Size;

/// Deterministic stand-in for the platform text engine.
struct FixedWidth {
    per_char: i32,
}

impl TextMeasure for FixedWidth {
    fn measure(&self, text: &str) -> (i32, i32) {
        (self.per_char * text.chars().count() as i32, 30)
    }
}

#[test]
fn window_width_is_icon_cell_plus_text() {
    let measure = FixedWidth { per_char: 18 };

    let fit = fit_to_text(&measure, "1234");

    assert_eq!(fit.current, Size::new(ICON_SIZE + 4 * 18, OVERLAY_HEIGHT));
    assert_eq!(fit.minimum, fit.current);
}

#[test]
fn height_is_fixed_regardless_of_measured_height() {
    struct Tall;
    impl TextMeasure for Tall {
        fn measure(&self, _text: &str) -> (i32, i32) {
            (50, 900)
        }
    }

    let fit = fit_to_text(&Tall, "1");
    assert_eq!(fit.current.height, OVERLAY_HEIGHT);
    assert_eq!(OVERLAY_HEIGHT, ICON_SIZE + 2);
}

#[test]
fn longer_text_widens_and_shorter_narrows() {
    let measure = FixedWidth { per_char: 10 };

    let wide = fit_to_text(&measure, "123456");
    let narrow = fit_to_text(&measure, "99");

    assert!(wide.current.width > narrow.current.width);
    assert_eq!(wide.current.height, narrow.current.height);
}

#[test]
fn fallback_text_shrinks_the_window_again() {
    let measure = FixedWidth { per_char: 12 };

    // A healthy refresh shows a wide count, then a failed one falls back.
    let healthy = fit_to_text(&measure, "48213");
    let fallback = fit_to_text(&measure, "0");

    assert_eq!(healthy.current.width, ICON_SIZE + 5 * 12);
    assert_eq!(fallback.current.width, ICON_SIZE + 12);
    assert!(fallback.current.width < healthy.current.width);
}
