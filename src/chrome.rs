//! Window chrome emulation for the borderless overlay.
//!
//! The overlay has no native title bar, so dragging and wheel routing are
//! synthesized here. A pre-dispatch filter watches the raw message stream:
//! primary presses in the client area become caption drags, and wheel
//! messages over another managed window are re-sent to that window instead
//! of being dispatched locally. Everything else passes through untouched.
//!
//! The filter itself is platform-free; all OS effects go through
//! [`WindowServices`], so the routing rules run unchanged under a fake
//! implementation in tests.

use crate::state::Size;

/// Primary mouse button press in a window's client area.
pub const WM_LBUTTONDOWN: u32 = 0x0201;
/// Vertical wheel movement, delivered to the focused window.
pub const WM_MOUSEWHEEL: u32 = 0x020A;
/// Non-client press; with [`HTCAPTION`] it starts an interactive move.
pub const WM_NCLBUTTONDOWN: u32 = 0x00A1;
/// Hit-test code for the title bar.
pub const HTCAPTION: usize = 0x0002;

/// Opaque top-level window identifier used by the chrome layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// One raw input message as seen by the pump, before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpMessage {
    /// Window the message is addressed to.
    pub target: WindowHandle,
    /// Message code, e.g. [`WM_MOUSEWHEEL`].
    pub code: u32,
    pub wparam: usize,
    pub lparam: isize,
}

/// Signed wheel movement from a `WM_MOUSEWHEEL` wparam. One notch is 120.
pub fn wheel_delta(wparam: usize) -> i32 {
    ((wparam >> 16) & 0xffff) as u16 as i16 as i32
}

/// Screen coordinates packed into a mouse message lparam. Each word is
/// sign-extended; monitors left of or above the primary one produce
/// negative coordinates.
pub fn screen_point(lparam: isize) -> (i32, i32) {
    let x = (lparam & 0xffff) as u16 as i16 as i32;
    let y = ((lparam >> 16) & 0xffff) as u16 as i16 as i32;
    (x, y)
}

/// Platform operations the filter needs. The live implementation wraps the
/// OS; tests substitute a recording fake.
pub trait WindowServices {
    /// Top-level window occupying `point` in screen coordinates, or
    /// [`WindowHandle::NULL`] when nothing is there.
    fn window_at(&self, point: (i32, i32)) -> WindowHandle;

    /// Whether `window` belongs to this process's managed set.
    fn is_managed(&self, window: WindowHandle) -> bool;

    /// Re-send `message` to `window` unchanged.
    fn forward(&self, window: WindowHandle, message: &PumpMessage);

    /// Drop any active pointer capture.
    fn release_capture(&self);

    /// Hand `window` to the platform's interactive move, as if its title bar
    /// had been pressed. Returns when the move is finished.
    fn begin_caption_drag(&self, window: WindowHandle);
}

/// Where a pump message lands, classified fresh for every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitClass {
    /// Press in the overlay client area; the whole surface acts as caption.
    Draggable,
    /// Wheel movement over another managed window.
    Forwardable(WindowHandle),
    /// Anything else; normal dispatch applies.
    Normal,
}

/// What the pre-dispatch filter did with one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Message consumed; a caption drag was started.
    DragStarted,
    /// Message consumed; it was re-sent to the contained window.
    Forwarded(WindowHandle),
    /// Not ours; the caller must dispatch it normally.
    PassThrough,
}

/// Pre-dispatch message filter for one overlay window.
pub struct ChromeController<S> {
    overlay: WindowHandle,
    services: S,
}

impl<S: WindowServices> ChromeController<S> {
    pub fn new(overlay: WindowHandle, services: S) -> Self {
        Self { overlay, services }
    }

    pub fn overlay(&self) -> WindowHandle {
        self.overlay
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    /// Classify `message` without acting on it. The window under the cursor
    /// is queried per message; nothing is cached across calls.
    pub fn classify(&self, message: &PumpMessage) -> HitClass {
        match message.code {
            WM_LBUTTONDOWN if message.target == self.overlay => HitClass::Draggable,
            WM_MOUSEWHEEL => {
                let below = self.services.window_at(screen_point(message.lparam));
                if below.is_null() || below == self.overlay || !self.services.is_managed(below) {
                    HitClass::Normal
                } else {
                    HitClass::Forwardable(below)
                }
            }
            _ => HitClass::Normal,
        }
    }

    /// Run the filter over one message. `PassThrough` means the message must
    /// still be dispatched by the caller; the other outcomes consume it.
    pub fn pre_filter(&self, message: &PumpMessage) -> FilterOutcome {
        match self.classify(message) {
            HitClass::Draggable => {
                // Capture would swallow the synthetic drag, so drop it first.
                self.services.release_capture();
                self.services.begin_caption_drag(self.overlay);
                FilterOutcome::DragStarted
            }
            HitClass::Forwardable(below) => {
                self.services.forward(below, message);
                FilterOutcome::Forwarded(below)
            }
            HitClass::Normal => FilterOutcome::PassThrough,
        }
    }
}

/// A window rectangle as reported in a pending bounds change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Enforce the text-derived size on a pending bounds change: position is
/// honored, extent is replaced unconditionally. Keeps drag moves working
/// while making programmatic resizes from outside ineffective.
pub fn override_bounds(pending: Bounds, enforced: Size) -> Bounds {
    Bounds {
        x: pending.x,
        y: pending.y,
        width: enforced.width,
        height: enforced.height,
    }
}
