use std::cell::{Cell, RefCell};

use viewer_overlay::chrome::{
    ChromeController, FilterOutcome, HitClass, PumpMessage, WindowHandle, WindowServices,
    HTCAPTION, WM_LBUTTONDOWN, WM_MOUSEWHEEL, WM_NCLBUTTONDOWN,
};

const OVERLAY: WindowHandle = WindowHandle(11);
const OTHER: WindowHandle = WindowHandle(42);
const FOREIGN: WindowHandle = WindowHandle(97);

#[derive(Debug, PartialEq, Eq)]
enum Call {
    ReleaseCapture,
    BeginDrag(WindowHandle),
    Forward(WindowHandle, u32, usize),
}

struct FakeServices {
    under_cursor: Cell<WindowHandle>,
    managed: Vec<WindowHandle>,
    calls: RefCell<Vec<Call>>,
}

impl FakeServices {
    fn new(under_cursor: WindowHandle, managed: &[WindowHandle]) -> Self {
        Self {
            under_cursor: Cell::new(under_cursor),
            managed: managed.to_vec(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl WindowServices for FakeServices {
    fn window_at(&self, _point: (i32, i32)) -> WindowHandle {
        self.under_cursor.get()
    }

    fn is_managed(&self, window: WindowHandle) -> bool {
        self.managed.contains(&window)
    }

    fn forward(&self, window: WindowHandle, message: &PumpMessage) {
        self.calls
            .borrow_mut()
            .push(Call::Forward(window, message.code, message.wparam));
    }

    fn release_capture(&self) {
        self.calls.borrow_mut().push(Call::ReleaseCapture);
    }

    fn begin_caption_drag(&self, window: WindowHandle) {
        self.calls.borrow_mut().push(Call::BeginDrag(window));
    }
}

fn pack_point(x: i32, y: i32) -> isize {
    ((y as isize & 0xffff) << 16) | (x as isize & 0xffff)
}

fn press(target: WindowHandle, wparam: usize) -> PumpMessage {
    PumpMessage {
        target,
        code: WM_LBUTTONDOWN,
        wparam,
        lparam: pack_point(10, 20),
    }
}

fn wheel(target: WindowHandle, at: (i32, i32), delta: i32) -> PumpMessage {
    PumpMessage {
        target,
        code: WM_MOUSEWHEEL,
        wparam: ((delta as u16) as usize) << 16,
        lparam: pack_point(at.0, at.1),
    }
}

#[test]
fn press_on_overlay_releases_capture_then_drags() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OVERLAY, &[OVERLAY]));

    let outcome = filter.pre_filter(&press(OVERLAY, 0));

    assert_eq!(outcome, FilterOutcome::DragStarted);
    assert_eq!(
        *filter.services().calls.borrow(),
        vec![Call::ReleaseCapture, Call::BeginDrag(OVERLAY)]
    );
}

#[test]
fn press_is_a_caption_hit_regardless_of_modifier_state() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OVERLAY, &[OVERLAY]));

    // 0x0004 is the shift-down modifier bit in the wparam.
    assert_eq!(filter.classify(&press(OVERLAY, 0x0004)), HitClass::Draggable);
    assert_eq!(filter.classify(&press(OVERLAY, 0)), HitClass::Draggable);
}

#[test]
fn press_on_another_window_passes_through() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OVERLAY, &[OVERLAY]));

    let outcome = filter.pre_filter(&press(OTHER, 0));

    assert_eq!(outcome, FilterOutcome::PassThrough);
    assert!(filter.services().calls.borrow().is_empty());
}

#[test]
fn wheel_over_other_managed_window_is_forwarded_unchanged() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OTHER, &[OVERLAY, OTHER]));

    let message = wheel(OVERLAY, (200, 300), -120);
    let outcome = filter.pre_filter(&message);

    assert_eq!(outcome, FilterOutcome::Forwarded(OTHER));
    assert_eq!(
        *filter.services().calls.borrow(),
        vec![Call::Forward(OTHER, WM_MOUSEWHEEL, message.wparam)]
    );
}

#[test]
fn wheel_over_empty_desktop_passes_through() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(WindowHandle::NULL, &[OVERLAY]));

    let outcome = filter.pre_filter(&wheel(OVERLAY, (5, 5), 120));

    assert_eq!(outcome, FilterOutcome::PassThrough);
    assert!(filter.services().calls.borrow().is_empty());
}

#[test]
fn wheel_over_overlay_itself_passes_through() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OVERLAY, &[OVERLAY]));

    let outcome = filter.pre_filter(&wheel(OVERLAY, (5, 5), 120));

    assert_eq!(outcome, FilterOutcome::PassThrough);
}

#[test]
fn wheel_over_foreign_window_passes_through() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(FOREIGN, &[OVERLAY, OTHER]));

    let outcome = filter.pre_filter(&wheel(OVERLAY, (5, 5), 120));

    assert_eq!(outcome, FilterOutcome::PassThrough);
    assert!(filter.services().calls.borrow().is_empty());
}

#[test]
fn wheel_target_is_requeried_per_message() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OTHER, &[OVERLAY, OTHER]));

    assert_eq!(
        filter.pre_filter(&wheel(OVERLAY, (5, 5), 120)),
        FilterOutcome::Forwarded(OTHER)
    );

    filter.services().under_cursor.set(WindowHandle::NULL);
    assert_eq!(
        filter.pre_filter(&wheel(OVERLAY, (5, 5), 120)),
        FilterOutcome::PassThrough
    );
}

#[test]
fn unrelated_messages_pass_through_untouched() {
    let filter = ChromeController::new(OVERLAY, FakeServices::new(OVERLAY, &[OVERLAY]));
    let paint = PumpMessage {
        target: OVERLAY,
        code: 0x000f,
        wparam: 0,
        lparam: 0,
    };

    assert_eq!(filter.pre_filter(&paint), FilterOutcome::PassThrough);
    assert!(filter.services().calls.borrow().is_empty());
}

#[test]
fn caption_drag_contract_uses_nc_button_down() {
    assert_eq!(WM_NCLBUTTONDOWN, 0x00a1);
    assert_eq!(HTCAPTION, 0x0002);
}
