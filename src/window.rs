//! Live overlay window and its message loop.
//!
//! Everything here is a thin shell: sizing, routing and refresh decisions are
//! made by the platform-free modules and this file only applies them through
//! Win32. The window is a layered `WS_POPUP` surface painted from an
//! off-screen bitmap; the pump runs the chrome filter over every queued
//! message before dispatch.

#[cfg(windows)]
mod platform {
    use std::collections::HashMap;
    use std::mem;
    use std::ptr;
    use std::sync::mpsc::{channel, RecvTimeoutError};
    use std::sync::{Mutex, Once};
    use std::time::Duration;

    use anyhow::{anyhow, ensure, Result};
    use once_cell::sync::Lazy;
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{
        COLORREF, HANDLE, HWND, LPARAM, LRESULT, POINT, RECT, SIZE, WPARAM,
    };
    use windows::Win32::Graphics::Gdi::{
        BeginPaint, BitBlt, CreateCompatibleDC, CreateDIBSection, CreateFontIndirectW,
        CreateSolidBrush, DeleteDC, DeleteObject, DrawTextW, EndPaint, FillRect,
        GetTextExtentPoint32W, InvalidateRect, SelectObject, SetBkMode, SetTextColor,
        BITMAPINFO, BITMAPINFOHEADER, BI_RGB, CLEARTYPE_QUALITY, DEFAULT_CHARSET,
        DIB_RGB_COLORS, DT_NOPREFIX, DT_RIGHT, DT_SINGLELINE, DT_VCENTER, HBITMAP, HBRUSH,
        HDC, HFONT, HGDIOBJ, LOGFONTW, PAINTSTRUCT, SRCCOPY, TRANSPARENT,
    };
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetAncestor,
        GetWindowLongPtrW, PeekMessageW, PostQuitMessage, RegisterClassW,
        SendMessageW, SetLayeredWindowAttributes, SetWindowLongPtrW, SetWindowPos,
        TranslateMessage, WindowFromPoint, CW_USEDEFAULT, GA_ROOT, GWLP_USERDATA,
        HWND_NOTOPMOST, HWND_TOPMOST, LWA_ALPHA, MSG, PM_REMOVE, SWP_NOACTIVATE,
        SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SWP_SHOWWINDOW, WINDOWPOS, WINDOW_EX_STYLE,
        WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_PAINT, WM_QUIT, WM_WINDOWPOSCHANGING,
        WNDCLASSW, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
    };

    use crate::chrome::{
        self, wheel_delta, Bounds, ChromeController, FilterOutcome, PumpMessage, WindowHandle,
        WindowServices,
    };
    use crate::config::Config;
    use crate::fetch::HelixSource;
    use crate::icon::{self, IconImage};
    use crate::input::{adjust_opacity, key_action, KeyAction};
    use crate::metrics::{fit_to_text, TextMeasure, FONT_FAMILY};
    use crate::refresh::{RefreshScheduler, UiEvent, REFRESH_INTERVAL};
    use crate::state::{OverlayState, Size};

    /// Window background behind icon and label.
    const BACKGROUND: (u8, u8, u8) = (15, 14, 17);
    /// Label foreground.
    const FOREGROUND: (u8, u8, u8) = (100, 65, 164);
    /// Label height in pixels. The layout is fixed at 96 dpi, so this is the
    /// 28 pt face rounded to whole pixels.
    const FONT_HEIGHT_PX: i32 = 37;
    /// Icon placement inside the left cell.
    const ICON_ORIGIN: (i32, i32) = (4, 6);

    /// Enforced client sizes keyed by window handle. Doubles as the managed
    /// set: a window is ours exactly when it has an entry here.
    static ENFORCED_SIZES: Lazy<Mutex<HashMap<isize, Size>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    pub(super) fn compose_overlay_ex_style() -> WINDOW_EX_STYLE {
        // No WS_EX_NOACTIVATE: the overlay takes focus so key bindings and
        // local wheel input keep working. WS_EX_TOOLWINDOW keeps it off the
        // taskbar.
        WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW
    }

    pub(super) fn colorref((r, g, b): (u8, u8, u8)) -> COLORREF {
        COLORREF((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    /// Layered-window alpha byte for an opacity fraction.
    pub(super) fn alpha_from_opacity(opacity: f64) -> u8 {
        (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    fn widestring(value: &str) -> Vec<u16> {
        use std::os::windows::ffi::OsStrExt;
        std::ffi::OsStr::new(value)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect()
    }

    fn hwnd_from(handle: WindowHandle) -> HWND {
        HWND(handle.0 as *mut core::ffi::c_void)
    }

    fn enforced_size(hwnd: HWND) -> Option<Size> {
        ENFORCED_SIZES
            .lock()
            .ok()
            .and_then(|sizes| sizes.get(&(hwnd.0 as isize)).copied())
    }

    /// Live [`WindowServices`] implementation backed by the OS.
    pub(super) struct Win32Services;

    impl WindowServices for Win32Services {
        fn window_at(&self, point: (i32, i32)) -> WindowHandle {
            let hit = unsafe {
                WindowFromPoint(POINT {
                    x: point.0,
                    y: point.1,
                })
            };
            if hit.0.is_null() {
                return WindowHandle::NULL;
            }
            // Wheel routing cares about top-level windows, not whichever
            // child happens to sit under the cursor.
            let top = unsafe { GetAncestor(hit, GA_ROOT) };
            if top.0.is_null() {
                WindowHandle(hit.0 as isize)
            } else {
                WindowHandle(top.0 as isize)
            }
        }

        fn is_managed(&self, window: WindowHandle) -> bool {
            ENFORCED_SIZES
                .lock()
                .map(|sizes| sizes.contains_key(&window.0))
                .unwrap_or(false)
        }

        fn forward(&self, window: WindowHandle, message: &PumpMessage) {
            unsafe {
                SendMessageW(
                    hwnd_from(window),
                    message.code,
                    WPARAM(message.wparam),
                    LPARAM(message.lparam),
                );
            }
        }

        fn release_capture(&self) {
            unsafe {
                let _ = ReleaseCapture();
            }
        }

        fn begin_caption_drag(&self, window: WindowHandle) {
            // Synchronous by design: the interactive move runs inside this
            // call, exactly as if the title bar had been pressed.
            unsafe {
                SendMessageW(
                    hwnd_from(window),
                    chrome::WM_NCLBUTTONDOWN,
                    WPARAM(chrome::HTCAPTION),
                    LPARAM(0),
                );
            }
        }
    }

    unsafe extern "system" fn overlay_wndproc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match msg {
            WM_ERASEBKGND => LRESULT(1),
            WM_PAINT => {
                let mut ps = PAINTSTRUCT::default();
                let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
                if !hdc.0.is_null() {
                    let mem_dc = HDC(unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut _);
                    if !mem_dc.0.is_null() {
                        let width = ps.rcPaint.right - ps.rcPaint.left;
                        let height = ps.rcPaint.bottom - ps.rcPaint.top;
                        let _ = unsafe {
                            BitBlt(
                                hdc,
                                ps.rcPaint.left,
                                ps.rcPaint.top,
                                width,
                                height,
                                mem_dc,
                                ps.rcPaint.left,
                                ps.rcPaint.top,
                                SRCCOPY,
                            )
                        };
                    }
                }
                unsafe {
                    let _ = EndPaint(hwnd, &ps);
                }
                LRESULT(0)
            }
            WM_WINDOWPOSCHANGING => {
                let pos = lparam.0 as *mut WINDOWPOS;
                if !pos.is_null() {
                    let pos = unsafe { &mut *pos };
                    if pos.flags.0 & SWP_NOSIZE.0 == 0 {
                        if let Some(enforced) = enforced_size(hwnd) {
                            let fixed = chrome::override_bounds(
                                Bounds {
                                    x: pos.x,
                                    y: pos.y,
                                    width: pos.cx,
                                    height: pos.cy,
                                },
                                enforced,
                            );
                            pos.cx = fixed.width;
                            pos.cy = fixed.height;
                        }
                    }
                }
                LRESULT(0)
            }
            WM_DESTROY => {
                if let Ok(mut sizes) = ENFORCED_SIZES.lock() {
                    sizes.remove(&(hwnd.0 as isize));
                }
                unsafe { PostQuitMessage(0) };
                LRESULT(0)
            }
            _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        }
    }

    fn create_dib(dc: HDC, width: i32, height: i32) -> Result<(HBITMAP, *mut u8)> {
        let mut bmi = BITMAPINFO::default();
        bmi.bmiHeader = BITMAPINFOHEADER {
            biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        };

        let mut bits: *mut core::ffi::c_void = ptr::null_mut();
        let dib = unsafe {
            CreateDIBSection(dc, &bmi, DIB_RGB_COLORS, &mut bits, HANDLE::default(), 0)
        }
        .map_err(|err| anyhow!("create backing bitmap: {err}"))?;
        ensure!(!bits.is_null(), "backing bitmap has no pixel storage");
        Ok((dib, bits as *mut u8))
    }

    fn create_label_font() -> HFONT {
        let mut lf = LOGFONTW {
            lfHeight: -FONT_HEIGHT_PX,
            lfWeight: 400,
            lfCharSet: DEFAULT_CHARSET,
            lfQuality: CLEARTYPE_QUALITY,
            ..Default::default()
        };
        for (i, unit) in FONT_FAMILY.encode_utf16().take(31).enumerate() {
            lf.lfFaceName[i] = unit;
        }
        // Falls back to a stock face when the family is not installed.
        unsafe { CreateFontIndirectW(&lf) }
    }

    /// Measures through the backing DC, which has the label font selected.
    struct GdiTextMeasure {
        hdc: HDC,
    }

    impl TextMeasure for GdiTextMeasure {
        fn measure(&self, text: &str) -> (i32, i32) {
            if text.is_empty() {
                return (0, FONT_HEIGHT_PX);
            }
            let wide: Vec<u16> = text.encode_utf16().collect();
            let mut size = SIZE::default();
            let _ = unsafe { GetTextExtentPoint32W(self.hdc, &wide, &mut size) };
            (size.cx, size.cy)
        }
    }

    struct OverlayWindow {
        hwnd: HWND,
        mem_dc: HDC,
        dib: HBITMAP,
        old_bitmap: HGDIOBJ,
        old_font: HGDIOBJ,
        font: HFONT,
        background: HBRUSH,
        icon_dc: HDC,
        icon_dib: HBITMAP,
        icon_old: HGDIOBJ,
        icon_size: (i32, i32),
        state: OverlayState,
    }

    impl OverlayWindow {
        fn create(icon: &IconImage) -> Result<Self> {
            static REGISTER_CLASS: Once = Once::new();
            let class_name = widestring("ViewerOverlayWindow");
            let hinstance = unsafe { GetModuleHandleW(PCWSTR::null()) }
                .map_err(|err| anyhow!("resolve module handle: {err}"))?;

            REGISTER_CLASS.call_once(|| unsafe {
                let wc = WNDCLASSW {
                    hInstance: hinstance.into(),
                    lpszClassName: PCWSTR(class_name.as_ptr()),
                    lpfnWndProc: Some(overlay_wndproc),
                    ..Default::default()
                };
                let _ = RegisterClassW(&wc);
            });

            let state = OverlayState::default();
            let hwnd = unsafe {
                CreateWindowExW(
                    compose_overlay_ex_style(),
                    PCWSTR(class_name.as_ptr()),
                    PCWSTR::null(),
                    WS_POPUP,
                    CW_USEDEFAULT,
                    CW_USEDEFAULT,
                    state.minimum_size.width,
                    state.minimum_size.height,
                    None,
                    None,
                    hinstance,
                    None,
                )
            }
            .map_err(|err| anyhow!("create overlay window: {err}"))?;

            let mem_dc = unsafe { CreateCompatibleDC(HDC::default()) };
            if mem_dc.0.is_null() {
                unsafe {
                    let _ = DestroyWindow(hwnd);
                }
                return Err(anyhow!("create backing device context"));
            }

            let (dib, _) =
                match create_dib(mem_dc, state.minimum_size.width, state.minimum_size.height) {
                    Ok(created) => created,
                    Err(err) => {
                        unsafe {
                            let _ = DeleteDC(mem_dc);
                            let _ = DestroyWindow(hwnd);
                        }
                        return Err(err);
                    }
                };
            let old_bitmap = unsafe { SelectObject(mem_dc, dib) };

            let font = create_label_font();
            let old_font = unsafe { SelectObject(mem_dc, font) };
            let background = unsafe { CreateSolidBrush(colorref(BACKGROUND)) };

            let icon_dc = unsafe { CreateCompatibleDC(HDC::default()) };
            let mut window = Self {
                hwnd,
                mem_dc,
                dib,
                old_bitmap,
                old_font,
                font,
                background,
                icon_dc,
                icon_dib: HBITMAP::default(),
                icon_old: HGDIOBJ::default(),
                icon_size: (icon.width as i32, icon.height as i32),
                state,
            };

            if icon_dc.0.is_null() {
                window.shutdown();
                return Err(anyhow!("create icon device context"));
            }
            let (icon_dib, icon_bits) =
                match create_dib(icon_dc, icon.width as i32, icon.height as i32) {
                    Ok(created) => created,
                    Err(err) => {
                        window.shutdown();
                        return Err(err);
                    }
                };
            let baked = icon::bake_bgra_over(icon, BACKGROUND);
            unsafe {
                ptr::copy_nonoverlapping(baked.as_ptr(), icon_bits, baked.len());
            }
            window.icon_old = unsafe { SelectObject(icon_dc, icon_dib) };
            window.icon_dib = icon_dib;

            unsafe {
                let _ = SetWindowLongPtrW(hwnd, GWLP_USERDATA, mem_dc.0 as isize);
            }
            if let Ok(mut sizes) = ENFORCED_SIZES.lock() {
                sizes.insert(hwnd.0 as isize, window.state.minimum_size);
            }

            Ok(window)
        }

        fn handle(&self) -> WindowHandle {
            WindowHandle(self.hwnd.0 as isize)
        }

        /// Adopt new label text: remeasure, enforce the fitted size, repaint.
        fn apply_text(&mut self, text: &str) {
            if self.state.display_text != text {
                self.state.display_text = text.to_string();
            }
            let fit = fit_to_text(&GdiTextMeasure { hdc: self.mem_dc }, text);
            self.state.minimum_size = fit.minimum;
            self.state.current_size = fit.current;

            // The enforced size must change before the move, otherwise the
            // pending bounds change is clamped back to the old text's fit.
            if let Ok(mut sizes) = ENFORCED_SIZES.lock() {
                sizes.insert(self.hwnd.0 as isize, fit.minimum);
            }
            unsafe {
                let _ = SetWindowPos(
                    self.hwnd,
                    HWND::default(),
                    0,
                    0,
                    fit.current.width,
                    fit.current.height,
                    SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
                );
            }
            if let Err(err) = self.resize_backing(fit.current) {
                tracing::warn!(?err, "backing bitmap resize failed; keeping old surface");
            }
            self.render();
        }

        fn resize_backing(&mut self, size: Size) -> Result<()> {
            let (dib, _) = create_dib(self.mem_dc, size.width, size.height)?;
            unsafe {
                let _ = SelectObject(self.mem_dc, dib);
                if !self.dib.0.is_null() {
                    let _ = DeleteObject(self.dib);
                }
            }
            self.dib = dib;
            Ok(())
        }

        /// Redraw background, icon and right-aligned counter text into the
        /// backing bitmap, then schedule a paint.
        fn render(&self) {
            let width = self.state.current_size.width;
            let height = self.state.current_size.height;
            let mut rect = RECT {
                left: 0,
                top: 0,
                right: width,
                bottom: height,
            };
            unsafe {
                FillRect(self.mem_dc, &rect, self.background);
                let _ = BitBlt(
                    self.mem_dc,
                    ICON_ORIGIN.0,
                    ICON_ORIGIN.1,
                    self.icon_size.0,
                    self.icon_size.1,
                    self.icon_dc,
                    0,
                    0,
                    SRCCOPY,
                );
                SetBkMode(self.mem_dc, TRANSPARENT);
                SetTextColor(self.mem_dc, colorref(FOREGROUND));
                let mut wide: Vec<u16> = self.state.display_text.encode_utf16().collect();
                DrawTextW(
                    self.mem_dc,
                    &mut wide,
                    &mut rect,
                    DT_RIGHT | DT_VCENTER | DT_SINGLELINE | DT_NOPREFIX,
                );
                let _ = InvalidateRect(self.hwnd, None, false);
            }
        }

        fn apply_opacity(&self) {
            unsafe {
                let _ = SetLayeredWindowAttributes(
                    self.hwnd,
                    COLORREF(0),
                    alpha_from_opacity(self.state.opacity),
                    LWA_ALPHA,
                );
            }
        }

        fn apply_pin(&self) {
            let band = if self.state.pinned {
                HWND_TOPMOST
            } else {
                HWND_NOTOPMOST
            };
            unsafe {
                let _ = SetWindowPos(
                    self.hwnd,
                    band,
                    0,
                    0,
                    0,
                    0,
                    SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
                );
            }
        }

        fn show(&self) {
            unsafe {
                let _ = SetWindowPos(
                    self.hwnd,
                    HWND_TOPMOST,
                    0,
                    0,
                    0,
                    0,
                    SWP_NOMOVE | SWP_NOSIZE | SWP_SHOWWINDOW,
                );
            }
        }

        /// Drain the thread queue, running the chrome filter over each
        /// message before it reaches dispatch. Bound keys and local wheel
        /// movements are consumed here; everything else is dispatched.
        fn pump<S: WindowServices>(&mut self, filter: &ChromeController<S>) -> Vec<KeyAction> {
            let mut actions = Vec::new();
            unsafe {
                let mut msg = MSG::default();
                while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).into() {
                    if msg.message == WM_QUIT {
                        actions.push(KeyAction::Quit);
                        continue;
                    }

                    let message = PumpMessage {
                        target: WindowHandle(msg.hwnd.0 as isize),
                        code: msg.message,
                        wparam: msg.wParam.0,
                        lparam: msg.lParam.0,
                    };
                    match filter.pre_filter(&message) {
                        FilterOutcome::DragStarted | FilterOutcome::Forwarded(_) => continue,
                        FilterOutcome::PassThrough => {}
                    }

                    if msg.message == WM_KEYDOWN {
                        if let Some(action) = key_action(msg.wParam.0 as u32) {
                            actions.push(action);
                            continue;
                        }
                    } else if msg.message == chrome::WM_MOUSEWHEEL {
                        // Not forwardable, so the wheel adjusts our opacity.
                        let next = adjust_opacity(self.state.opacity, wheel_delta(msg.wParam.0));
                        if next != self.state.opacity {
                            self.state.opacity = next;
                            self.apply_opacity();
                        }
                        continue;
                    }

                    let _ = TranslateMessage(&msg);
                    let _ = DispatchMessageW(&msg);
                }
            }
            actions
        }

        fn shutdown(&mut self) {
            unsafe {
                if !self.mem_dc.0.is_null() {
                    let _ = SelectObject(self.mem_dc, self.old_bitmap);
                    let _ = SelectObject(self.mem_dc, self.old_font);
                }
                if !self.dib.0.is_null() {
                    let _ = DeleteObject(self.dib);
                    self.dib = HBITMAP::default();
                }
                if !self.mem_dc.0.is_null() {
                    let _ = DeleteDC(self.mem_dc);
                    self.mem_dc = HDC::default();
                }
                if !self.icon_dc.0.is_null() {
                    let _ = SelectObject(self.icon_dc, self.icon_old);
                    let _ = DeleteDC(self.icon_dc);
                    self.icon_dc = HDC::default();
                }
                if !self.icon_dib.0.is_null() {
                    let _ = DeleteObject(self.icon_dib);
                    self.icon_dib = HBITMAP::default();
                }
                if !self.font.0.is_null() {
                    let _ = DeleteObject(self.font);
                    self.font = HFONT::default();
                }
                if !self.background.0.is_null() {
                    let _ = DeleteObject(self.background);
                    self.background = HBRUSH::default();
                }
                if !self.hwnd.0.is_null() {
                    if let Ok(mut sizes) = ENFORCED_SIZES.lock() {
                        sizes.remove(&(self.hwnd.0 as isize));
                    }
                    let _ = DestroyWindow(self.hwnd);
                    self.hwnd = HWND::default();
                }
            }
        }
    }

    impl Drop for OverlayWindow {
        fn drop(&mut self) {
            self.shutdown();
        }
    }

    /// Create the overlay, start the refresh scheduler and run the message
    /// loop until quit. This is the only place visible window properties are
    /// mutated; the scheduler and filter only feed decisions into it.
    pub fn run(config: &Config) -> Result<()> {
        let icon = icon::decode_icon()?;
        let mut window = OverlayWindow::create(&icon)?;
        window.apply_text("0");
        window.apply_opacity();
        window.show();

        let filter = ChromeController::new(window.handle(), Win32Services);
        let (events_tx, events_rx) = channel::<UiEvent>();
        let source = HelixSource::new(config)?;
        let scheduler = RefreshScheduler::start(source, events_tx, REFRESH_INTERVAL)?;
        tracing::info!(channel = %config.channel, "overlay running");

        loop {
            for action in window.pump(&filter) {
                match action {
                    KeyAction::Quit => {
                        tracing::info!("quit requested");
                        scheduler.stop();
                        window.state.running = false;
                    }
                    KeyAction::TogglePin => {
                        window.state.pinned = !window.state.pinned;
                        tracing::debug!(pinned = window.state.pinned, "pin toggled");
                        window.apply_pin();
                    }
                }
            }
            if !window.state.running {
                break;
            }

            match events_rx.recv_timeout(Duration::from_millis(16)) {
                Ok(UiEvent::CounterText(text)) => window.apply_text(&text),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        scheduler.stop();
        window.shutdown();
        Ok(())
    }

    #[cfg(test)]
    mod windows_tests {
        use super::{alpha_from_opacity, colorref, compose_overlay_ex_style};
        use windows::Win32::UI::WindowsAndMessaging::{
            WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT,
        };

        #[test]
        fn style_flags_layered_topmost_no_taskbar_but_focusable() {
            let style = compose_overlay_ex_style();
            assert_ne!(style.0 & WS_EX_LAYERED.0, 0);
            assert_ne!(style.0 & WS_EX_TOPMOST.0, 0);
            assert_ne!(style.0 & WS_EX_TOOLWINDOW.0, 0);
            assert_eq!(style.0 & WS_EX_NOACTIVATE.0, 0);
            assert_eq!(style.0 & WS_EX_TRANSPARENT.0, 0);
        }

        #[test]
        fn opacity_maps_to_alpha_byte() {
            assert_eq!(alpha_from_opacity(1.0), 255);
            assert_eq!(alpha_from_opacity(0.75), 191);
            assert_eq!(alpha_from_opacity(0.35), 89);
        }

        #[test]
        fn colorref_is_bgr_packed() {
            assert_eq!(colorref((100, 65, 164)).0, 0x00a4_4164);
        }
    }
}

#[cfg(windows)]
pub use platform::run;

/// Builds everywhere so the platform-free core stays testable, but the live
/// window itself only exists on Windows.
#[cfg(not(windows))]
pub fn run(_config: &crate::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("the overlay window is only implemented for Windows")
}
