use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GCLP_HICONSM, GWL_EXSTYLE, GWL_STYLE, GetClassLongPtrW, GetDesktopWindow,
    GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW, HICON, ICON_SMALL, IDI_APPLICATION,
    IsWindow, IsWindowVisible, LoadIconW, SW_HIDE, SW_SHOW, SendMessageW, SetForegroundWindow,
    ShowWindow, WM_GETICON, WS_CAPTION, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_OVERLAPPEDWINDOW,
    WS_POPUP,
};
use windows::core::w;

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to the OS.
/// This struct holds that handle and queries the OS lazily for metadata.
/// The handle is a weak reference: the window can disappear at any time,
/// so every query tolerates a dead handle.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This allows callers to construct a `Window` without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the raw handle value.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns whether the handle still refers to a live window.
    pub fn is_alive(&self) -> bool {
        // SAFETY: IsWindow is a simple query that tolerates stale handles.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    /// Returns whether the window is currently visible.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Hides the window without destroying it.
    pub fn hide(&self) {
        // SAFETY: ShowWindow is safe to call with any handle value.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }

    /// Shows a previously hidden window.
    pub fn show(&self) {
        // SAFETY: ShowWindow is safe to call with any handle value.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOW);
        }
    }

    /// Sets this window as the foreground (focused) window.
    pub fn set_foreground(&self) {
        // SAFETY: SetForegroundWindow is safe to call with a valid HWND.
        unsafe {
            let _ = SetForegroundWindow(self.hwnd);
        }
    }

    /// Returns the window title, or an empty string for untitled windows.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Returns the window's small icon for use as a tray glyph.
    ///
    /// Asks the window first (`WM_GETICON`), falls back to its class icon,
    /// and finally to the generic application icon so a tray icon can
    /// always be produced.
    pub fn small_icon(&self) -> HICON {
        // SAFETY: WM_GETICON is a read-only query message; the class long
        // lookup reads window class data.
        unsafe {
            let from_window = SendMessageW(
                self.hwnd,
                WM_GETICON,
                WPARAM(ICON_SMALL as usize),
                LPARAM(0),
            );
            if from_window.0 != 0 {
                return HICON(from_window.0 as *mut _);
            }

            let from_class = GetClassLongPtrW(self.hwnd, GCLP_HICONSM);
            if from_class != 0 {
                return HICON(from_class as *mut _);
            }

            LoadIconW(None, IDI_APPLICATION).unwrap_or_default()
        }
    }

    /// Returns whether this window may be hidden into the tray.
    ///
    /// The desktop and the shell's taskbar must stay where they are —
    /// hiding either would leave the session unusable.
    pub fn is_hideable(&self) -> bool {
        if self.hwnd.0.is_null() || !self.is_alive() {
            return false;
        }

        // SAFETY: GetDesktopWindow always succeeds; FindWindowW is a
        // read-only lookup of the shell's taskbar window.
        unsafe {
            if self.hwnd == GetDesktopWindow() {
                return false;
            }
            if let Ok(tray) = FindWindowW(w!("Shell_TrayWnd"), None)
                && self.hwnd == tray
            {
                return false;
            }
        }
        true
    }

    /// Returns whether this looks like a real application window that the
    /// auto-hide matcher should consider.
    ///
    /// Requires a caption bar and an overlapped or popup style, and rejects
    /// tool windows, no-activate windows, and untitled windows. This keeps
    /// tooltips, menus, and other auxiliary surfaces out of the matcher.
    pub fn is_auto_hide_candidate(&self) -> bool {
        // SAFETY: GetWindowLongPtrW reads window style bits.
        unsafe {
            let style = GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32;
            let ex_style = GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32;

            if (style & WS_CAPTION.0) != WS_CAPTION.0 {
                return false;
            }
            if (style & (WS_OVERLAPPEDWINDOW.0 | WS_POPUP.0)) == 0 {
                return false;
            }
            if (ex_style & WS_EX_TOOLWINDOW.0) != 0 {
                return false;
            }
            if (ex_style & WS_EX_NOACTIVATE.0) != 0 {
                return false;
            }

            GetWindowTextLengthW(self.hwnd) != 0
        }
    }
}
