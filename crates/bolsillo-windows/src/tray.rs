//! Notification-area icons: one for the application itself and one per
//! hidden window.
//!
//! Icon id 0 is the fixed application icon; every other id is derived
//! from the hidden window's handle value. All icons belong to the tray
//! sink window created by the event loop, so their interaction events
//! arrive there as `WM_TRAYICON` and are forwarded to the daemon thread.

use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    NIF_ICON, NIF_INFO, NIF_MESSAGE, NIF_TIP, NIIF_INFO, NIM_ADD, NIM_DELETE, NIM_MODIFY,
    NOTIFYICONDATAW, Shell_NotifyIconW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, HICON, MF_SEPARATOR, MF_STRING,
    SetForegroundWindow, TPM_BOTTOMALIGN, TPM_RIGHTALIGN, TrackPopupMenu, WM_APP,
};
use windows::core::w;

use bolsillo_core::WindowResult;

/// Callback message delivered to the tray sink window for icon clicks.
pub const WM_TRAYICON: u32 = WM_APP + 1;

/// Identifier of the application's own tray icon.
pub const APP_ICON_ID: u32 = 0;

/// Context menu command: restore every hidden window.
pub const MENU_RESTORE_ALL: u32 = 1001;
/// Context menu command: open the configuration directory.
pub const MENU_SETTINGS: u32 = 1002;
/// Context menu command: exit the daemon.
pub const MENU_EXIT: u32 = 1003;

/// Creates and destroys notification-area icons on behalf of the daemon.
///
/// Holds only the raw handle of the tray sink window; `Shell_NotifyIconW`
/// may be called from any thread as long as that window is alive.
#[derive(Debug, Clone, Copy)]
pub struct TrayIcons {
    sink: usize,
}

impl TrayIcons {
    /// Creates a broker whose icons report to the given sink window.
    pub fn new(sink: usize) -> Self {
        Self { sink }
    }

    /// Adds the application's own icon (id 0).
    pub fn add_app_icon(&self) -> WindowResult<()> {
        // SAFETY: LoadIconW with IDI_APPLICATION loads a shared system icon.
        let icon = unsafe {
            windows::Win32::UI::WindowsAndMessaging::LoadIconW(
                None,
                windows::Win32::UI::WindowsAndMessaging::IDI_APPLICATION,
            )
            .unwrap_or_default()
        };
        self.add_icon(APP_ICON_ID, icon, "Bolsillo")
    }

    /// Adds one icon representing a hidden window.
    ///
    /// `id` is the window's stable numeric identity; `tooltip` is the
    /// title snapshot taken at hide time. Fails if the shell rejects the
    /// icon — the caller must then leave the window visible.
    pub fn add_window_icon(&self, id: u32, icon: HICON, tooltip: &str) -> WindowResult<()> {
        self.add_icon(id, icon, tooltip)
    }

    fn add_icon(&self, id: u32, icon: HICON, tooltip: &str) -> WindowResult<()> {
        let mut nid = self.base_data(id);
        nid.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
        nid.uCallbackMessage = WM_TRAYICON;
        nid.hIcon = icon;
        copy_wide(&mut nid.szTip, tooltip);

        // SAFETY: Shell_NotifyIconW with NIM_ADD registers the icon. The
        // shell copies the data; nothing is borrowed after the call.
        let added = unsafe { Shell_NotifyIconW(NIM_ADD, &nid) };
        if !added.as_bool() {
            return Err(format!("shell rejected tray icon {id}").into());
        }
        Ok(())
    }

    /// Removes an icon by identifier. Removing an already-gone icon is a
    /// no-op as far as the caller is concerned.
    pub fn remove_icon(&self, id: u32) {
        let nid = self.base_data(id);
        // SAFETY: NIM_DELETE with a valid struct; failure means the icon
        // was already gone.
        unsafe {
            let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
        }
    }

    /// Shows a transient balloon notification on the application icon.
    pub fn balloon(&self, title: &str, text: &str) {
        let mut nid = self.base_data(APP_ICON_ID);
        nid.uFlags = NIF_INFO;
        nid.dwInfoFlags = NIIF_INFO;
        copy_wide(&mut nid.szInfoTitle, title);
        copy_wide(&mut nid.szInfo, text);

        // SAFETY: NIM_MODIFY updates the existing app icon in place.
        unsafe {
            let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
        }
    }

    fn base_data(&self, id: u32) -> NOTIFYICONDATAW {
        NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: HWND(self.sink as *mut _),
            uID: id,
            ..Default::default()
        }
    }
}

/// Copies a string into a fixed-size wide buffer, truncating and leaving
/// room for the null terminator.
fn copy_wide(dst: &mut [u16], text: &str) {
    let wide: Vec<u16> = text.encode_utf16().collect();
    let len = wide.len().min(dst.len().saturating_sub(1));
    dst[..len].copy_from_slice(&wide[..len]);
    dst[len..].fill(0);
}

/// Shows the tray context menu at the cursor and routes the selection to
/// the sink window as `WM_COMMAND`.
///
/// Must run on the thread that owns the sink window. The foreground call
/// before tracking makes the menu dismiss when the user clicks away.
pub fn show_context_menu(sink: HWND) {
    // SAFETY: menu creation/tracking/destruction all happen on this
    // thread; the menu handle never escapes this function.
    unsafe {
        let Ok(menu) = CreatePopupMenu() else {
            return;
        };
        let _ = AppendMenuW(
            menu,
            MF_STRING,
            MENU_RESTORE_ALL as usize,
            w!("Restore all windows"),
        );
        let _ = AppendMenuW(menu, MF_STRING, MENU_SETTINGS as usize, w!("Open settings"));
        let _ = AppendMenuW(menu, MF_SEPARATOR, 0, None);
        let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));

        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);
        let _ = SetForegroundWindow(sink);
        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_RIGHTALIGN,
            pt.x,
            pt.y,
            0,
            sink,
            None,
        );
        let _ = DestroyMenu(menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_wide_truncates_and_terminates() {
        // Arrange
        let mut buf = [0xFFFFu16; 8];

        // Act
        copy_wide(&mut buf, "abcdefghij");

        // Assert: 7 chars + null terminator.
        let expected: Vec<u16> = "abcdefg".encode_utf16().collect();
        assert_eq!(&buf[..7], &expected[..]);
        assert_eq!(buf[7], 0);
    }

    #[test]
    fn copy_wide_zero_fills_the_tail() {
        let mut buf = [0xFFFFu16; 8];

        copy_wide(&mut buf, "ab");

        assert_eq!(buf[2..], [0u16; 6]);
    }
}
