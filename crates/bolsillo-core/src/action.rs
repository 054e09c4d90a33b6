/// A user-initiated request for the daemon.
///
/// Actions originate from global hotkeys, tray icon clicks, and the tray
/// context menu. They are funneled through the daemon's message channel so
/// that the visibility controller processes them in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide the currently focused window into the tray.
    HideForeground,
    /// Add the focused window's executable to the auto-hide target list.
    AddForegroundTarget,
    /// Restore the hidden window represented by this tray icon.
    Restore { icon_id: u32 },
    /// Restore every hidden window.
    RestoreAll,
    /// Open the configuration directory.
    OpenSettings,
    /// Re-add all tray icons (the shell's taskbar was recreated).
    RecreateIcons,
    /// Shut the daemon down cleanly.
    Exit,
}
