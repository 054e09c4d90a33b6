/// Autostart registration in the HKCU Run key.
pub mod autostart;

/// Watches the config directory for target-list edits.
pub mod config_watcher;

/// The visibility controller — owner of all hidden-window state.
pub mod controller;

/// Ctrl+C handling for console-attached runs.
pub mod ctrl_c;

/// Daemon main loop.
pub mod daemon;

/// Win32 window enumeration.
pub mod enumerate;

/// Raw event translation.
pub mod event;

/// The Win32 event thread: WinEvent hook, hotkeys, tray sink.
pub mod event_loop;

/// Global hotkey registration and dispatch.
pub mod hotkey;

/// IPC via Named Pipes.
pub mod ipc;

/// Process utilities (alive check, exe path resolution).
pub mod process;

/// Notification-area icons and the tray context menu.
pub mod tray;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::enumerate_windows;
pub use window::Window;
