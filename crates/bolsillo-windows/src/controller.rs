//! The visibility controller: the only component allowed to change which
//! windows are hidden.
//!
//! Runs on the daemon thread and owns the window registry, the restoring
//! set, the auto-hide target list, and the debounce timer queue. Every
//! request — hotkey, tray click, menu command, auto-hide candidate, IPC —
//! arrives through the daemon's single message channel, so all state
//! transitions happen in arrival order without locks.

use std::time::{Duration, Instant};

use bolsillo_core::registry::HiddenWindow;
use bolsillo_core::{
    Debounce, RestoringSet, TargetList, TimerQueue, WindowRegistry, config, log_debug, log_info,
    log_warn, recovery,
};
use windows::Win32::UI::WindowsAndMessaging::GetForegroundWindow;

use crate::process;
use crate::tray::{APP_ICON_ID, TrayIcons};
use crate::window::Window;

pub struct VisibilityController {
    registry: WindowRegistry,
    restoring: RestoringSet,
    targets: TargetList,
    timers: TimerQueue<Debounce>,
    tray: TrayIcons,
    grace: Duration,
}

impl VisibilityController {
    pub fn new(tray: TrayIcons, targets: TargetList, grace: Duration) -> Self {
        Self {
            registry: WindowRegistry::new(),
            restoring: RestoringSet::new(),
            targets,
            timers: TimerQueue::new(),
            tray,
            grace,
        }
    }

    /// Hides a window into the tray. Returns whether the window was hidden.
    ///
    /// Precondition violations (dead handle, desktop/taskbar, already
    /// hidden) are expected races and no-op silently. Tray icon creation
    /// failure aborts the operation with the window left visible — a
    /// window is never hidden without a way back.
    pub fn hide_window(&mut self, handle: usize) -> bool {
        let window = Window::from_raw(handle);
        if !window.is_hideable() {
            return false;
        }
        if self.registry.contains(handle) {
            // Duplicate show event or repeated hotkey press.
            return false;
        }

        // Snapshot title and glyph now — neither is queryable once the
        // owning process starts tearing the window down.
        let title = window.title();
        let icon_id = handle as u32;
        if let Err(e) = self
            .tray
            .add_window_icon(icon_id, window.small_icon(), &title)
        {
            log_warn!("not hiding 0x{handle:X}: {e}");
            return false;
        }

        window.hide();
        let _ = self.registry.add(HiddenWindow {
            handle,
            icon_id,
            title,
        });
        self.persist();
        log_info!("hid 0x{handle:X}");
        true
    }

    /// Hides the currently focused window (global hotkey).
    pub fn hide_foreground(&mut self) {
        // SAFETY: GetForegroundWindow is a simple query; it can return a
        // null handle, which hide_window rejects.
        let foreground = unsafe { GetForegroundWindow() };
        self.hide_window(foreground.0 as usize);
    }

    /// Restores the hidden window behind a tray icon. Unknown icon ids
    /// (stale click events) are ignored.
    pub fn restore_window(&mut self, icon_id: u32) {
        let Some(entry) = self.registry.remove_by_icon(icon_id) else {
            return;
        };

        // Guard before showing: the show event this triggers must find
        // the handle already in the restoring set.
        self.restoring.insert(entry.handle);

        let window = Window::from_raw(entry.handle);
        window.show();
        window.set_foreground();
        self.tray.remove_icon(icon_id);
        self.persist();

        self.timers
            .schedule(Instant::now() + self.grace, Debounce::Release(entry.handle));
        log_info!("restored 0x{:X}", entry.handle);
    }

    /// Restores every hidden window. Returns how many were restored.
    ///
    /// All entries were restored in one burst, so the per-window release
    /// timers are superseded by a single bulk clear of the restoring set.
    pub fn restore_all(&mut self) -> usize {
        let entries = self.registry.drain_all();
        if entries.is_empty() {
            return 0;
        }

        for entry in &entries {
            self.restoring.insert(entry.handle);
            let window = Window::from_raw(entry.handle);
            window.show();
            self.tray.remove_icon(entry.icon_id);
        }
        self.persist();

        self.timers.cancel_where(|_| true);
        self.timers
            .schedule(Instant::now() + self.grace, Debounce::ClearAll);
        log_info!("restored all ({} windows)", entries.len());
        entries.len()
    }

    /// Handles a desktop-wide "window shown" notification.
    ///
    /// A window the user is actively restoring must never be re-hidden,
    /// so the restoring set is checked before anything else. Windows whose
    /// process cannot be queried are dropped silently.
    pub fn handle_shown(&mut self, handle: usize) {
        if self.restoring.contains(handle) {
            return;
        }
        if self.targets.is_empty() {
            return;
        }

        let window = Window::from_raw(handle);
        if !window.is_visible() || !window.is_auto_hide_candidate() {
            return;
        }

        let Some(path) = process::window_exe_path(handle) else {
            return;
        };
        if self.targets.contains(&path) && self.hide_window(handle) {
            log_info!("auto-hid 0x{handle:X} ({path})");
        }
    }

    /// Handles a window destruction notification.
    ///
    /// A hidden window whose process exited would otherwise leave an
    /// orphaned tray icon behind.
    pub fn handle_destroyed(&mut self, handle: usize) {
        let Some(entry) = self.registry.remove_by_handle(handle) else {
            return;
        };
        self.tray.remove_icon(entry.icon_id);
        self.persist();
        log_info!("hidden window 0x{handle:X} was destroyed, dropped its icon");
    }

    /// Adds the focused window's executable to the target list (hotkey).
    pub fn add_foreground_target(&mut self) {
        // SAFETY: GetForegroundWindow is a simple query.
        let foreground = unsafe { GetForegroundWindow() };
        let Some(path) = process::window_exe_path(foreground.0 as usize) else {
            self.tray
                .balloon("Bolsillo", "Could not resolve the application's path.");
            return;
        };

        match self.add_target(&path) {
            Ok(_) => self
                .tray
                .balloon("Added to auto-hide list", &path),
            Err(_) => self
                .tray
                .balloon("Bolsillo", "Application is already on the auto-hide list."),
        }
    }

    /// Appends a path to the target list and persists it.
    pub fn add_target(&mut self, path: &str) -> Result<String, String> {
        if !self.targets.add(path) {
            return Err(format!("{path} is already on the auto-hide list"));
        }
        self.save_targets();
        Ok(format!("Added {path}"))
    }

    /// Removes a path from the target list and persists it.
    pub fn remove_target(&mut self, path: &str) -> Result<String, String> {
        if !self.targets.remove(path) {
            return Err(format!("{path} is not on the auto-hide list"));
        }
        self.save_targets();
        Ok(format!("Removed {path}"))
    }

    /// One line per target path, for the CLI.
    pub fn targets_summary(&self) -> String {
        if self.targets.is_empty() {
            "The auto-hide list is empty.".into()
        } else {
            self.targets.iter().collect::<Vec<_>>().join("\n")
        }
    }

    /// Replaces the in-memory target list after an on-disk edit.
    pub fn reload_targets(&mut self, targets: TargetList) {
        log_info!("target list reloaded ({} entries)", targets.len());
        self.targets = targets;
    }

    /// Human-readable daemon status, for the CLI.
    pub fn status_summary(&self) -> String {
        let mut summary = format!("{} windows hidden", self.registry.len());
        for entry in self.registry.all() {
            summary.push_str(&format!("\n  0x{:X}  {}", entry.handle, entry.title));
        }
        summary
    }

    /// Attempts crash recovery from the persisted record.
    ///
    /// Handles that no longer refer to a live window are skipped silently;
    /// the rest are re-hidden, which recreates their tray icons. Returns
    /// how many windows were recovered.
    pub fn recover(&mut self) -> usize {
        let mut recovered = 0;
        for handle in recovery::load() {
            let handle = handle as usize;
            // Liveness is the best validation available: the raw handle
            // could have been recycled since the crash.
            if Window::from_raw(handle).is_alive() && self.hide_window(handle) {
                recovered += 1;
            }
        }

        if recovered > 0 {
            log_info!("recovered {recovered} hidden windows from previous session");
            self.tray.balloon(
                "Bolsillo",
                &format!("Recovered {recovered} hidden windows from the previous session."),
            );
        }
        // Supersede the consumed record even when nothing was recoverable.
        self.persist();
        recovered
    }

    /// Re-adds every tray icon after the shell's taskbar was recreated.
    pub fn recreate_icons(&mut self) {
        if let Err(e) = self.tray.add_app_icon() {
            log_warn!("could not re-add application icon: {e}");
        }
        for entry in self.registry.all() {
            let window = Window::from_raw(entry.handle);
            if let Err(e) = self
                .tray
                .add_window_icon(entry.icon_id, window.small_icon(), &entry.title)
            {
                log_warn!("could not re-add icon for 0x{:X}: {e}", entry.handle);
            }
        }
    }

    /// The earliest pending debounce deadline, for the daemon's
    /// `recv_timeout`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Applies every debounce task whose deadline has passed.
    pub fn fire_due_timers(&mut self) {
        for task in self.timers.pop_due(Instant::now()) {
            task.apply(&mut self.restoring);
        }
    }

    /// Clean shutdown: restore everything, drop the recovery record, and
    /// remove the application icon. Returns how many windows were restored.
    pub fn shutdown(&mut self) -> usize {
        let restored = self.restore_all();
        recovery::clear();
        self.tray.remove_icon(APP_ICON_ID);
        restored
    }

    fn persist(&self) {
        // In-memory state stays authoritative; a failed write only
        // degrades crash-recovery fidelity.
        if let Err(e) = recovery::save(&self.registry.handles()) {
            log_debug!("recovery record not written: {e}");
        }
    }

    fn save_targets(&self) {
        if let Err(e) = config::save_targets(&self.targets) {
            log_warn!("could not save target list: {e}");
        }
    }
}
