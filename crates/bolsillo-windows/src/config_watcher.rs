//! Watches the config directory for edits to `targets.txt`.
//!
//! Uses `FindFirstChangeNotificationW` to monitor the directory for
//! writes and renames. When a change is detected, the target file's mtime
//! is compared and a freshly parsed list is sent to the daemon — the user
//! can hand-edit the file while the daemon runs and the auto-hide matcher
//! picks it up without a restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::SystemTime;

use windows::Win32::Foundation::WAIT_OBJECT_0;
use windows::Win32::Storage::FileSystem::{
    FILE_NOTIFY_CHANGE_FILE_NAME, FILE_NOTIFY_CHANGE_LAST_WRITE, FindCloseChangeNotification,
    FindFirstChangeNotificationW, FindNextChangeNotification,
};
use windows::Win32::System::Threading::WaitForSingleObject;
use windows::core::HSTRING;

use bolsillo_core::{TargetList, config, log_info};

/// Timeout between stop-flag checks when no changes occur (ms).
const WAIT_TIMEOUT_MS: u32 = 5000;

/// Runs the watcher loop. Blocks until the stop flag is set or the
/// sender is dropped.
pub fn watch(tx: Sender<TargetList>, stop: Arc<AtomicBool>) {
    let Some(dir) = config::config_dir() else {
        log_info!("config dir not found, watcher exiting");
        return;
    };
    let targets_path = config::targets_path();
    let mut targets_mtime = mtime(targets_path.as_deref());

    let dir_str = HSTRING::from(dir.as_os_str());
    let flags = FILE_NOTIFY_CHANGE_LAST_WRITE | FILE_NOTIFY_CHANGE_FILE_NAME;

    // SAFETY: FindFirstChangeNotificationW opens a change notification
    // handle on the directory; closed below before returning.
    let handle = unsafe { FindFirstChangeNotificationW(&dir_str, false, flags) };
    let Ok(handle) = handle else {
        log_info!("FindFirstChangeNotificationW failed, watcher exiting");
        return;
    };

    while !stop.load(Ordering::Relaxed) {
        // SAFETY: WaitForSingleObject blocks on the notification handle.
        let result = unsafe { WaitForSingleObject(handle, WAIT_TIMEOUT_MS) };
        if stop.load(Ordering::Relaxed) {
            break;
        }
        if result != WAIT_OBJECT_0 {
            continue; // timeout or error — loop back to check stop flag
        }

        if let Some(path) = targets_path.as_deref() {
            let new = mtime(Some(path));
            if new != targets_mtime {
                targets_mtime = new;
                log_info!("targets.txt changed, reloading");
                if tx.send(TargetList::load(path)).is_err() {
                    break;
                }
            }
        }

        // SAFETY: FindNextChangeNotification re-arms the handle.
        if unsafe { FindNextChangeNotification(handle) }.is_err() {
            break;
        }
    }

    // SAFETY: closes the notification handle opened above.
    unsafe {
        let _ = FindCloseChangeNotification(handle);
    }
}

/// Returns the modification time for a path, or `None` if unavailable.
fn mtime(path: Option<&std::path::Path>) -> Option<SystemTime> {
    path.and_then(|p| p.metadata().ok())
        .and_then(|m| m.modified().ok())
}
