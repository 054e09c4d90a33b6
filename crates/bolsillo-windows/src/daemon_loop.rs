use std::os::windows::ffi::OsStrExt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use bolsillo_core::ipc::{Command, Response};
use bolsillo_core::{Action, WindowEvent, WindowResult, config, log_info, log_warn};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{PCWSTR, w};

use crate::controller::VisibilityController;
use crate::event_loop;
use crate::tray::TrayIcons;

use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// Whether the daemon loop should keep running after a message.
#[derive(PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    bolsillo_core::log::init(&config.logging);

    let hotkey_settings = config::load_hotkeys();
    let targets = config::load_targets();

    log_info!("Daemon started (PID: {})", std::process::id());
    log_info!(
        "Config: grace_ms={}, log_level={}, {} auto-hide targets",
        config.restore.grace_ms,
        config.logging.level,
        targets.len()
    );

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // Start the Win32 event thread: WinEvent hook, global hotkeys, and
    // the tray sink window all live there.
    let (event_channel_tx, event_channel_rx) = mpsc::channel();
    let (action_channel_tx, action_channel_rx) = mpsc::channel();
    let event_loop = event_loop::start(event_channel_tx, action_channel_tx, hotkey_settings)?;

    // Bridge: forward window events into the unified channel.
    let event_bridge = daemon_threads::spawn_event_bridge(event_channel_rx, tx.clone());

    // Bridge: forward hotkey/tray actions into the unified channel.
    let action_bridge = daemon_threads::spawn_action_bridge(action_channel_rx, tx.clone());

    // Start the IPC listener on its own thread.
    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());

    // Watch targets.txt for edits made while the daemon runs.
    let (watcher_stop, watcher_thread, reload_bridge) =
        daemon_threads::spawn_targets_watcher(tx.clone());

    // Ctrl+C in a console-attached run is a clean exit too.
    daemon_threads::spawn_ctrl_c_bridge(tx.clone());

    let tray = TrayIcons::new(event_loop.sink);
    if let Err(e) = tray.add_app_icon() {
        // Not fatal: hotkeys and auto-hide still work, the user just has
        // no menu until the next TaskbarCreated re-add.
        log_warn!("could not add application tray icon: {e}");
    }

    for warning in &event_loop.warnings {
        log_warn!("{warning}");
        tray.balloon("Hotkey conflict", warning);
    }

    let grace = Duration::from_millis(config.restore.grace_ms);
    let mut controller = VisibilityController::new(tray, targets, grace);

    // Crash recovery: re-hide whatever the previous session left hidden.
    controller.recover();

    // Main processing loop — blocks until a message arrives or a debounce
    // deadline passes.
    loop {
        let msg = match controller.next_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(timeout) {
                    Ok(msg) => Some(msg),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => break,
            },
        };

        controller.fire_due_timers();

        let Some(msg) = msg else {
            continue;
        };

        match msg {
            DaemonMsg::Event(WindowEvent::Shown { hwnd }) => controller.handle_shown(hwnd),
            DaemonMsg::Event(WindowEvent::Destroyed { hwnd }) => controller.handle_destroyed(hwnd),
            DaemonMsg::Action(action) => {
                if handle_action(action, &mut controller) == Flow::Exit {
                    break;
                }
            }
            DaemonMsg::Command(command, reply_tx) => {
                let (response, flow) = handle_command(&command, &mut controller);
                let _ = reply_tx.send(response);
                if flow == Flow::Exit {
                    break;
                }
            }
            DaemonMsg::ReloadTargets(targets) => controller.reload_targets(targets),
        }
    }

    controller.shutdown();
    event_loop.stop();
    watcher_stop.store(true, std::sync::atomic::Ordering::Relaxed);
    drop(tx);
    let _ = event_bridge.join();
    let _ = action_bridge.join();
    let _ = watcher_thread.join();
    let _ = reload_bridge.join();
    let _ = ipc_thread.join();

    Ok(())
}

fn handle_action(action: Action, controller: &mut VisibilityController) -> Flow {
    match action {
        Action::HideForeground => controller.hide_foreground(),
        Action::AddForegroundTarget => controller.add_foreground_target(),
        Action::Restore { icon_id } => controller.restore_window(icon_id),
        Action::RestoreAll => {
            controller.restore_all();
        }
        Action::OpenSettings => open_settings(),
        Action::RecreateIcons => controller.recreate_icons(),
        Action::Exit => return Flow::Exit,
    }
    Flow::Continue
}

fn handle_command(command: &Command, controller: &mut VisibilityController) -> (Response, Flow) {
    let response = match command {
        Command::Stop => {
            return (Response::ok_with_message("daemon stopping"), Flow::Exit);
        }
        Command::Status => Response::ok_with_message(controller.status_summary()),
        Command::RestoreAll => {
            let restored = controller.restore_all();
            Response::ok_with_message(format!("Restored {restored} windows"))
        }
        Command::AddTarget { path } => match controller.add_target(path) {
            Ok(message) => Response::ok_with_message(message),
            Err(message) => Response::error(message),
        },
        Command::RemoveTarget { path } => match controller.remove_target(path) {
            Ok(message) => Response::ok_with_message(message),
            Err(message) => Response::error(message),
        },
        Command::ListTargets => Response::ok_with_message(controller.targets_summary()),
    };
    (response, Flow::Continue)
}

/// Opens the configuration directory in Explorer.
///
/// The settings are plain files; pointing the user at them replaces a
/// settings dialog.
fn open_settings() {
    let Some(dir) = config::config_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);

    let wide: Vec<u16> = dir.as_os_str().encode_wide().chain(Some(0)).collect();
    // SAFETY: ShellExecuteW with "open" launches the default handler for
    // the directory. The wide string outlives the call.
    unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            PCWSTR(wide.as_ptr()),
            None,
            None,
            SW_SHOWNORMAL,
        );
    }
}
