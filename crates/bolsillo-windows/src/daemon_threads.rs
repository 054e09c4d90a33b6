use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::thread;

use bolsillo_core::{Action, TargetList, WindowEvent};

use super::daemon_ipc;
use super::daemon_types::DaemonMsg;

/// Bridges window events into the daemon message channel.
pub(super) fn spawn_event_bridge(
    event_rx: mpsc::Receiver<WindowEvent>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for event in event_rx {
            if tx.send(DaemonMsg::Event(event)).is_err() {
                break;
            }
        }
    })
}

/// Bridges hotkey/tray/menu actions into the daemon message channel.
pub(super) fn spawn_action_bridge(
    action_rx: mpsc::Receiver<Action>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for action in action_rx {
            if tx.send(DaemonMsg::Action(action)).is_err() {
                break;
            }
        }
    })
}

/// Spawns the IPC listener thread.
pub(super) fn spawn_ipc_listener(tx: mpsc::Sender<DaemonMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || daemon_ipc::ipc_loop(tx))
}

/// Turns Ctrl+C (when run attached to a console) into a clean exit.
///
/// The bridge thread blocks on the handler channel for the whole process
/// lifetime, so it is deliberately not joined on shutdown.
pub(super) fn spawn_ctrl_c_bridge(tx: mpsc::Sender<DaemonMsg>) {
    let (ctrl_c_tx, ctrl_c_rx) = mpsc::channel();
    crate::ctrl_c::set_handler(ctrl_c_tx);
    thread::spawn(move || {
        if ctrl_c_rx.recv().is_ok() {
            let _ = tx.send(DaemonMsg::Action(Action::Exit));
        }
    });
}

/// Spawns the target-list file watcher and a bridge into the daemon channel.
pub(super) fn spawn_targets_watcher(
    tx: mpsc::Sender<DaemonMsg>,
) -> (
    Arc<AtomicBool>,
    thread::JoinHandle<()>,
    thread::JoinHandle<()>,
) {
    let (reload_tx, reload_rx) = mpsc::channel::<TargetList>();
    let watcher_stop = Arc::new(AtomicBool::new(false));
    let watcher_stop_flag = watcher_stop.clone();
    let watcher_thread =
        thread::spawn(move || crate::config_watcher::watch(reload_tx, watcher_stop_flag));

    let reload_bridge = thread::spawn(move || {
        for targets in reload_rx {
            if tx.send(DaemonMsg::ReloadTargets(targets)).is_err() {
                break;
            }
        }
    });

    (watcher_stop, watcher_thread, reload_bridge)
}
