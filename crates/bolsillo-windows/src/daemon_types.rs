use std::sync::mpsc;

use bolsillo_core::ipc::{Command, Response};
use bolsillo_core::{Action, TargetList, WindowEvent};

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A window event from the WinEvent hook.
    Event(WindowEvent),
    /// A user action from hotkeys, tray clicks, or the context menu.
    Action(Action),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
    /// A reloaded target list from the config file watcher.
    ReloadTargets(TargetList),
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
