//! CLI management of the auto-hide target list.
//!
//! When the daemon is running, edits go through IPC so the daemon stays
//! the single writer of `targets.txt` and its in-memory copy never goes
//! stale. Without a daemon, the file is edited directly.

use bolsillo_core::Command;
use bolsillo_core::config;
use bolsillo_core::ipc::ResponseStatus;

pub fn add(path: &str) {
    if bolsillo_windows::ipc::is_daemon_running() {
        send(Command::AddTarget { path: path.into() });
        return;
    }

    let mut targets = config::load_targets();
    if !targets.add(path) {
        eprintln!("{path} is already on the auto-hide list");
        std::process::exit(1);
    }
    match config::save_targets(&targets) {
        Ok(()) => println!("Added {path}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn remove(path: &str) {
    if bolsillo_windows::ipc::is_daemon_running() {
        send(Command::RemoveTarget { path: path.into() });
        return;
    }

    let mut targets = config::load_targets();
    if !targets.remove(path) {
        eprintln!("{path} is not on the auto-hide list");
        std::process::exit(1);
    }
    match config::save_targets(&targets) {
        Ok(()) => println!("Removed {path}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn list() {
    if bolsillo_windows::ipc::is_daemon_running() {
        send(Command::ListTargets);
        return;
    }

    let targets = config::load_targets();
    if targets.is_empty() {
        println!("The auto-hide list is empty.");
        return;
    }
    for path in targets.iter() {
        println!("{path}");
    }
}

/// Sends a command to the daemon and prints the outcome.
fn send(command: Command) {
    match bolsillo_windows::ipc::send_command(&command) {
        Ok(response) => {
            let message = response.message.unwrap_or_default();
            if response.status == ResponseStatus::Ok {
                println!("{message}");
            } else {
                eprintln!("Error: {message}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to send command: {e}");
            std::process::exit(1);
        }
    }
}
