use bolsillo_core::WindowResult;
use bolsillo_core::pid;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the Bolsillo daemon.
///
/// Starts background threads for the Win32 event loop (which also hosts
/// the global hotkeys and the tray sink window) and the IPC listener. The
/// main thread owns the visibility controller.
pub fn run() -> WindowResult<()> {
    pid::write_pid_file()?;
    eprintln!("Bolsillo daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();

    result
}
