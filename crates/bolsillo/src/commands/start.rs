use std::os::windows::process::CommandExt;
use std::process::Command;

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200) — the daemon gets its own process
/// group, so Ctrl+C in the CLI terminal won't kill it.
///
/// `CREATE_NO_WINDOW` (0x08000000) — the daemon doesn't get a console
/// window. This also prevents inheriting the parent's console handles,
/// which avoids handle leaks that cause `cmd.output()` to hang in tests.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    // Check if the daemon is already running
    if bolsillo_windows::ipc::is_daemon_running() {
        println!("Bolsillo is already running.");
        return;
    }

    // Clean up stale PID file from a previous unclean shutdown
    if let Ok(Some(pid)) = bolsillo_core::pid::read_pid_file() {
        if bolsillo_windows::process::is_process_alive(pid) {
            println!("Bolsillo process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = bolsillo_core::pid::remove_pid_file();
    }

    // Get the path to the current executable so we can re-spawn it
    let exe = std::env::current_exe().expect("failed to get current executable path");

    // Spawn the daemon as a fully detached background process.
    // We re-run ourselves with the hidden `daemon` subcommand.
    // DETACH_FLAGS prevent handle inheritance so the parent can exit
    // immediately without waiting for the daemon to finish.
    let mut child = Command::new(exe)
        .arg("daemon")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn()
        .expect("failed to start daemon");

    let pid = child.id();

    // Detach: drop our handle so the daemon outlives the CLI process.
    // We call try_wait() to acknowledge the child without blocking.
    let _ = child.try_wait();

    println!("Bolsillo started (PID: {pid}).");
    println!("Press the hide hotkey (default Win+Shift+Z) to tuck the focused window");
    println!("into the tray, or run 'bolsillo target add <exe>' to auto-hide an app.");
}
