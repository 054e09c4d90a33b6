use bolsillo_core::ipc::ResponseStatus;

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if bolsillo_windows::ipc::is_daemon_running() {
        let command = bolsillo_core::Command::Stop;
        match bolsillo_windows::ipc::send_command(&command) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Bolsillo stopped. {}", response.message.unwrap_or_default());
                let _ = bolsillo_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the IPC pipe is gone but the process may still be
    // alive (e.g. the IPC thread crashed). Check the PID file.
    match bolsillo_core::pid::read_pid_file() {
        Ok(Some(pid)) if bolsillo_windows::process::is_process_alive(pid) => {
            if bolsillo_windows::process::kill_process(pid) {
                let _ = bolsillo_core::pid::remove_pid_file();
                println!("Bolsillo stopped (killed PID {pid}).");
                println!("Windows hidden by that session stay hidden until the next start.");
            } else {
                eprintln!("Failed to kill process {pid}.");
                std::process::exit(1);
            }
        }
        _ => {
            println!("Bolsillo is not running.");
        }
    }
}
