use bolsillo_core::ipc::ResponseStatus;

pub fn execute() {
    if bolsillo_windows::ipc::is_daemon_running() {
        let command = bolsillo_core::Command::Status;
        match bolsillo_windows::ipc::send_command(&command) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Bolsillo is running.");
                if let Some(message) = response.message {
                    println!("{message}");
                }
            }
            _ => println!("Bolsillo is running (status query failed)."),
        }
        return;
    }

    // Pipe isn't responding — check if a stale PID file was left behind
    // by a daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = bolsillo_core::pid::read_pid_file() {
        if bolsillo_windows::process::is_process_alive(pid) {
            println!("Bolsillo process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = bolsillo_core::pid::remove_pid_file();
            println!("Bolsillo is not running (cleaned up stale PID file).");
        }
    } else {
        println!("Bolsillo is not running.");
    }
}
