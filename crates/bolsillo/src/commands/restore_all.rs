use bolsillo_core::ipc::ResponseStatus;

/// Asks the running daemon to restore every hidden window.
pub fn execute() {
    if !bolsillo_windows::ipc::is_daemon_running() {
        eprintln!("Bolsillo is not running.");
        std::process::exit(1);
    }

    let command = bolsillo_core::Command::RestoreAll;
    match bolsillo_windows::ipc::send_command(&command) {
        Ok(response) => {
            if response.status == ResponseStatus::Ok {
                if let Some(message) = response.message {
                    println!("{message}");
                }
            } else {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to send command: {e}");
            std::process::exit(1);
        }
    }
}
