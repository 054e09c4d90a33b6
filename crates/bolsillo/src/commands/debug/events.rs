use std::sync::mpsc;

use bolsillo_core::config::HotkeySettings;

/// Watches window events in real time. Press Ctrl+C to stop.
pub fn execute() {
    println!("Watching window events (press Ctrl+C to stop)...\n");

    let (tx, rx) = mpsc::channel();
    // Action channel is unused in debug mode — disable both hotkeys so a
    // running daemon keeps its registrations.
    let (action_tx, _action_rx) = mpsc::channel();
    let mut settings = HotkeySettings::default();
    settings.hide.enabled = false;
    settings.add_target.enabled = false;

    let event_loop = match bolsillo_windows::event_loop::start(tx, action_tx, settings) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start event loop: {e}");
            return;
        }
    };

    // Set up Ctrl+C handler to stop the event loop cleanly.
    let (stop_tx, stop_rx) = mpsc::channel();
    bolsillo_windows::ctrl_c::set_handler(stop_tx);

    loop {
        // Check for Ctrl+C
        if stop_rx.try_recv().is_ok() {
            break;
        }

        // Drain available events
        match rx.recv_timeout(std::time::Duration::from_millis(100)) {
            Ok(event) => {
                let window = bolsillo_windows::Window::from_raw(event.hwnd());
                println!("{event} \"{}\"", window.title());
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    event_loop.stop();
}
