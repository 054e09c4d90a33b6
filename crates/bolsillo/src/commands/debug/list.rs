/// Lists the application windows the auto-hide matcher can see, with the
/// executable path each one resolves to — copy a path straight into
/// `bolsillo target add`.
pub fn execute() {
    let windows = match bolsillo_windows::enumerate_windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    let mut count = 0;
    for window in &windows {
        let title = window.title();
        if title.is_empty() {
            continue;
        }

        let exe = bolsillo_windows::process::window_exe_path(window.raw())
            .unwrap_or_else(|| "<unresolvable>".into());

        println!("0x{:X}", window.raw());
        println!("    title: {title}");
        println!("    exe:   {exe}");
        count += 1;
    }

    println!("\n{count} windows found");
}
