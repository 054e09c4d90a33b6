use bolsillo_core::config;

/// Creates the default configuration files at `~/.config/bolsillo/`.
///
/// Generates `config.toml`, `hotkeys.txt`, and an empty `targets.txt`.
/// Existing files are not overwritten.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );
    write_if_missing(
        &dir.join("hotkeys.txt"),
        &config::template::generate_hotkeys(),
    );
    write_if_missing(
        &dir.join("targets.txt"),
        &config::template::generate_targets(),
    );

    println!("\nAdd executable paths to targets.txt (one per line) to auto-hide their");
    println!("windows, or press the add-to-list hotkey while an application is focused.");
    println!("Hotkey format in hotkeys.txt: modifiers,vk,enabled (ALT=1 CTRL=2 SHIFT=4 WIN=8).");
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &std::path::Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
