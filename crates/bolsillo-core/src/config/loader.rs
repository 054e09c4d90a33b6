use std::path::PathBuf;

use super::Config;
use super::hotkeys::HotkeySettings;
use crate::targets::TargetList;

/// Returns the config directory: `~/.config/bolsillo/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("bolsillo"))
}

/// Returns the config file path: `~/.config/bolsillo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the target list path: `~/.config/bolsillo/targets.txt`.
pub fn targets_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("targets.txt"))
}

/// Returns the hotkey settings path: `~/.config/bolsillo/hotkeys.txt`.
pub fn hotkeys_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("hotkeys.txt"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// A non-existent file silently returns defaults; other errors are logged.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Loads the auto-hide target list.
///
/// Missing path or file yields an empty list.
pub fn load_targets() -> TargetList {
    match targets_path() {
        Some(path) => TargetList::load(&path),
        None => TargetList::new(),
    }
}

/// Persists the full auto-hide target list.
pub fn save_targets(targets: &TargetList) -> Result<(), String> {
    let path = targets_path().ok_or("could not determine targets path")?;
    targets
        .save(&path)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the hotkey settings, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_hotkeys() -> HotkeySettings {
    let Some(path) = hotkeys_path() else {
        return HotkeySettings::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => HotkeySettings::parse(&contents),
        Err(_) => HotkeySettings::default(),
    }
}

/// Persists the hotkey settings.
pub fn save_hotkeys(settings: &HotkeySettings) -> Result<(), String> {
    let path = hotkeys_path().ok_or("could not determine hotkeys path")?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }
    std::fs::write(&path, settings.serialize()).map_err(|e| format!("{}: {e}", path.display()))
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path") || e.contains("The system cannot find")
}
