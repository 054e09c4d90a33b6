use super::hotkeys::HotkeySettings;

/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `bolsillo init` to create a starter config file that users can
/// immediately edit.
pub fn generate_config() -> String {
    r##"# Bolsillo configuration
# Location: ~/.config/bolsillo/config.toml

[restore]
# Grace period in milliseconds. A window you just restored from the tray
# cannot be auto-hidden again until this much time has passed. 50-10000.
grace_ms = 500

[logging]
# Enable file logging to ~/.config/bolsillo/logs/bolsillo.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

/// Generates the default `hotkeys.txt` contents.
///
/// The format is one `modifiers,vk,enabled` record per line — hide binding
/// first, add-target binding second. Masks use the Win32 MOD_* values
/// (ALT=1, CTRL=2, SHIFT=4, WIN=8); defaults are Win+Shift+Z to hide the
/// focused window and Win+Shift+A (disabled) to add it to the target list.
pub fn generate_hotkeys() -> String {
    HotkeySettings::default().serialize()
}

/// Generates the default (empty) `targets.txt` contents.
///
/// Every non-blank line is one absolute executable path, e.g.
/// `C:\Program Files\App\app.exe`. Windows owned by a listed executable
/// are hidden into the tray as soon as they appear.
pub fn generate_targets() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn config_template_parses_to_defaults() {
        // Act
        let config: Config = toml::from_str(&generate_config()).unwrap();

        // Assert
        assert_eq!(config.restore.grace_ms, Config::default().restore.grace_ms);
        assert_eq!(config.logging.enabled, Config::default().logging.enabled);
    }

    #[test]
    fn hotkeys_template_parses_to_defaults() {
        let parsed = HotkeySettings::parse(&generate_hotkeys());
        assert_eq!(parsed, HotkeySettings::default());
    }
}
