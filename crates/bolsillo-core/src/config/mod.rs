pub mod hotkeys;
mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

pub use hotkeys::{HotkeyBinding, HotkeySettings};
pub use loader::{
    config_dir, config_path, hotkeys_path, load, load_hotkeys, load_targets, save_hotkeys,
    save_targets, targets_path, try_load,
};

use crate::log::LogConfig;

/// Top-level configuration for Bolsillo.
///
/// Loaded from `~/.config/bolsillo/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`. The auto-hide target
/// list and the hotkey bindings live in their own files (`targets.txt`,
/// `hotkeys.txt`) with fixed line-oriented formats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Restore debounce settings.
    pub restore: RestoreConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Restore debounce settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreConfig {
    /// Grace period in milliseconds during which a just-restored window
    /// is protected from being auto-hidden again.
    pub grace_ms: u64,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self { grace_ms: 500 }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// A zero grace period would let the auto-hide matcher race the
    /// restore it is meant to debounce; an absurdly long one would block
    /// auto-hide for noticeable stretches.
    pub fn validate(&mut self) {
        self.restore.grace_ms = self.restore.grace_ms.clamp(50, 10_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.restore.grace_ms, 500);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[logging]\nenabled = true\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert!(config.logging.enabled);
        assert_eq!(config.restore.grace_ms, 500);
    }

    #[test]
    fn validate_clamps_extreme_values() {
        // Arrange
        let mut config = Config {
            restore: RestoreConfig { grace_ms: 0 },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.restore.grace_ms, 50);

        config.restore.grace_ms = 60_000;
        config.validate();
        assert_eq!(config.restore.grace_ms, 10_000);
    }
}
