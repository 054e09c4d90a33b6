//! The two global hotkey bindings and their line-oriented settings file.
//!
//! `hotkeys.txt` holds one `modifiers,vk,enabled` record per line in fixed
//! order: the hide-foreground binding first, the add-target binding
//! second. Masks and virtual-key codes use the Win32 numeric values so the
//! file round-trips losslessly through the OS registration call.

/// Modifier mask bits (Win32 `MOD_*` values).
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

/// One global hotkey binding.
///
/// `enabled` is also how registration failure is recorded: a binding that
/// conflicts with another process is degraded to disabled for the session
/// instead of aborting startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    /// Combination of `MOD_*` mask bits.
    pub modifiers: u32,
    /// Virtual-key code.
    pub vk: u32,
    pub enabled: bool,
}

impl HotkeyBinding {
    fn parse(line: &str) -> Option<Self> {
        let mut fields = line.trim().split(',');
        let modifiers = fields.next()?.trim().parse().ok()?;
        let vk = fields.next()?.trim().parse().ok()?;
        let enabled = fields.next()?.trim().parse::<u8>().ok()? != 0;
        if fields.next().is_some() {
            return None;
        }
        Some(Self {
            modifiers,
            vk,
            enabled,
        })
    }

    fn serialize(&self) -> String {
        format!(
            "{},{},{}",
            self.modifiers,
            self.vk,
            if self.enabled { 1 } else { 0 }
        )
    }
}

/// Both bindings, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySettings {
    /// Hide the focused window.
    pub hide: HotkeyBinding,
    /// Add the focused window's executable to the target list.
    pub add_target: HotkeyBinding,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            // Win+Shift+Z
            hide: HotkeyBinding {
                modifiers: MOD_WIN | MOD_SHIFT,
                vk: 'Z' as u32,
                enabled: true,
            },
            // Win+Shift+A, disabled out of the box to avoid conflicts
            add_target: HotkeyBinding {
                modifiers: MOD_WIN | MOD_SHIFT,
                vk: 'A' as u32,
                enabled: false,
            },
        }
    }
}

impl HotkeySettings {
    /// Parses the settings file contents.
    ///
    /// A missing or malformed line leaves that binding at its default, so
    /// a half-corrupt file degrades one binding instead of both.
    pub fn parse(contents: &str) -> Self {
        let defaults = Self::default();
        let mut lines = contents.lines();

        let hide = lines
            .next()
            .and_then(HotkeyBinding::parse)
            .unwrap_or(defaults.hide);
        let add_target = lines
            .next()
            .and_then(HotkeyBinding::parse)
            .unwrap_or(defaults.add_target);

        Self { hide, add_target }
    }

    /// Serializes both bindings back to file contents.
    pub fn serialize(&self) -> String {
        format!(
            "{}\n{}\n",
            self.hide.serialize(),
            self.add_target.serialize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_bindings() {
        // Act
        let settings = HotkeySettings::default();

        // Assert: Win+Shift+Z enabled, Win+Shift+A disabled.
        assert_eq!(settings.hide.modifiers, MOD_WIN | MOD_SHIFT);
        assert_eq!(settings.hide.vk, 0x5A);
        assert!(settings.hide.enabled);
        assert_eq!(settings.add_target.vk, 0x41);
        assert!(!settings.add_target.enabled);
    }

    #[test]
    fn parse_reads_both_lines_in_fixed_order() {
        // Arrange: Alt+H enabled, Ctrl+Shift+J enabled.
        let contents = "1,72,1\n6,74,1\n";

        // Act
        let settings = HotkeySettings::parse(contents);

        // Assert
        assert_eq!(settings.hide.modifiers, MOD_ALT);
        assert_eq!(settings.hide.vk, 72);
        assert_eq!(settings.add_target.modifiers, MOD_CONTROL | MOD_SHIFT);
        assert!(settings.add_target.enabled);
    }

    #[test]
    fn malformed_line_falls_back_to_that_bindings_default() {
        // Arrange: first line is garbage, second line is valid.
        let contents = "not,a,hotkey,record\n12,65,0\n";

        // Act
        let settings = HotkeySettings::parse(contents);

        // Assert
        assert_eq!(settings.hide, HotkeySettings::default().hide);
        assert_eq!(settings.add_target.modifiers, MOD_SHIFT | MOD_WIN);
        assert!(!settings.add_target.enabled);
    }

    #[test]
    fn empty_contents_yield_defaults() {
        assert_eq!(HotkeySettings::parse(""), HotkeySettings::default());
    }

    #[test]
    fn serialize_round_trips() {
        // Arrange
        let settings = HotkeySettings {
            hide: HotkeyBinding {
                modifiers: MOD_CONTROL | MOD_ALT,
                vk: 0x70,
                enabled: true,
            },
            add_target: HotkeyBinding {
                modifiers: MOD_WIN,
                vk: 0x42,
                enabled: false,
            },
        };

        // Act / Assert
        assert_eq!(HotkeySettings::parse(&settings.serialize()), settings);
    }
}
