use std::sync::mpsc::Sender;

use bolsillo_core::Action;
use bolsillo_core::config::HotkeyBinding;
use bolsillo_core::config::hotkeys::{MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_NOREPEAT, RegisterHotKey, UnregisterHotKey,
};

/// Hotkey id for "hide the focused window".
const HIDE_ID: i32 = 1;
/// Hotkey id for "add the focused window's exe to the target list".
const ADD_TARGET_ID: i32 = 2;

/// Manages the two global hotkey registrations.
///
/// Hotkeys are registered on the current thread's message queue;
/// `WM_HOTKEY` messages arrive via the Win32 message pump running on the
/// same thread. A binding that fails to register (usually a conflict with
/// another application) is skipped and reported as a warning — never a
/// startup failure.
pub struct Hotkeys {
    registered: Vec<i32>,
    sender: Sender<Action>,
}

impl Hotkeys {
    /// Registers the enabled bindings and returns the manager plus any
    /// registration warnings for the daemon to surface once.
    pub fn register(
        sender: Sender<Action>,
        settings: &bolsillo_core::config::HotkeySettings,
    ) -> (Self, Vec<String>) {
        let mut hotkeys = Self {
            registered: Vec::new(),
            sender,
        };
        let mut warnings = Vec::new();

        for (id, name, binding) in [
            (HIDE_ID, "hide window", &settings.hide),
            (ADD_TARGET_ID, "add to auto-hide list", &settings.add_target),
        ] {
            if !binding.enabled {
                continue;
            }
            if let Err(warning) = hotkeys.register_one(id, binding) {
                warnings.push(format!("{name} hotkey disabled: {warning}"));
            }
        }

        (hotkeys, warnings)
    }

    /// Dispatches a `WM_HOTKEY` message by hotkey ID.
    ///
    /// Called from the message pump when a `WM_HOTKEY` message arrives.
    pub fn dispatch(&self, hotkey_id: i32) {
        let action = match hotkey_id {
            HIDE_ID => Action::HideForeground,
            ADD_TARGET_ID => Action::AddForegroundTarget,
            _ => return,
        };
        let _ = self.sender.send(action);
    }

    fn register_one(&mut self, id: i32, binding: &HotkeyBinding) -> Result<(), String> {
        let modifiers = to_win32_modifiers(binding.modifiers) | MOD_NOREPEAT;

        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue. We use unique IDs to avoid
        // collisions.
        let result = unsafe { RegisterHotKey(None, id, modifiers, binding.vk) };

        if result.is_err() {
            return Err(format!(
                "could not register vk=0x{:02X} (conflict with another application?)",
                binding.vk
            ));
        }

        self.registered.push(id);
        Ok(())
    }
}

impl Drop for Hotkeys {
    fn drop(&mut self) {
        for id in &self.registered {
            // SAFETY: UnregisterHotKey removes the hotkey registration.
            unsafe {
                let _ = UnregisterHotKey(None, *id);
            }
        }
    }
}

/// Converts the settings-file modifier mask to Win32 hotkey flags.
///
/// The numeric values are identical by design (the file stores Win32
/// masks), but the conversion is spelled out so an unknown bit can never
/// leak into the OS call.
fn to_win32_modifiers(mask: u32) -> HOT_KEY_MODIFIERS {
    use windows::Win32::UI::Input::KeyboardAndMouse as km;

    let mut flags = HOT_KEY_MODIFIERS(0);
    if mask & MOD_ALT != 0 {
        flags |= km::MOD_ALT;
    }
    if mask & MOD_CONTROL != 0 {
        flags |= km::MOD_CONTROL;
    }
    if mask & MOD_SHIFT != 0 {
        flags |= km::MOD_SHIFT;
    }
    if mask & MOD_WIN != 0 {
        flags |= km::MOD_WIN;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_masks_map_to_win32_flags() {
        use windows::Win32::UI::Input::KeyboardAndMouse as km;

        // Assert
        assert_eq!(to_win32_modifiers(MOD_ALT), km::MOD_ALT);
        assert_eq!(
            to_win32_modifiers(MOD_WIN | MOD_SHIFT),
            km::MOD_WIN | km::MOD_SHIFT
        );
        assert_eq!(to_win32_modifiers(0), HOT_KEY_MODIFIERS(0));
    }

    #[test]
    fn unknown_mask_bits_are_ignored() {
        assert_eq!(
            to_win32_modifiers(MOD_CONTROL | 0xFF00),
            windows::Win32::UI::Input::KeyboardAndMouse::MOD_CONTROL
        );
    }
}
