use bolsillo_core::WindowEvent;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{EVENT_OBJECT_DESTROY, EVENT_OBJECT_SHOW};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or menu item.
const OBJID_WINDOW: i32 = 0;

/// Translates a raw Win32 event into a platform-agnostic `WindowEvent`.
///
/// Returns `None` for events we don't care about: child-object events and
/// event types irrelevant to window visibility. No filtering beyond that
/// happens here — candidate checks and target matching run later on the
/// daemon thread, which owns the engine state.
pub fn translate(event: u32, hwnd: HWND, id_object: i32) -> Option<WindowEvent> {
    // Ignore events on child objects (scrollbars, buttons, etc.).
    // We only care about top-level window events.
    if id_object != OBJID_WINDOW {
        return None;
    }

    let hwnd_val = hwnd.0 as usize;

    match event {
        e if e == EVENT_OBJECT_SHOW => Some(WindowEvent::Shown { hwnd: hwnd_val }),
        e if e == EVENT_OBJECT_DESTROY => Some(WindowEvent::Destroyed { hwnd: hwnd_val }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hwnd(value: usize) -> HWND {
        HWND(value as *mut _)
    }

    #[test]
    fn show_event_translates_to_shown() {
        // Act
        let event = translate(EVENT_OBJECT_SHOW, hwnd(0x42), OBJID_WINDOW);

        // Assert
        assert_eq!(event, Some(WindowEvent::Shown { hwnd: 0x42 }));
    }

    #[test]
    fn destroy_event_translates_to_destroyed() {
        let event = translate(EVENT_OBJECT_DESTROY, hwnd(0x42), OBJID_WINDOW);

        assert_eq!(event, Some(WindowEvent::Destroyed { hwnd: 0x42 }));
    }

    #[test]
    fn child_object_events_are_dropped() {
        // OBJID_CLIENT and friends are negative or non-zero ids.
        assert_eq!(translate(EVENT_OBJECT_SHOW, hwnd(0x42), -4), None);
        assert_eq!(translate(EVENT_OBJECT_SHOW, hwnd(0x42), 1), None);
    }

    #[test]
    fn unrelated_event_types_are_dropped() {
        // EVENT_SYSTEM_FOREGROUND
        assert_eq!(translate(0x0003, hwnd(0x42), OBJID_WINDOW), None);
    }
}
