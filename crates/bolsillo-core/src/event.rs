/// A platform-agnostic window event.
///
/// These represent the desktop-wide notifications the visibility engine
/// reacts to. Platform crates translate raw OS events into these variants;
/// all interpretation (filtering, target matching, registry mutation)
/// happens later, on the thread that owns the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// A top-level window became visible on the desktop.
    Shown { hwnd: usize },

    /// A top-level window was destroyed.
    Destroyed { hwnd: usize },
}

impl WindowEvent {
    /// Returns the window handle associated with this event.
    pub fn hwnd(&self) -> usize {
        match self {
            Self::Shown { hwnd } | Self::Destroyed { hwnd } => *hwnd,
        }
    }
}

impl std::fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shown { hwnd } => write!(f, "Shown 0x{hwnd:X}"),
            Self::Destroyed { hwnd } => write!(f, "Destroyed 0x{hwnd:X}"),
        }
    }
}
