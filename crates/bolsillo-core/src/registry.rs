/// One currently hidden window.
///
/// The registry holds only a weak reference to the window: `handle` is the
/// raw OS handle value and may stop referring to a live window at any time
/// (the owning process can exit while the window is hidden). `title` is a
/// snapshot taken at hide time for the tray tooltip; it is not kept live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenWindow {
    /// Raw window handle value.
    pub handle: usize,
    /// Tray icon identifier, 1:1 with `handle` while hidden.
    pub icon_id: u32,
    /// Window title captured at hide time.
    pub title: String,
}

/// Error returned by [`WindowRegistry::add`] when the handle is already
/// registered. Callers treat this as an expected race (duplicate show
/// events, repeated hotkey presses) and no-op silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyHidden;

/// The authoritative mapping of hidden windows to their tray icons.
///
/// Invariants: each `handle` appears in at most one entry, and each
/// `icon_id` is unique among entries. The registry never touches the OS;
/// showing/hiding real windows and creating/destroying tray icons is the
/// controller's job, performed around these calls.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    entries: Vec<HiddenWindow>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, rejecting a handle that is already registered.
    pub fn add(&mut self, entry: HiddenWindow) -> Result<(), AlreadyHidden> {
        if self.contains(entry.handle) {
            return Err(AlreadyHidden);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Removes and returns the entry with the given icon identifier.
    pub fn remove_by_icon(&mut self, icon_id: u32) -> Option<HiddenWindow> {
        let idx = self.entries.iter().position(|e| e.icon_id == icon_id)?;
        Some(self.entries.remove(idx))
    }

    /// Removes and returns the entry with the given window handle.
    pub fn remove_by_handle(&mut self, handle: usize) -> Option<HiddenWindow> {
        let idx = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(idx))
    }

    /// Returns whether a handle is currently registered.
    pub fn contains(&self, handle: usize) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// All entries, in hide order.
    pub fn all(&self) -> &[HiddenWindow] {
        &self.entries
    }

    /// Removes and returns every entry. Used by "restore all".
    pub fn drain_all(&mut self) -> Vec<HiddenWindow> {
        std::mem::take(&mut self.entries)
    }

    /// Raw handle values for the recovery record, in hide order.
    pub fn handles(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.handle as u64).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(handle: usize, title: &str) -> HiddenWindow {
        HiddenWindow {
            handle,
            icon_id: handle as u32,
            title: title.into(),
        }
    }

    #[test]
    fn add_then_remove_by_icon_round_trips() {
        // Arrange
        let mut registry = WindowRegistry::new();
        registry.add(entry(0x1234, "Notes")).unwrap();

        // Act
        let removed = registry.remove_by_icon(0x1234);

        // Assert
        assert_eq!(removed.unwrap().title, "Notes");
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_handle_is_rejected() {
        // Arrange
        let mut registry = WindowRegistry::new();
        registry.add(entry(0x1234, "Notes")).unwrap();

        // Act
        let second = registry.add(entry(0x1234, "Notes again"));

        // Assert
        assert_eq!(second, Err(AlreadyHidden));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_by_handle_returns_the_entry() {
        let mut registry = WindowRegistry::new();
        registry.add(entry(10, "A")).unwrap();
        registry.add(entry(20, "B")).unwrap();

        let removed = registry.remove_by_handle(10).unwrap();

        assert_eq!(removed.icon_id, 10);
        assert!(!registry.contains(10));
        assert!(registry.contains(20));
    }

    #[test]
    fn lookup_miss_returns_none() {
        let mut registry = WindowRegistry::new();
        assert!(registry.remove_by_icon(99).is_none());
        assert!(registry.remove_by_handle(99).is_none());
    }

    #[test]
    fn drain_all_empties_the_registry_in_hide_order() {
        let mut registry = WindowRegistry::new();
        registry.add(entry(1, "A")).unwrap();
        registry.add(entry(2, "B")).unwrap();

        let drained = registry.drain_all();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].handle, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn handles_dump_matches_entries() {
        let mut registry = WindowRegistry::new();
        registry.add(entry(0xA0, "A")).unwrap();
        registry.add(entry(0xB0, "B")).unwrap();

        assert_eq!(registry.handles(), vec![0xA0, 0xB0]);
    }
}
