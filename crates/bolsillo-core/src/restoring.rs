use std::collections::HashSet;

/// Windows currently mid-restore.
///
/// A restored window re-enters the desktop's "shown" event stream, so
/// without this guard the auto-hide matcher would immediately re-hide the
/// window the user just brought back. Handles are inserted when a restore
/// starts and released by a scheduled [`Debounce`] task once the grace
/// period has elapsed.
#[derive(Debug, Default)]
pub struct RestoringSet {
    handles: HashSet<usize>,
}

impl RestoringSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, handle: usize) {
        self.handles.insert(handle);
    }

    pub fn remove(&mut self, handle: usize) {
        self.handles.remove(&handle);
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }

    pub fn contains(&self, handle: usize) -> bool {
        self.handles.contains(&handle)
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// A one-shot task that releases restore guards after the grace period.
///
/// `Release` is scheduled per window on a single restore. A bulk "restore
/// all" supersedes any pending `Release` tasks with one `ClearAll`, since
/// every entry was restored in the same burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debounce {
    /// Release one window's restore guard.
    Release(usize),
    /// Release every restore guard at once.
    ClearAll,
}

impl Debounce {
    /// Applies this task to the restoring set.
    pub fn apply(self, restoring: &mut RestoringSet) {
        match self {
            Self::Release(handle) => restoring.remove(handle),
            Self::ClearAll => restoring.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::timer::TimerQueue;

    const GRACE: Duration = Duration::from_millis(500);

    #[test]
    fn guard_blocks_until_released() {
        let mut restoring = RestoringSet::new();
        restoring.insert(0x10);

        assert!(restoring.contains(0x10));

        Debounce::Release(0x10).apply(&mut restoring);
        assert!(!restoring.contains(0x10));
    }

    #[test]
    fn release_only_affects_its_own_handle() {
        let mut restoring = RestoringSet::new();
        restoring.insert(1);
        restoring.insert(2);

        Debounce::Release(1).apply(&mut restoring);

        assert!(!restoring.contains(1));
        assert!(restoring.contains(2));
    }

    #[test]
    fn shown_within_grace_is_still_guarded() {
        // Arrange: a restore inserts the guard and schedules its release.
        let start = Instant::now();
        let mut restoring = RestoringSet::new();
        let mut timers = TimerQueue::new();
        restoring.insert(0x10);
        timers.schedule(start + GRACE, Debounce::Release(0x10));

        // Act: a "shown" event arrives 100ms later — before the deadline.
        let now = start + Duration::from_millis(100);
        for task in timers.pop_due(now) {
            task.apply(&mut restoring);
        }

        // Assert: the guard is still in place, so auto-hide must skip it.
        assert!(restoring.contains(0x10));
    }

    #[test]
    fn shown_after_grace_is_no_longer_guarded() {
        let start = Instant::now();
        let mut restoring = RestoringSet::new();
        let mut timers = TimerQueue::new();
        restoring.insert(0x10);
        timers.schedule(start + GRACE, Debounce::Release(0x10));

        // The deadline passes before the next "shown" event.
        let now = start + GRACE + Duration::from_millis(1);
        for task in timers.pop_due(now) {
            task.apply(&mut restoring);
        }

        assert!(!restoring.contains(0x10));
    }

    #[test]
    fn restore_all_supersedes_pending_releases_with_one_clear() {
        // Arrange: two windows already mid-restore with per-window timers.
        let start = Instant::now();
        let mut restoring = RestoringSet::new();
        let mut timers = TimerQueue::new();
        for handle in [1usize, 2] {
            restoring.insert(handle);
            timers.schedule(start + GRACE, Debounce::Release(handle));
        }

        // Act: restore-all cancels the per-window tasks, guards a third
        // window, and schedules a single bulk clear.
        timers.cancel_where(|t| matches!(t, Debounce::Release(_)));
        restoring.insert(3);
        timers.schedule(start + GRACE, Debounce::ClearAll);

        // Within the grace period nothing is released.
        for task in timers.pop_due(start + Duration::from_millis(100)) {
            task.apply(&mut restoring);
        }
        assert!(restoring.contains(1));
        assert!(restoring.contains(3));

        // After the grace period the single clear empties the whole set.
        for task in timers.pop_due(start + GRACE + Duration::from_millis(1)) {
            task.apply(&mut restoring);
        }
        assert!(restoring.is_empty());
        assert!(timers.is_empty());
    }
}
