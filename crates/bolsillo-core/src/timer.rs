use std::time::Instant;

/// A queue of scheduled one-shot tasks tied to the daemon's event loop.
///
/// The daemon blocks in `recv_timeout` until the earliest deadline, then
/// pops whatever is due and applies it. This keeps debounce timers on the
/// same thread as the state they mutate — no OS timer callbacks, no locks.
#[derive(Debug)]
pub struct TimerQueue<T> {
    tasks: Vec<(Instant, T)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a task to fire at the given instant.
    pub fn schedule(&mut self, fires_at: Instant, task: T) {
        self.tasks.push((fires_at, task));
    }

    /// Cancels every pending task matching the predicate.
    pub fn cancel_where(&mut self, pred: impl Fn(&T) -> bool) {
        self.tasks.retain(|(_, task)| !pred(task));
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|(at, _)| *at).min()
    }

    /// Removes and returns every task due at `now`, in schedule order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.tasks.len());
        for (at, task) in self.tasks.drain(..) {
            if at <= now {
                due.push(task);
            } else {
                remaining.push((at, task));
            }
        }
        self.tasks = remaining;
        due
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn pop_due_returns_only_elapsed_tasks() {
        // Arrange
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(100), "early");
        timers.schedule(start + Duration::from_millis(900), "late");

        // Act
        let due = timers.pop_due(start + Duration::from_millis(500));

        // Assert
        assert_eq!(due, vec!["early"]);
        assert!(!timers.is_empty());
    }

    #[test]
    fn next_deadline_is_the_earliest() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(900), "late");
        timers.schedule(start + Duration::from_millis(100), "early");

        assert_eq!(
            timers.next_deadline(),
            Some(start + Duration::from_millis(100))
        );
    }

    #[test]
    fn empty_queue_has_no_deadline() {
        let timers: TimerQueue<&str> = TimerQueue::new();
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn cancel_where_drops_matching_tasks() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start, "keep");
        timers.schedule(start, "drop");
        timers.schedule(start, "drop");

        timers.cancel_where(|t| *t == "drop");

        assert_eq!(timers.pop_due(start), vec!["keep"]);
    }

    #[test]
    fn due_tasks_preserve_schedule_order() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(10), 1);
        timers.schedule(start + Duration::from_millis(20), 2);
        timers.schedule(start + Duration::from_millis(30), 3);

        let due = timers.pop_due(start + Duration::from_millis(25));

        assert_eq!(due, vec![1, 2]);
    }
}
