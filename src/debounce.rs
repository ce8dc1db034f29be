//! Search Debounce
//!
//! State machine behind the filter box. Time is passed in explicitly (ms), so
//! the component drives it from a browser timer and tests from a fake clock.
//!
//! `Idle --edit--> Pending --quiet period, text unchanged--> Querying --settle--> Idle`,
//! and any edit from `Pending` or `Querying` restarts at `Pending`.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Pending { filter: String, deadline: u64 },
    Querying { filter: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedFilter {
    quiet_period_ms: u64,
    phase: SearchPhase,
}

impl DebouncedFilter {
    pub fn new(quiet_period_ms: u64) -> Self {
        Self {
            quiet_period_ms,
            phase: SearchPhase::Idle,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Record an edit at `now` and return when it becomes due
    pub fn edit(&mut self, filter: impl Into<String>, now: u64) -> u64 {
        let deadline = now + self.quiet_period_ms;
        self.phase = SearchPhase::Pending {
            filter: filter.into(),
            deadline,
        };
        deadline
    }

    /// Filter to look up, if the pending edit is due and the box still shows it
    pub fn poll(&mut self, now: u64, current_filter: &str) -> Option<String> {
        match &self.phase {
            SearchPhase::Pending { filter, deadline } if now >= *deadline && filter == current_filter => {
                let filter = filter.clone();
                self.phase = SearchPhase::Querying { filter: filter.clone() };
                Some(filter)
            }
            _ => None,
        }
    }

    /// The lookup came back (either way)
    pub fn settle(&mut self) {
        if matches!(self.phase, SearchPhase::Querying { .. }) {
            self.phase = SearchPhase::Idle;
        }
    }
}

/// A scheduled callback that can be called off before it runs
pub trait CancelTimer {
    fn cancel_timer(self);
}

impl CancelTimer for gloo_timers::callback::Timeout {
    fn cancel_timer(self) {
        let _ = self.cancel();
    }
}

/// Holds at most one live timer; arming a new one cancels the old
#[derive(Debug)]
pub struct TimerSlot<T: CancelTimer> {
    pending: Option<T>,
}

impl<T: CancelTimer> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: CancelTimer> TimerSlot<T> {
    pub fn replace(&mut self, next: T) {
        if let Some(old) = self.pending.replace(next) {
            old.cancel_timer();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel_timer();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelTimer for FakeTimer {
        fn cancel_timer(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    /// Replay edits on a 1ms fake clock and collect (time, filter) lookups
    fn replay(edits: &[(u64, &str)], until: u64) -> Vec<(u64, String)> {
        let mut debounce = DebouncedFilter::new(500);
        let mut current = String::new();
        let mut fired = Vec::new();
        for now in 0..=until {
            if let Some((_, text)) = edits.iter().find(|(at, _)| *at == now) {
                current = text.to_string();
                debounce.edit(*text, now);
            }
            if let Some(filter) = debounce.poll(now, &current) {
                fired.push((now, filter));
            }
        }
        fired
    }

    #[test]
    fn test_burst_inside_quiet_period_fires_once() {
        let fired = replay(&[(0, "a"), (100, "ab"), (400, "abc")], 2000);
        assert_eq!(fired, vec![(900, "abc".to_string())]);
    }

    #[test]
    fn test_gap_longer_than_quiet_period_fires_in_between() {
        // 100ms -> 700ms is a 600ms pause, so "ab" is due at 600
        let fired = replay(&[(0, "a"), (100, "ab"), (700, "abc")], 2000);
        assert_eq!(
            fired,
            vec![(600, "ab".to_string()), (1200, "abc".to_string())]
        );
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut debounce = DebouncedFilter::new(500);
        let deadline = debounce.edit("salt", 10);
        assert_eq!(deadline, 510);
        assert_eq!(debounce.poll(509, "salt"), None);
        assert_eq!(debounce.poll(510, "salt"), Some("salt".to_string()));
        assert_eq!(debounce.poll(511, "salt"), None);
    }

    #[test]
    fn test_changed_text_does_not_fire() {
        let mut debounce = DebouncedFilter::new(500);
        let deadline = debounce.edit("sa", 0);
        assert_eq!(debounce.poll(deadline, "sal"), None);
        assert!(matches!(debounce.phase(), SearchPhase::Pending { .. }));
    }

    #[test]
    fn test_edit_while_querying_restarts_pending() {
        let mut debounce = DebouncedFilter::new(500);
        let deadline = debounce.edit("salt", 0);
        debounce.poll(deadline, "salt");
        assert_eq!(debounce.phase(), &SearchPhase::Querying { filter: "salt".to_string() });

        debounce.edit("salty", 600);
        assert_eq!(
            debounce.phase(),
            &SearchPhase::Pending { filter: "salty".to_string(), deadline: 1100 }
        );

        // The earlier lookup landing does not cancel the new pending edit
        debounce.settle();
        assert!(matches!(debounce.phase(), SearchPhase::Pending { .. }));
    }

    #[test]
    fn test_settle_returns_to_idle() {
        let mut debounce = DebouncedFilter::new(500);
        debounce.edit("", 0);
        debounce.poll(500, "");
        debounce.settle();
        assert_eq!(debounce.phase(), &SearchPhase::Idle);
    }

    #[test]
    fn test_timer_slot_cancels_previous_on_replace() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::default();
        for id in 1..=3 {
            slot.replace(FakeTimer { id, cancelled: cancelled.clone() });
        }
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(slot.is_armed());
    }

    #[test]
    fn test_timer_slot_cancel_on_teardown() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::default();
        slot.replace(FakeTimer { id: 7, cancelled: cancelled.clone() });

        slot.cancel();
        assert_eq!(*cancelled.borrow(), vec![7]);
        assert!(!slot.is_armed());

        // Nothing left to cancel
        slot.cancel();
        assert_eq!(cancelled.borrow().len(), 1);
    }
}
