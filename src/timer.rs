//! Polled timers owned by the carousel.
//!
//! A timer only exists as a value inside the state that owns it. Replacing or
//! dropping that value is the cancellation, so a torn-down carousel can never be
//! mutated by a stale callback.

use std::time::{Duration, Instant};

/// Repeating timer, like a browser interval.
///
/// A period too long for `Instant` to represent never fires.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    /// First fire is one full period after `now`
    pub fn new(period: Duration, now: Instant) -> Self {
        // A zero period would never let `poll` return
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now.checked_add(period),
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Number of periods that elapsed up to `now`. Each one is consumed.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(due) = self.next_due.filter(|due| *due <= now) {
            fired += 1;
            self.next_due = due.checked_add(self.period);
        }
        fired
    }
}

/// One-shot timer
#[derive(Debug, Clone)]
pub struct Timeout {
    due: Option<Instant>,
}

impl Timeout {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            due: now.checked_add(delay),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.due.is_some_and(|due| now >= due)
    }
}

/// Fire `timeout` if it is due, clearing the slot. Returns true when it fired.
pub fn take_due(slot: &mut Option<Timeout>, now: Instant) -> bool {
    if slot.as_ref().is_some_and(|t| t.is_due(now)) {
        *slot = None;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_interval_fires_each_period() {
        let t0 = Instant::now();
        let mut interval = Interval::new(ms(100), t0);

        assert_eq!(interval.poll(t0 + ms(99)), 0);
        assert_eq!(interval.poll(t0 + ms(100)), 1);
        assert_eq!(interval.poll(t0 + ms(150)), 0);
        assert_eq!(interval.poll(t0 + ms(200)), 1);
    }

    #[test]
    fn test_interval_catches_up_after_long_frame() {
        let t0 = Instant::now();
        let mut interval = Interval::new(ms(100), t0);

        assert_eq!(interval.poll(t0 + ms(350)), 3);
        assert_eq!(interval.next_due(), Some(t0 + ms(400)));
    }

    #[test]
    fn test_timeout_slot() {
        let t0 = Instant::now();
        let mut slot = Some(Timeout::new(ms(50), t0));

        assert!(!take_due(&mut slot, t0 + ms(49)));
        assert!(slot.is_some());
        assert!(take_due(&mut slot, t0 + ms(50)));
        assert!(slot.is_none());
        assert!(!take_due(&mut slot, t0 + ms(100)));
    }

    #[test]
    fn test_unrepresentable_deadlines_never_fire() {
        let t0 = Instant::now();
        let mut interval = Interval::new(Duration::MAX, t0);
        assert_eq!(interval.next_due(), None);
        assert_eq!(interval.poll(t0 + ms(10_000)), 0);

        let mut slot = Some(Timeout::new(Duration::MAX, t0));
        assert!(!take_due(&mut slot, t0 + ms(10_000)));
        assert!(slot.is_some());
    }
}
