//! Index rules for the carousel.
//!
//! [`IndexController`] knows nothing about time or pixels. It only answers
//! "which slot is current after this event", for both looping and clamped modes.
//!
//! In looping mode the display sequence has one extra slot at the end, a copy of
//! the first card. Moving forward off the last real card lands on that copy, and
//! [`IndexController::wrap`] later snaps back to slot 0 once the track has settled.

/// Current position within the display sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexController {
    /// Number of original cards (N)
    count: usize,
    looping: bool,
    current: usize,
}

impl IndexController {
    /// `count` must be at least 1; callers validate this at construction.
    pub fn new(count: usize, looping: bool) -> Self {
        debug_assert!(count >= 1, "carousel needs at least one card");
        Self {
            count: count.max(1),
            looping,
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Length of the display sequence: N, or N + 1 with the loop duplicate
    pub fn display_len(&self) -> usize {
        if self.looping {
            self.count + 1
        } else {
            self.count
        }
    }

    fn last_original(&self) -> usize {
        self.count - 1
    }

    fn last_slot(&self) -> usize {
        self.display_len() - 1
    }

    /// The original card shown at the current slot (the duplicate maps to 0)
    pub fn active_dot(&self) -> usize {
        self.current % self.count
    }

    /// True while sitting on the trailing duplicate of the first card
    pub fn on_duplicate(&self) -> bool {
        self.looping && self.current == self.count
    }

    pub fn advance(&mut self) -> usize {
        self.current = if self.looping && self.current == self.last_original() {
            self.count
        } else {
            (self.current + 1).min(self.last_slot())
        };
        self.current
    }

    /// Moving back from slot 0 while looping jumps straight to the last real card,
    /// without passing over the duplicate.
    pub fn retreat(&mut self) -> usize {
        self.current = if self.looping && self.current == 0 {
            self.last_original()
        } else {
            self.current.saturating_sub(1)
        };
        self.current
    }

    /// Select an original card. Any integer is accepted and taken modulo N.
    pub fn select(&mut self, index: i64) -> usize {
        self.current = index.rem_euclid(self.count as i64) as usize;
        self.current
    }

    /// One autoplay step
    pub fn tick(&mut self) -> usize {
        self.current = if self.looping && self.current == self.last_original() {
            self.count
        } else if self.current == self.last_slot() {
            if self.looping {
                0
            } else {
                self.current
            }
        } else {
            self.current + 1
        };
        self.current
    }

    /// Snap from the duplicate back to slot 0. Returns true if a snap happened.
    pub fn wrap(&mut self) -> bool {
        if self.looping && self.current == self.last_slot() {
            self.current = 0;
            true
        } else {
            false
        }
    }

    /// Apply a new card count and loop flag, keeping the index inside the new range.
    pub fn reconfigure(&mut self, count: usize, looping: bool) {
        debug_assert!(count >= 1, "carousel needs at least one card");
        self.count = count.max(1);
        self.looping = looping;
        self.current = self.current.min(self.last_slot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_clamps_without_loop() {
        let mut index = IndexController::new(4, false);
        for _ in 0..10 {
            index.advance();
        }
        assert_eq!(index.current(), 3);
    }

    #[test]
    fn test_retreat_clamps_at_zero() {
        let mut index = IndexController::new(4, false);
        assert_eq!(index.retreat(), 0);
        index.advance();
        assert_eq!(index.retreat(), 0);
    }

    #[test]
    fn test_advance_onto_duplicate_when_looping() {
        let mut index = IndexController::new(3, true);
        index.advance();
        index.advance();
        assert_eq!(index.current(), 2);
        assert_eq!(index.advance(), 3);
        assert!(index.on_duplicate());
        assert_eq!(index.active_dot(), 0);
        // Already on the last slot
        assert_eq!(index.advance(), 3);
    }

    #[test]
    fn test_retreat_from_zero_jumps_to_last_original() {
        let mut index = IndexController::new(4, true);
        assert_eq!(index.retreat(), 3);
        assert!(!index.on_duplicate());
    }

    #[test]
    fn test_select_wraps_any_integer() {
        let mut index = IndexController::new(4, true);
        assert_eq!(index.select(2), 2);
        assert_eq!(index.select(4), 0);
        assert_eq!(index.select(9), 1);
        assert_eq!(index.select(-1), 3);
        assert_eq!(index.select(i64::MIN), (i64::MIN).rem_euclid(4) as usize);
    }

    #[test]
    fn test_tick_holds_at_end_without_loop() {
        let mut index = IndexController::new(2, false);
        assert_eq!(index.tick(), 1);
        assert_eq!(index.tick(), 1);
    }

    #[test]
    fn test_tick_moves_onto_duplicate_then_wraps() {
        let mut index = IndexController::new(2, true);
        assert_eq!(index.tick(), 1);
        assert_eq!(index.tick(), 2);
        // Ticking again before the track settled wraps straight to 0
        assert_eq!(index.tick(), 0);
    }

    #[test]
    fn test_wrap_only_from_duplicate() {
        let mut index = IndexController::new(2, true);
        assert!(!index.wrap());
        index.select(1);
        assert!(!index.wrap());
        index.advance();
        assert!(index.wrap());
        assert_eq!(index.current(), 0);

        let mut clamped = IndexController::new(2, false);
        clamped.advance();
        assert!(!clamped.wrap());
        assert_eq!(clamped.current(), 1);
    }

    #[test]
    fn test_single_card() {
        let mut index = IndexController::new(1, false);
        assert_eq!(index.advance(), 0);
        assert_eq!(index.tick(), 0);
        assert_eq!(index.select(5), 0);

        let mut looping = IndexController::new(1, true);
        assert_eq!(looping.advance(), 1);
        assert!(looping.wrap());
        assert_eq!(looping.retreat(), 0);
    }

    #[test]
    fn test_reconfigure_clamps_index() {
        let mut index = IndexController::new(5, true);
        index.select(4);
        index.advance();
        assert_eq!(index.current(), 5);

        index.reconfigure(3, false);
        assert_eq!(index.current(), 2);
        assert_eq!(index.display_len(), 3);
    }

    #[test]
    fn test_bounds_hold_over_long_sequences() {
        for count in 1..=6 {
            for looping in [false, true] {
                let mut index = IndexController::new(count, looping);
                let limit = if looping { count } else { count - 1 };
                // Deterministic mix of moves
                for step in 0..200usize {
                    match step % 7 {
                        0 | 3 | 5 => index.advance(),
                        1 | 4 => index.retreat(),
                        2 => index.tick(),
                        _ => {
                            index.wrap();
                            index.current()
                        }
                    };
                    assert!(index.current() <= limit);
                }
            }
        }
    }
}
