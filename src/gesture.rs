//! Drag gesture handling: pointer tracking and the advance/retreat decision.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] when the pointer goes down on the track.
//! 2) Feed every pointer move to [`DragTracker::update`] to get the live offset.
//! 3) On release, [`DragTracker::finish`] returns the final offset and velocity,
//!    which [`interpret_drag_end`] turns into a [`DragDecision`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Any drag distance beyond this (px) counts as a swipe
pub const DRAG_BUFFER: f32 = 0.0;
/// A release faster than this (px/s) counts as a flick, whatever the distance
pub const VELOCITY_THRESHOLD: f32 = 500.0;

/// Only samples this recent contribute to the release velocity
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// What a finished drag asks the carousel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDecision {
    /// Dragged or flicked left: show the next card
    Advance,
    /// Dragged or flicked right: show the previous card
    Retreat,
    /// Snap back to the current card
    Stay,
}

/// Decide the outcome of a drag from its total offset and release velocity.
///
/// Leftward movement wins ties: it is checked first.
pub fn interpret_drag_end(offset_x: f32, velocity_x: f32) -> DragDecision {
    if offset_x < -DRAG_BUFFER || velocity_x < -VELOCITY_THRESHOLD {
        DragDecision::Advance
    } else if offset_x > DRAG_BUFFER || velocity_x > VELOCITY_THRESHOLD {
        DragDecision::Retreat
    } else {
        DragDecision::Stay
    }
}

/// Allowed range for the track offset while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConstraints {
    pub left: f32,
    pub right: f32,
}

impl DragConstraints {
    /// Keep the track between the first and the last card
    pub fn for_track(display_len: usize, track_item_offset: f32) -> Self {
        Self {
            left: -(track_item_offset * display_len.saturating_sub(1) as f32),
            right: 0.0,
        }
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.left, self.right)
    }
}

/// Final state of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Pointer displacement since the drag started, in px
    pub offset: f32,
    /// Pointer speed at release, in px/s
    pub velocity: f32,
}

/// Tracks one horizontal drag from pointer samples
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<f32>,
    history: VecDeque<(f32, Instant)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f32, now: Instant) {
        self.origin = Some(x);
        self.history.clear();
        self.history.push_back((x, now));
    }

    /// Record a pointer move, returning the offset from the drag start
    pub fn update(&mut self, x: f32, now: Instant) -> Option<f32> {
        let origin = self.origin?;
        self.history.push_back((x, now));
        self.prune(now);
        Some(x - origin)
    }

    /// End the drag and report its offset and velocity
    pub fn finish(&mut self, x: f32, now: Instant) -> Option<DragRelease> {
        let offset = self.update(x, now)?;
        let velocity = self.velocity();
        self.cancel();
        Some(DragRelease { offset, velocity })
    }

    /// Drop the current drag without a release
    pub fn cancel(&mut self) {
        self.origin = None;
        self.history.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Velocity over the samples inside the window, in px/s
    pub fn velocity(&self) -> f32 {
        let (Some(&(first_x, first_t)), Some(&(last_x, last_t))) =
            (self.history.front(), self.history.back())
        else {
            return 0.0;
        };
        let dt = last_t.saturating_duration_since(first_t).as_secs_f32();
        if dt <= f32::EPSILON {
            return 0.0;
        }
        (last_x - first_x) / dt
    }

    fn prune(&mut self, now: Instant) {
        // Keep at least two samples so a slow final move still has a velocity
        while self.history.len() > 2 {
            match self.history.front() {
                Some(&(_, t)) if now.saturating_duration_since(t) > VELOCITY_WINDOW => {
                    self.history.pop_front();
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_small_offsets_decide_direction() {
        assert_eq!(interpret_drag_end(-1.0, 0.0), DragDecision::Advance);
        assert_eq!(interpret_drag_end(1.0, 0.0), DragDecision::Retreat);
        assert_eq!(interpret_drag_end(0.0, 0.0), DragDecision::Stay);
    }

    #[test]
    fn test_flick_overrides_offset() {
        assert_eq!(interpret_drag_end(0.0, -600.0), DragDecision::Advance);
        assert_eq!(interpret_drag_end(0.0, 600.0), DragDecision::Retreat);
        // Below the threshold a zero offset stays put
        assert_eq!(interpret_drag_end(0.0, -500.0), DragDecision::Stay);
    }

    #[test]
    fn test_left_checked_first() {
        // Dragged right but flicked left: advance wins
        assert_eq!(interpret_drag_end(20.0, -900.0), DragDecision::Advance);
    }

    #[test]
    fn test_constraints_for_track() {
        let constraints = DragConstraints::for_track(4, 316.0);
        assert_eq!(constraints.left, -948.0);
        assert_eq!(constraints.right, 0.0);
        assert_eq!(constraints.clamp(-2000.0), -948.0);
        assert_eq!(constraints.clamp(40.0), 0.0);
        assert_eq!(constraints.clamp(-300.0), -300.0);
    }

    #[test]
    fn test_single_card_cannot_move() {
        let constraints = DragConstraints::for_track(1, 584.0);
        assert_eq!(constraints.clamp(-50.0), 0.0);
    }

    #[test]
    fn test_tracker_offset_and_velocity() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(10.0, t0), None);

        tracker.start(200.0, t0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.update(180.0, t0 + ms(20)), Some(-20.0));
        assert_eq!(tracker.update(160.0, t0 + ms(40)), Some(-40.0));

        let release = tracker.finish(140.0, t0 + ms(60)).unwrap();
        assert_eq!(release.offset, -60.0);
        assert!((release.velocity + 1000.0).abs() < 1.0);
        assert_eq!(
            interpret_drag_end(release.offset, release.velocity),
            DragDecision::Advance
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_velocity_ignores_old_samples() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.start(0.0, t0);
        // Fast move long ago, then holding still
        tracker.update(-300.0, t0 + ms(50));
        tracker.update(-300.0, t0 + ms(400));
        tracker.update(-300.0, t0 + ms(450));

        let release = tracker.finish(-300.0, t0 + ms(500)).unwrap();
        assert_eq!(release.offset, -300.0);
        assert_eq!(release.velocity, 0.0);
    }

    #[test]
    fn test_release_without_movement() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.start(50.0, t0);
        let release = tracker.finish(50.0, t0).unwrap();
        assert_eq!(release.offset, 0.0);
        assert_eq!(release.velocity, 0.0);
        assert_eq!(
            interpret_drag_end(release.offset, release.velocity),
            DragDecision::Stay
        );
    }
}
