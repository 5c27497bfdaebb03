use std::time::Instant;

use super::{SpringConfig, SpringState, Transition};

/// A spring closer than this to its target (px) may come to rest
const REST_DELTA: f32 = 0.5;
/// A spring slower than this (px/s) may come to rest
const REST_SPEED: f32 = 10.0;

/// Result of advancing an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult {
    /// Value did not change (animation not running)
    NoChange,
    /// Value changed and the animation keeps running
    Changed(f32),
    /// The animation reached its target on this step
    Completed(f32),
}

impl AdvanceResult {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        !matches!(self, AdvanceResult::NoChange)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, AdvanceResult::Completed(_))
    }
}

/// Animation state for a single scalar, driven by an externally supplied clock
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Current interpolated value
    current: f32,
    /// Value the animation is heading to
    target: f32,
    /// Value when animation started
    start: f32,
    /// Time when animation started
    start_time: Instant,
    /// Transition used for the next retarget
    transition: Transition,
    /// Spring simulation of the running animation, with the config it started with
    spring: Option<(SpringState, SpringConfig)>,
    running: bool,
}

impl AnimationState {
    pub fn new(initial_value: f32, transition: Transition, now: Instant) -> Self {
        Self {
            current: initial_value,
            target: initial_value,
            start: initial_value,
            start_time: now,
            transition,
            spring: None,
            running: false,
        }
    }

    /// Replace the transition. Takes effect on the next retarget.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Start animating to a new target value
    pub fn animate_to(&mut self, new_target: f32, now: Instant) {
        self.animate_to_with_velocity(new_target, 0.0, now);
    }

    /// Start animating to a new target, carrying `velocity` (units/s) into a spring.
    pub fn animate_to_with_velocity(&mut self, new_target: f32, velocity: f32, now: Instant) {
        // Don't restart if we're already animating to this target
        if self.running && new_target == self.target {
            return;
        }
        if !self.running && new_target == self.current && velocity == 0.0 {
            self.target = new_target;
            self.start = new_target;
            return;
        }

        self.start = self.current;
        self.target = new_target;
        self.start_time = now;
        self.running = true;
        self.spring = match self.transition.timing {
            super::TimingFunction::Spring(config) => Some((
                SpringState::new(self.current, velocity, new_target),
                config,
            )),
            _ => None,
        };
    }

    /// Advance the animation to `now`
    pub fn advance(&mut self, now: Instant) -> AdvanceResult {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let elapsed_secs = now.saturating_duration_since(self.start_time).as_secs_f32();

        if let Some((ref mut spring, ref config)) = self.spring {
            let position = spring.step(elapsed_secs, config);
            if spring.is_settled(REST_DELTA, REST_SPEED) {
                return self.finish();
            }
            self.current = position;
            return AdvanceResult::Changed(position);
        }

        let duration_secs = self.transition.duration_ms / 1000.0;
        if duration_secs <= 0.0 {
            return self.finish();
        }

        let t = (elapsed_secs / duration_secs).min(1.0);
        if t >= 1.0 {
            return self.finish();
        }
        let eased = self.transition.timing.evaluate(t);
        self.current = self.start + (self.target - self.start) * eased;
        AdvanceResult::Changed(self.current)
    }

    fn finish(&mut self) -> AdvanceResult {
        self.current = self.target;
        self.running = false;
        self.spring = None;
        AdvanceResult::Completed(self.target)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Get target value
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current velocity in units per second (zero outside spring animations)
    pub fn velocity(&self) -> f32 {
        self.spring
            .as_ref()
            .map(|(spring, _)| spring.velocity)
            .unwrap_or(0.0)
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.running = false;
        self.spring = None;
    }
}
