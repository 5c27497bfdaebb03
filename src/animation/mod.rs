//! The tween engine that settles the track and the indicator dots.

mod spring;
mod state;
mod timing;

pub use spring::{SpringConfig, SpringState};
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

/// Configuration for how a value should animate when its target changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds (ignored by springs)
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Create a spring-based transition with the given configuration
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            duration_ms: 0.0,
            timing: TimingFunction::Spring(config),
        }
    }

    /// A zero-duration transition: the value jumps straight to its target
    pub fn instant() -> Self {
        Self::new(0.0, TimingFunction::Linear)
    }

    pub fn is_instant(&self) -> bool {
        !self.timing.is_spring() && self.duration_ms <= 0.0
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(SpringConfig::DEFAULT)
    }
}
