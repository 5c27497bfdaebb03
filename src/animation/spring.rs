/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring (default: 300.0)
    pub stiffness: f32,
    /// Damping coefficient (default: 30.0)
    pub damping: f32,
}

impl SpringConfig {
    /// Slightly under-damped spring used to settle the carousel track
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 300.0,
        damping: 30.0,
    };

    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::DEFAULT
        }
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Returns a description of the first invalid parameter, if any
    pub(crate) fn check(&self) -> Result<(), &'static str> {
        if !(self.mass > 0.0) {
            return Err("mass must be positive");
        }
        if !(self.stiffness > 0.0) {
            return Err("stiffness must be positive");
        }
        if !(self.damping >= 0.0) {
            return Err("damping must not be negative");
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Largest integration step, in seconds. Longer frames are split into sub-steps.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// State for spring physics simulation, in absolute units (px and px/s)
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Rest position the spring pulls toward
    pub target: f32,
    /// Last evaluation time
    pub last_t: f32,
}

impl SpringState {
    /// Create a spring at `position` moving with `velocity`, pulled toward `target`
    pub fn new(position: f32, velocity: f32, target: f32) -> Self {
        Self {
            position,
            velocity,
            target,
            last_t: 0.0,
        }
    }

    /// Step the simulation forward to `elapsed_secs` (total time since the spring started).
    ///
    /// Returns the current position, which may overshoot the target.
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let mut remaining = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = self.last_t.max(elapsed_secs);

        while remaining > 1e-6 {
            let dt = remaining.min(MAX_STEP_SECS);
            remaining -= dt;

            // F = -k * x - c * v
            let displacement = self.position - self.target;
            let force = -config.stiffness * displacement - config.damping * self.velocity;
            let acceleration = force / config.mass;

            // Semi-implicit Euler
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
        }

        self.position
    }

    /// Check if the spring has come to rest at its target
    pub fn is_settled(&self, rest_delta: f32, rest_speed: f32) -> bool {
        (self.position - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed
    }
}
