use std::time::Duration;

/// Parameters for the damped spring model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Pull strength toward the target (default: 100.0)
    pub stiffness: f32,
    /// Resistance to oscillation (default: 15.0)
    pub damping: f32,
    /// Inertia of the animated value (default: 1.0)
    pub mass: f32,
}

impl SpringConfig {
    /// Balanced entrance with a small overshoot
    pub const DEFAULT: Self = Self {
        stiffness: 100.0,
        damping: 15.0,
        mass: 1.0,
    };

    /// Settles without visible bounce
    pub const SOFT: Self = Self {
        stiffness: 100.0,
        damping: 20.0,
        mass: 1.0,
    };

    /// Low mass, low stiffness: slow, sweeping motion
    pub const DRAMATIC: Self = Self {
        stiffness: 80.0,
        damping: 18.0,
        mass: 0.5,
    };

    /// Quick response for small elements
    pub const CRISP: Self = Self {
        stiffness: 120.0,
        damping: 20.0,
        mass: 1.0,
    };

    /// Loose pointer-trailing spring (visible lag)
    pub const TRAIL: Self = Self {
        stiffness: 300.0,
        damping: 25.0,
        mass: 0.5,
    };

    /// Tight pointer-trailing spring (barely perceptible lag)
    pub const SNAP_TRAIL: Self = Self {
        stiffness: 700.0,
        damping: 25.0,
        mass: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A damped second-order simulation of a scalar chasing a target.
///
/// Unlike a fixed-duration curve the target may move between steps; velocity
/// carries across retargets so the trajectory stays continuous. Stepping is
/// driven by an explicit timeline (elapsed time since some caller-defined
/// origin), never by sampling the wall clock internally.
#[derive(Clone, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    last_t: Option<Duration>,
}

// Timestep cap for numerical stability (~30fps floor)
const MAX_STEP_SECS: f32 = 0.033;

impl Spring {
    /// Create a spring resting at `value` with zero velocity.
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            last_t: None,
        }
    }

    /// Advance the simulation to time `now`, pulling toward `target`.
    /// Returns the new value (may overshoot the target).
    pub fn step(&mut self, now: Duration, target: f32, config: &SpringConfig) -> f32 {
        let dt = match self.last_t {
            Some(last) if now > last => (now - last).as_secs_f32(),
            // Repeated or backwards timestamps integrate nothing and leave
            // the timeline origin where it was
            Some(_) => return self.value,
            None => {
                // First step establishes the timeline origin
                self.last_t = Some(now);
                return self.value;
            }
        };
        self.last_t = Some(now);

        if dt < 1e-6 {
            return self.value;
        }

        let dt = dt.min(MAX_STEP_SECS);

        // F = -k*x - c*v, semi-implicit Euler
        let displacement = self.value - target;
        let force = -config.stiffness * displacement - config.damping * self.velocity;
        let acceleration = force / config.mass.max(1e-6);

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;
        self.value
    }

    /// Stop all motion and rest exactly at `value`.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// True once the value is within `threshold` of the target and motion
    /// has died down.
    pub fn is_settled(&self, target: f32, threshold: f32) -> bool {
        (self.value - target).abs() < threshold && self.velocity.abs() < threshold
    }
}
