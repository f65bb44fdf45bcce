mod animatable;
mod spring;
mod timing;
mod track;

pub use animatable::Animatable;
pub use spring::{Spring, SpringConfig};
pub use timing::TimingFunction;
pub use track::{AdvanceResult, Track};

use std::time::Duration;

/// How a value moves when it changes: a curve over a duration, after an
/// optional delay. Spring timing ignores `duration` and runs until the
/// simulation settles.
#[derive(Clone, Debug)]
pub struct Transition {
    pub duration: Duration,
    pub timing: TimingFunction,
    pub delay: Duration,
}

impl Transition {
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            timing,
            delay: Duration::ZERO,
        }
    }

    /// Physics-driven transition; runs until the spring settles.
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            duration: Duration::from_secs(1), // upper bound hint, springs end on settle
            timing: TimingFunction::Spring(config),
            delay: Duration::ZERO,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(SpringConfig::DEFAULT)
    }
}
