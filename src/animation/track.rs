//! A single in-flight interpolation toward a target value.
//!
//! A `Track` owns at most one running transition. Retargeting while a
//! transition is in flight cancels it and starts a fresh one from the
//! current interpolated value, so interrupted animations never stack and
//! never jump.

use std::time::Duration;

use super::spring::Spring;
use super::{Animatable, TimingFunction, Transition};

/// Result of advancing a track one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (at rest, same value, or still in delay)
    NoChange,
    /// Value changed to a new interpolated value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

// Settle threshold for spring-driven progress
const SPRING_SETTLE: f32 = 0.01;

pub struct Track<T: Animatable> {
    /// Value when the current transition started
    start: T,
    /// Current interpolated value
    current: T,
    /// Value the transition is heading toward
    target: T,
    /// Timeline position when the current transition started
    started_at: Duration,
    transition: Transition,
    /// Progress driver for spring timing (0 → 1, overshoot allowed)
    spring: Option<Spring>,
    at_rest: bool,
}

impl<T: Animatable> Track<T> {
    /// Create a track resting at `value`.
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            start: value.clone(),
            current: value.clone(),
            target: value,
            started_at: Duration::ZERO,
            transition,
            spring: None,
            at_rest: true,
        }
    }

    /// Begin a transition toward `target` starting at timeline position
    /// `now`. If a transition is in flight it is cancelled and the new one
    /// starts from the current interpolated value. A retarget to the value
    /// already being tracked is a no-op, so repeated identical triggers do
    /// not restart motion.
    pub fn retarget(&mut self, target: T, now: Duration) {
        if target == self.target {
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        self.started_at = now;
        self.at_rest = false;
        self.spring = self
            .transition
            .timing
            .spring_config()
            .map(|_| Spring::at(0.0));
    }

    /// Set the value immediately, cancelling any in-flight transition.
    pub fn jump_to(&mut self, value: T) {
        self.start = value.clone();
        self.current = value.clone();
        self.target = value;
        self.spring = None;
        self.at_rest = true;
    }

    /// Advance to timeline position `now`.
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<T> {
        if self.at_rest {
            return AdvanceResult::NoChange;
        }

        let elapsed = now.saturating_sub(self.started_at);
        if elapsed < self.transition.delay {
            return AdvanceResult::NoChange;
        }
        let active = elapsed - self.transition.delay;

        let (factor, finished) = match (&mut self.spring, &self.transition.timing) {
            (Some(spring), TimingFunction::Spring(config)) => {
                let f = spring.step(active, 1.0, config);
                (f, spring.is_settled(1.0, SPRING_SETTLE))
            }
            _ => {
                let duration = self.transition.duration;
                let t = if duration.is_zero() {
                    1.0
                } else {
                    (active.as_secs_f32() / duration.as_secs_f32()).min(1.0)
                };
                (self.transition.timing.evaluate(t), t >= 1.0)
            }
        };

        let new_value = if finished {
            // Rest exactly on the target so the final value is independent
            // of how many times the transition was interrupted.
            self.at_rest = true;
            self.spring = None;
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, factor)
        };

        if new_value == self.current {
            AdvanceResult::NoChange
        } else {
            self.current = new_value.clone();
            AdvanceResult::Changed(new_value)
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.at_rest
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}
