//! Easing curves controlling the rate of change of a timed transition.
//!
//! `Spring` is listed here so a [`crate::animation::Transition`] can select
//! physics-driven motion, but springs are integrated against real elapsed
//! time by [`crate::animation::Track`]; `evaluate` is only meaningful for
//! the duration-normalized curves.

use std::sync::Arc;

use super::spring::SpringConfig;

/// Curve applied to normalized time `t` in `[0, 1]`.
#[derive(Clone)]
pub enum TimingFunction {
    /// Constant speed
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Slow start and end, fast middle
    EaseInOut,
    /// CSS-style cubic-bezier control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Physics-driven motion, may overshoot; handled by `Track` with real time
    Spring(SpringConfig),
    /// User-supplied curve
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Map normalized time to an interpolation factor. The result may leave
    /// `[0, 1]` for overshooting curves.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            // Springs don't have a closed-form curve; plain t as fallback
            TimingFunction::Spring(_) => t,
            TimingFunction::Custom(f) => f(t),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }

    pub(crate) fn spring_config(&self) -> Option<SpringConfig> {
        match self {
            TimingFunction::Spring(config) => Some(*config),
            _ => None,
        }
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({x1}, {y1}, {x2}, {y2})")
            }
            TimingFunction::Spring(config) => write!(f, "Spring({config:?})"),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Evaluate a cubic bezier easing curve at time `t`, solving the horizontal
/// component with Newton-Raphson (control x values assumed in [0, 1]).
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    fn axis(t: f32, c1: f32, c2: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * c1 + 3.0 * mt * t * t * c2 + t * t * t
    }
    fn slope(t: f32, c1: f32, c2: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * c1 + 6.0 * mt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
    }

    let mut guess = t;
    for _ in 0..8 {
        let s = slope(guess, x1, x2);
        if s.abs() < 1e-6 {
            break;
        }
        guess -= (axis(guess, x1, x2) - t) / s;
    }
    axis(guess, y1, y2)
}
