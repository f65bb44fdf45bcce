//! Visual attribute states and the hidden/shown variant tables that drive
//! reveal animations.
//!
//! A [`MotionSpec`] is an explicit finite-state description of one animated
//! element: a named `hidden` state, a named `shown` state, and the
//! transition between them. The host maps the interpolated [`VisualState`]
//! to whatever its rendering layer understands.

use std::time::Duration;

use crate::animation::{Animatable, SpringConfig, TimingFunction, Track, Transition};
use crate::geometry::Vec2;

/// Target visual attributes of one named animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// 0.0 transparent .. 1.0 opaque
    pub opacity: f32,
    /// Translation from the element's resting position, in pixels
    pub offset: Vec2,
    /// Uniform scale, 1.0 = natural size
    pub scale: f32,
    /// Rotation in degrees
    pub rotate: f32,
    /// Blur radius in pixels
    pub blur: f32,
}

impl VisualState {
    /// The fully revealed resting state.
    pub const SHOWN: VisualState = VisualState {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
        rotate: 0.0,
        blur: 0.0,
    };

    /// A hidden state sunk `y` pixels below resting position.
    pub fn sunk(y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::new(0.0, y),
            ..Self::SHOWN
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur = radius;
        self
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SHOWN
    }
}

impl Animatable for VisualState {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            opacity: f32::lerp(&from.opacity, &to.opacity, t),
            offset: Vec2::lerp(&from.offset, &to.offset, t),
            scale: f32::lerp(&from.scale, &to.scale, t),
            rotate: f32::lerp(&from.rotate, &to.rotate, t),
            blur: f32::lerp(&from.blur, &to.blur, t),
        }
    }
}

/// The two-state transition table of one animated element.
#[derive(Debug, Clone)]
pub struct MotionSpec {
    pub hidden: VisualState,
    pub shown: VisualState,
    pub transition: Transition,
}

impl MotionSpec {
    pub fn new(hidden: VisualState, shown: VisualState, transition: Transition) -> Self {
        Self {
            hidden,
            shown,
            transition,
        }
    }

    /// Dramatic hero entrance: rises 100px, grows from 0.7, untilts from
    /// 10 degrees, sharpens from an 8px blur, on a low-mass spring.
    pub fn hero_item() -> Self {
        Self::new(
            VisualState::sunk(100.0)
                .with_scale(0.7)
                .with_rotate(10.0)
                .with_blur(8.0),
            VisualState::SHOWN,
            Transition::spring(SpringConfig::DRAMATIC),
        )
    }

    /// Short hop for single words in the provider list.
    pub fn provider_word() -> Self {
        Self::new(
            VisualState::sunk(20.0).with_scale(0.8),
            VisualState::SHOWN,
            Transition::spring(SpringConfig::CRISP),
        )
    }

    /// Card entrance used by the features grid.
    pub fn feature_card() -> Self {
        Self::new(
            VisualState::sunk(50.0).with_scale(0.9),
            VisualState::SHOWN,
            Transition::spring(SpringConfig::DEFAULT),
        )
    }

    /// Call-to-action block entrance.
    pub fn cta_item() -> Self {
        Self::new(
            VisualState::sunk(30.0),
            VisualState::SHOWN,
            Transition::spring(SpringConfig::SOFT),
        )
    }

    /// Footer fade-in: timed ease-out rather than a spring.
    pub fn footer_block() -> Self {
        Self::new(
            VisualState::sunk(20.0),
            VisualState::SHOWN,
            Transition::new(Duration::from_millis(600), TimingFunction::EaseOut),
        )
    }

    /// Dashboard tile rise used by the simulated dashboard preview.
    pub fn dashboard_tile() -> Self {
        Self::new(
            VisualState::sunk(20.0),
            VisualState::SHOWN,
            Transition::new(Duration::from_millis(500), TimingFunction::EaseOut),
        )
    }
}

impl Default for MotionSpec {
    fn default() -> Self {
        Self::feature_card()
    }
}

/// Hover/press scale emphasis for interactive elements.
///
/// Both booleans map to a scale target through a single track, so rapid
/// hover/press churn retargets the one in-flight interpolation instead of
/// stacking animations. Press wins over hover.
pub struct Emphasis {
    track: Track<f32>,
    hovered: bool,
    pressed: bool,
    hover_scale: f32,
    press_scale: f32,
}

impl Emphasis {
    pub fn new(hover_scale: f32, press_scale: f32) -> Self {
        Self {
            track: Track::new(1.0, Transition::spring(SpringConfig::CRISP)),
            hovered: false,
            pressed: false,
            hover_scale,
            press_scale,
        }
    }

    /// Standard button emphasis: grow to 1.05 on hover, shrink to 0.95
    /// while pressed.
    pub fn button() -> Self {
        Self::new(1.05, 0.95)
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Duration) {
        self.hovered = hovered;
        self.track.retarget(self.target_scale(), now);
    }

    pub fn set_pressed(&mut self, pressed: bool, now: Duration) {
        self.pressed = pressed;
        self.track.retarget(self.target_scale(), now);
    }

    fn target_scale(&self) -> f32 {
        if self.pressed {
            self.press_scale
        } else if self.hovered {
            self.hover_scale
        } else {
            1.0
        }
    }

    pub fn step(&mut self, now: Duration) -> bool {
        self.track.advance(now).is_changed()
    }

    pub fn scale(&self) -> f32 {
        *self.track.current()
    }

    pub fn is_animating(&self) -> bool {
        self.track.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_lerp_componentwise() {
        let hidden = VisualState::sunk(100.0).with_scale(0.7).with_blur(8.0);
        let mid = VisualState::lerp(&hidden, &VisualState::SHOWN, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.offset.y, 50.0);
        assert!((mid.scale - 0.85).abs() < 1e-6);
        assert_eq!(mid.blur, 4.0);
    }

    #[test]
    fn test_presets_hide_fully() {
        for spec in [
            MotionSpec::hero_item(),
            MotionSpec::provider_word(),
            MotionSpec::feature_card(),
            MotionSpec::cta_item(),
            MotionSpec::footer_block(),
        ] {
            assert_eq!(spec.hidden.opacity, 0.0);
            assert_eq!(spec.shown, VisualState::SHOWN);
        }
    }

    #[test]
    fn test_emphasis_press_wins_over_hover() {
        let mut emphasis = Emphasis::button();
        let now = Duration::ZERO;
        emphasis.set_hovered(true, now);
        emphasis.set_pressed(true, now);
        // Settle the spring
        for i in 1..300 {
            emphasis.step(Duration::from_secs_f32(i as f32 / 60.0));
        }
        assert!((emphasis.scale() - 0.95).abs() < 0.01);
    }

    #[test]
    fn test_emphasis_returns_to_rest() {
        let mut emphasis = Emphasis::button();
        emphasis.set_hovered(true, Duration::ZERO);
        emphasis.set_hovered(false, Duration::from_millis(50));
        for i in 4..400 {
            emphasis.step(Duration::from_secs_f32(i as f32 / 60.0));
        }
        assert_eq!(emphasis.scale(), 1.0);
        assert!(!emphasis.is_animating());
    }
}
