//! Spring-smoothed pointer trailing.
//!
//! Input handlers never touch the rendered position directly: they push
//! immutable [`PointerEvent`] messages into the follower's inbox, and the
//! per-frame [`PointerFollower::step`] is the sole mutator of the smoothed
//! value. All queued events are applied to the target before the springs
//! integrate, so a frame never observes a half-updated target.

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::{Spring, SpringConfig};
use crate::geometry::Vec2;

/// Observed pointer input, published by the host's event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { position: Vec2 },
    Pressed,
    Released,
}

/// Parked far off-screen until the first real movement arrives.
pub const OFFSCREEN: Vec2 = Vec2 { x: -100.0, y: -100.0 };

// Scale/tilt applied while pressed (instant, not smoothed)
const PRESSED_SCALE: f32 = 0.9;
const PRESSED_TILT: f32 = -10.0;

/// The rendered pose of the follower for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerPose {
    /// Smoothed, lagging position
    pub position: Vec2,
    /// 1.0 normally, compressed while pressed
    pub scale: f32,
    /// Degrees; tilted while pressed
    pub tilt: f32,
    pub pressed: bool,
}

pub struct PointerFollower {
    inbox: VecDeque<PointerEvent>,
    target: Vec2,
    spring_x: Spring,
    spring_y: Spring,
    config: SpringConfig,
    pressed: bool,
}

impl PointerFollower {
    /// A follower with the loose trailing spring (visible lag).
    pub fn new() -> Self {
        Self::with_config(SpringConfig::TRAIL)
    }

    pub fn with_config(config: SpringConfig) -> Self {
        Self {
            inbox: VecDeque::new(),
            target: OFFSCREEN,
            spring_x: Spring::at(OFFSCREEN.x),
            spring_y: Spring::at(OFFSCREEN.y),
            config,
            pressed: false,
        }
    }

    /// Queue an observed event. Cheap; no interpolation happens here.
    pub fn push(&mut self, event: PointerEvent) {
        self.inbox.push_back(event);
    }

    /// Apply queued events, then integrate the trailing springs up to
    /// timeline position `now`.
    pub fn step(&mut self, now: Duration) -> FollowerPose {
        while let Some(event) = self.inbox.pop_front() {
            match event {
                // Successive moves within one frame: last event wins
                PointerEvent::Moved { position } => self.target = position,
                PointerEvent::Pressed => self.pressed = true,
                PointerEvent::Released => self.pressed = false,
            }
        }

        self.spring_x.step(now, self.target.x, &self.config);
        self.spring_y.step(now, self.target.y, &self.config);

        self.pose()
    }

    /// Current pose without advancing time.
    pub fn pose(&self) -> FollowerPose {
        FollowerPose {
            position: Vec2::new(self.spring_x.value(), self.spring_y.value()),
            scale: if self.pressed { PRESSED_SCALE } else { 1.0 },
            tilt: if self.pressed { PRESSED_TILT } else { 0.0 },
            pressed: self.pressed,
        }
    }

    /// The raw (unsmoothed) target, e.g. for a precision dot rendered at
    /// the exact pointer position.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True while the smoothed position is still catching up.
    pub fn is_settling(&self) -> bool {
        !(self.spring_x.is_settled(self.target.x, 0.5)
            && self.spring_y.is_settled(self.target.y, 0.5))
    }
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new()
    }
}
