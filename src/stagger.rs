//! Sequenced reveal of a group's children.
//!
//! On a trigger, children transition hidden → shown one after another, each
//! offset by the configured interval. Every child owns exactly one
//! [`Track`], so re-triggering mid-flight retargets the running transition
//! instead of stacking a second one.

use std::time::Duration;

use log::debug;

use crate::animation::Track;
use crate::style::{MotionSpec, VisualState};

/// How a repeatable group returns to hidden when its trigger releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStyle {
    /// All children start their exit at once
    #[default]
    Immediate,
    /// Mirror the entrance: the last child to appear is the first to leave
    ReverseStagger,
}

/// Timing of a staggered entrance.
#[derive(Debug, Clone, Copy)]
pub struct StaggerConfig {
    /// Delay before the first child starts
    pub base_delay: Duration,
    /// Offset between consecutive children
    pub interval: Duration,
    pub exit: ExitStyle,
}

impl StaggerConfig {
    pub fn new(base_delay: Duration, interval: Duration) -> Self {
        Self {
            base_delay,
            interval,
            exit: ExitStyle::Immediate,
        }
    }

    /// Build from raw seconds. Negative values are malformed configuration
    /// and degrade to zero: animate immediately, no stagger.
    pub fn from_seconds(base_delay: f32, interval: f32) -> Self {
        Self::new(
            Duration::from_secs_f32(base_delay.max(0.0)),
            Duration::from_secs_f32(interval.max(0.0)),
        )
    }

    pub fn exit(mut self, exit: ExitStyle) -> Self {
        self.exit = exit;
        self
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

/// Animation state of one child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPhase {
    Hidden,
    AnimatingIn,
    Shown,
    AnimatingOut,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    In,
    Out,
}

struct Child {
    track: Track<VisualState>,
    phase: ChildPhase,
    /// Scheduled transition start, if the child is waiting for its slot
    pending: Option<(Duration, Direction)>,
    /// Entrance offset relative to the group trigger time
    offset: Duration,
}

/// A trigger-driven group of sequenced children.
pub struct StaggerGroup {
    motion: MotionSpec,
    config: StaggerConfig,
    children: Vec<Child>,
}

impl StaggerGroup {
    /// A group of `count` children sharing one motion spec, entering at
    /// `base_delay + index × interval`.
    pub fn new(motion: MotionSpec, config: StaggerConfig, count: usize) -> Self {
        let children = (0..count)
            .map(|i| Child {
                track: Track::new(motion.hidden, motion.transition.clone()),
                phase: ChildPhase::Hidden,
                pending: None,
                offset: config.base_delay + config.interval * i as u32,
            })
            .collect();
        Self {
            motion,
            config,
            children,
        }
    }

    /// A group where every child has an explicit entrance delay instead of
    /// a computed slot (used for the dashboard preview tiles).
    pub fn with_explicit_delays(motion: MotionSpec, delays: &[Duration]) -> Self {
        let children = delays
            .iter()
            .map(|&offset| Child {
                track: Track::new(motion.hidden, motion.transition.clone()),
                phase: ChildPhase::Hidden,
                pending: None,
                offset,
            })
            .collect();
        Self {
            motion,
            config: StaggerConfig::default(),
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Schedule the forward reveal from trigger time `now`. Children still
    /// animating out keep easing toward hidden until their slot arrives,
    /// then turn around from wherever they currently are.
    pub fn show(&mut self, now: Duration) {
        debug!("stagger group showing {} children", self.children.len());
        for child in &mut self.children {
            child.pending = Some((now + child.offset, Direction::In));
        }
    }

    /// Schedule the return to hidden. With `ExitStyle::Immediate` every
    /// child starts at `now`; `ReverseStagger` mirrors the entrance order.
    pub fn hide(&mut self, now: Duration) {
        debug!("stagger group hiding {} children", self.children.len());
        let count = self.children.len();
        for (i, child) in self.children.iter_mut().enumerate() {
            let start = match self.config.exit {
                ExitStyle::Immediate => now,
                ExitStyle::ReverseStagger => now + self.config.interval * (count - 1 - i) as u32,
            };
            child.pending = Some((start, Direction::Out));
        }
    }

    /// Advance all children to timeline position `now`. Returns true when
    /// any child's visual value changed this step.
    pub fn step(&mut self, now: Duration) -> bool {
        let mut changed = false;
        for child in &mut self.children {
            if let Some((start, direction)) = child.pending {
                if now >= start {
                    child.pending = None;
                    let target = match direction {
                        Direction::In => self.motion.shown,
                        Direction::Out => self.motion.hidden,
                    };
                    child.track.retarget(target, start);
                    child.phase = if child.track.is_animating() {
                        match direction {
                            Direction::In => ChildPhase::AnimatingIn,
                            Direction::Out => ChildPhase::AnimatingOut,
                        }
                    } else {
                        // Already resting on the target
                        match direction {
                            Direction::In => ChildPhase::Shown,
                            Direction::Out => ChildPhase::Hidden,
                        }
                    };
                }
            }

            changed |= child.track.advance(now).is_changed();

            if !child.track.is_animating() && child.pending.is_none() {
                child.phase = if *child.track.target() == self.motion.shown {
                    ChildPhase::Shown
                } else {
                    ChildPhase::Hidden
                };
            }
        }
        changed
    }

    /// True while any child has a pending slot or an in-flight transition.
    pub fn is_animating(&self) -> bool {
        self.children
            .iter()
            .any(|c| c.pending.is_some() || c.track.is_animating())
    }

    pub fn child_phase(&self, index: usize) -> ChildPhase {
        self.children[index].phase
    }

    /// Current interpolated visual state of one child.
    pub fn child_state(&self, index: usize) -> &VisualState {
        self.children[index].track.current()
    }

    pub fn fully_shown(&self) -> bool {
        !self.children.is_empty()
            && self
                .children
                .iter()
                .all(|c| c.phase == ChildPhase::Shown && !c.track.is_animating())
    }

    pub fn fully_hidden(&self) -> bool {
        self.children
            .iter()
            .all(|c| c.phase == ChildPhase::Hidden && !c.track.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{TimingFunction, Transition};

    fn linear_motion(ms: u64) -> MotionSpec {
        MotionSpec::new(
            VisualState::sunk(30.0),
            VisualState::SHOWN,
            Transition::new(Duration::from_millis(ms), TimingFunction::Linear),
        )
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_scheduled_starts_match_offsets() {
        // 4 children, base 300ms, interval 150ms, trigger at
        // t=0 -> starts at 300, 450, 600, 750ms.
        let config = StaggerConfig::new(ms(300), ms(150));
        let mut group = StaggerGroup::new(linear_motion(100), config, 4);
        group.show(Duration::ZERO);

        let expected = [300u64, 450, 600, 750];
        for (i, &start) in expected.iter().enumerate() {
            group.step(ms(start - 1));
            assert_eq!(
                group.child_phase(i),
                ChildPhase::Hidden,
                "child {i} must not start before {start}ms"
            );
            group.step(ms(start));
            assert_eq!(
                group.child_phase(i),
                ChildPhase::AnimatingIn,
                "child {i} must be in flight at {start}ms"
            );
        }
    }

    #[test]
    fn test_monotonic_start_ordering() {
        let config = StaggerConfig::new(ms(50), ms(120));
        let group = StaggerGroup::new(linear_motion(100), config, 6);
        for i in 1..group.len() {
            assert!(group.children[i].offset >= group.children[i - 1].offset + ms(120));
        }
    }

    #[test]
    fn test_group_completes_and_reports_shown() {
        let config = StaggerConfig::new(ms(0), ms(50));
        let mut group = StaggerGroup::new(linear_motion(100), config, 3);
        group.show(Duration::ZERO);
        for t in (0..400).step_by(16) {
            group.step(ms(t));
        }
        assert!(group.fully_shown());
        assert!(!group.is_animating());
        for i in 0..3 {
            assert_eq!(*group.child_state(i), VisualState::SHOWN);
        }
    }

    #[test]
    fn test_hide_immediate_returns_all_children() {
        let config = StaggerConfig::new(ms(0), ms(50));
        let mut group = StaggerGroup::new(linear_motion(100), config, 3);
        group.show(Duration::ZERO);
        for t in (0..300).step_by(16) {
            group.step(ms(t));
        }
        group.hide(ms(300));
        for t in (300..600).step_by(16) {
            group.step(ms(t));
        }
        assert!(group.fully_hidden());
    }

    #[test]
    fn test_reverse_stagger_exit_order() {
        let config = StaggerConfig::new(ms(0), ms(100)).exit(ExitStyle::ReverseStagger);
        let mut group = StaggerGroup::new(linear_motion(50), config, 3);
        group.show(Duration::ZERO);
        for t in (0..400).step_by(16) {
            group.step(ms(t));
        }
        assert!(group.fully_shown());

        group.hide(ms(400));
        // Last child exits first
        group.step(ms(400));
        assert_eq!(group.child_phase(2), ChildPhase::AnimatingOut);
        assert_eq!(group.child_phase(0), ChildPhase::Shown);
        group.step(ms(600));
        assert_eq!(group.child_phase(0), ChildPhase::AnimatingOut);
    }

    #[test]
    fn test_retrigger_mid_exit_turns_children_around() {
        let config = StaggerConfig::new(ms(0), ms(0));
        let mut group = StaggerGroup::new(linear_motion(200), config, 2);
        group.show(Duration::ZERO);
        for t in (0..300).step_by(16) {
            group.step(ms(t));
        }
        group.hide(ms(300));
        group.step(ms(400));
        let opacity_mid_exit = group.child_state(0).opacity;
        assert!(opacity_mid_exit < 1.0 && opacity_mid_exit > 0.0);

        // Trigger fires again while animating out: the child restarts
        // toward shown from its current value, no jump to hidden first.
        group.show(ms(400));
        group.step(ms(416));
        let opacity_after = group.child_state(0).opacity;
        assert!(opacity_after >= opacity_mid_exit - 1e-3);

        for t in (416..900).step_by(16) {
            group.step(ms(t));
        }
        assert!(group.fully_shown());
        assert_eq!(group.child_state(0).opacity, 1.0);
    }

    #[test]
    fn test_replay_reproduces_forward_sequence() {
        let config = StaggerConfig::new(ms(100), ms(100));
        let mut group = StaggerGroup::new(linear_motion(50), config, 3);

        group.show(Duration::ZERO);
        for t in (0..600).step_by(10) {
            group.step(ms(t));
        }
        assert!(group.fully_shown());

        group.hide(ms(600));
        for t in (600..900).step_by(10) {
            group.step(ms(t));
        }
        assert!(group.fully_hidden());

        // Re-entry replays the identical schedule relative to the new
        // trigger time.
        group.show(ms(1000));
        group.step(ms(1099));
        assert_eq!(group.child_phase(0), ChildPhase::Hidden);
        group.step(ms(1100));
        assert_eq!(group.child_phase(0), ChildPhase::AnimatingIn);
        group.step(ms(1199));
        assert_eq!(group.child_phase(1), ChildPhase::Hidden);
        group.step(ms(1200));
        assert_eq!(group.child_phase(1), ChildPhase::AnimatingIn);
    }

    #[test]
    fn test_malformed_config_degrades_to_immediate() {
        let config = StaggerConfig::from_seconds(-1.0, -0.5);
        assert_eq!(config.base_delay, Duration::ZERO);
        assert_eq!(config.interval, Duration::ZERO);

        let mut group = StaggerGroup::new(linear_motion(50), config, 3);
        group.show(Duration::ZERO);
        group.step(Duration::ZERO);
        for i in 0..3 {
            assert_eq!(group.child_phase(i), ChildPhase::AnimatingIn);
        }
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut group = StaggerGroup::new(linear_motion(50), StaggerConfig::default(), 0);
        group.show(Duration::ZERO);
        assert!(!group.step(ms(16)));
        assert!(!group.is_animating());
        assert!(group.fully_hidden());
        assert!(!group.fully_shown());
    }

    #[test]
    fn test_explicit_delays() {
        let delays = [ms(0), ms(150), ms(300), ms(450)];
        let mut group = StaggerGroup::with_explicit_delays(linear_motion(100), &delays);
        group.show(Duration::ZERO);
        group.step(ms(0));
        assert_eq!(group.child_phase(0), ChildPhase::AnimatingIn);
        assert_eq!(group.child_phase(2), ChildPhase::Hidden);
        group.step(ms(300));
        assert_eq!(group.child_phase(2), ChildPhase::AnimatingIn);
    }
}
