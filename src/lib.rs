//! Frame-driven reveal animation orchestration.
//!
//! `unfurl` packages the interaction logic of a scroll-revealed page as a
//! headless library: viewport-triggered staggered reveals, spring-based
//! motion, a spring-smoothed pointer follower, and scoped cleanup of
//! everything a mounted effect acquires. The host owns layout, rendering,
//! and the event loop; it feeds input events and a timeline position into a
//! [`Stage`](stage::Stage) and maps the interpolated
//! [`VisualState`](style::VisualState) values onto whatever it draws with.
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use unfurl::prelude::*;
//!
//! let mut stage = Stage::new(StageConfig::new().width(1280.0).height(800.0));
//! let features = stage.add_section(
//!     "features",
//!     Some(Rect::new(0.0, 1400.0, 1280.0, 600.0)),
//!     ViewportTrigger::new(TriggerMode::Once, -100.0),
//!     StaggerGroup::new(
//!         MotionSpec::feature_card(),
//!         StaggerConfig::new(Duration::ZERO, Duration::from_millis(200)),
//!         6,
//!     ),
//! );
//!
//! let start = Instant::now();
//! loop {
//!     // ... host delivers input via stage.push_event(...) ...
//!     let flags = stage.tick(start.elapsed());
//!     if flags.contains(ChangeFlags::NEEDS_PAINT) {
//!         let _card = stage.group(features).unwrap().child_state(0);
//!         // paint with _card.opacity, _card.offset, _card.scale, ...
//!     }
//!     # break;
//! }
//! ```

pub mod animation;
pub mod cleanup;
pub mod cursor;
pub mod geometry;
pub mod pointer;
pub mod sound;
pub mod stage;
pub mod stagger;
pub mod style;
pub mod viewport;

pub mod prelude {
    pub use crate::animation::{
        AdvanceResult, Animatable, Spring, SpringConfig, TimingFunction, Track, Transition,
    };
    pub use crate::cleanup::CleanupScope;
    pub use crate::cursor::{CursorHost, CursorSuppression};
    pub use crate::geometry::{Rect, Vec2};
    pub use crate::pointer::{FollowerPose, PointerEvent, PointerFollower};
    pub use crate::sound::{AudioSink, ClickSound};
    pub use crate::stage::{ChangeFlags, InputEvent, SectionId, Stage, StageConfig};
    pub use crate::stagger::{ChildPhase, ExitStyle, StaggerConfig, StaggerGroup};
    pub use crate::style::{Emphasis, MotionSpec, VisualState};
    pub use crate::viewport::{TriggerEdge, TriggerMode, ViewportTrigger};
}
