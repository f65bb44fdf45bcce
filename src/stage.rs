//! The frame-driven orchestrator.
//!
//! A [`Stage`] owns the page's animated sections, the optional pointer
//! follower, and the cleanup scope for everything it registered. Hosts push
//! input events as they arrive and call [`Stage::tick`] once per frame; the
//! tick drains all queued events first, then evaluates triggers, then steps
//! every in-flight interpolation, so no frame ever observes a half-updated
//! target.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bitflags::bitflags;
use log::debug;

use crate::cleanup::CleanupScope;
use crate::cursor::{CursorHost, CursorSuppression};
use crate::geometry::{Rect, Vec2};
use crate::pointer::{FollowerPose, PointerEvent, PointerFollower};
use crate::stagger::StaggerGroup;
use crate::viewport::{TriggerEdge, ViewportTrigger};

bitflags! {
    /// What a tick produced, for the host's render scheduling.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Some visual value changed; the host should repaint
        const NEEDS_PAINT = 0b01;
        /// Motion is still in flight; keep ticking
        const ANIMATING   = 0b10;
    }
}

/// Unique identifier for a registered section.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SectionId(u64);

static NEXT_SECTION_ID: AtomicU64 = AtomicU64::new(1);

impl SectionId {
    fn next() -> Self {
        SectionId(NEXT_SECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Input delivered by the host environment. Events only ever mutate target
/// state; interpolation happens exclusively inside [`Stage::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerPressed,
    PointerReleased,
    /// Absolute vertical scroll offset of the document
    Scrolled { offset: f32 },
    Resized { width: f32, height: f32 },
}

/// Stage construction parameters.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub width: f32,
    pub height: f32,
    /// When false (no intersection observer in the host), every section is
    /// treated as visible from the first tick instead of failing.
    pub observer_available: bool,
}

impl StageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn observer_available(mut self, available: bool) -> Self {
        self.observer_available = available;
        self
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            observer_available: true,
        }
    }
}

struct SectionSlot {
    id: SectionId,
    name: String,
    /// Document-space bounds; `None` while the element is missing
    bounds: Option<Rect>,
    trigger: ViewportTrigger,
    group: StaggerGroup,
}

pub struct Stage {
    config: StageConfig,
    scroll_offset: f32,
    events: VecDeque<InputEvent>,
    sections: Vec<SectionSlot>,
    follower: Option<PointerFollower>,
    cursor: Option<CursorSuppression>,
    scope: CleanupScope,
    listeners: Rc<Cell<usize>>,
    disposed: bool,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            scroll_offset: 0.0,
            events: VecDeque::new(),
            sections: Vec::new(),
            follower: None,
            cursor: None,
            scope: CleanupScope::new(),
            listeners: Rc::new(Cell::new(0)),
            disposed: false,
        }
    }

    /// Register a reveal section: a trigger watching `bounds` and the group
    /// it drives. Registers one scroll listener that is deregistered on
    /// disposal.
    pub fn add_section(
        &mut self,
        name: impl Into<String>,
        bounds: Option<Rect>,
        trigger: ViewportTrigger,
        group: StaggerGroup,
    ) -> SectionId {
        let id = SectionId::next();
        let name = name.into();
        debug!("mounting section '{name}' with {} children", group.len());
        self.register_listener("scroll");
        self.sections.push(SectionSlot {
            id,
            name,
            bounds,
            trigger,
            group,
        });
        id
    }

    /// Update a section's document-space bounds (host layout changed).
    pub fn set_section_bounds(&mut self, id: SectionId, bounds: Option<Rect>) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.bounds = bounds;
        }
    }

    pub fn group(&self, id: SectionId) -> Option<&StaggerGroup> {
        self.sections.iter().find(|s| s.id == id).map(|s| &s.group)
    }

    /// Install the pointer-trailing effect. Suppresses the native cursor
    /// for the lifetime of the stage and registers the pointer listeners.
    pub fn attach_pointer_follower(
        &mut self,
        follower: PointerFollower,
        cursor_host: Rc<dyn CursorHost>,
    ) {
        self.cursor = Some(CursorSuppression::acquire(cursor_host));
        for kind in ["pointermove", "pointerdown", "pointerup"] {
            self.register_listener(kind);
        }
        self.follower = Some(follower);
    }

    pub fn follower_pose(&self) -> Option<FollowerPose> {
        self.follower.as_ref().map(|f| f.pose())
    }

    /// Number of live host-event registrations. Returns to zero after
    /// disposal; anything else is a leaked listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.get()
    }

    /// Queue an input event for the next tick.
    pub fn push_event(&mut self, event: InputEvent) {
        if !self.disposed {
            self.events.push_back(event);
        }
    }

    /// Advance the whole stage to timeline position `now`.
    pub fn tick(&mut self, now: Duration) -> ChangeFlags {
        if self.disposed {
            return ChangeFlags::empty();
        }

        // 1. Apply every queued target-state update.
        while let Some(event) = self.events.pop_front() {
            match event {
                InputEvent::PointerMoved { x, y } => {
                    if let Some(follower) = &mut self.follower {
                        follower.push(PointerEvent::Moved {
                            position: Vec2::new(x, y),
                        });
                    }
                }
                InputEvent::PointerPressed => {
                    if let Some(follower) = &mut self.follower {
                        follower.push(PointerEvent::Pressed);
                    }
                }
                InputEvent::PointerReleased => {
                    if let Some(follower) = &mut self.follower {
                        follower.push(PointerEvent::Released);
                    }
                }
                InputEvent::Scrolled { offset } => self.scroll_offset = offset,
                InputEvent::Resized { width, height } => {
                    self.config.width = width;
                    self.config.height = height;
                }
            }
        }

        // 2. Evaluate triggers against the current viewport.
        let viewport = Rect::new(0.0, self.scroll_offset, self.config.width, self.config.height);
        for section in &mut self.sections {
            let edge = if self.config.observer_available {
                section.trigger.evaluate(section.bounds, viewport)
            } else {
                section.trigger.force_entered()
            };
            match edge {
                Some(TriggerEdge::Entered) => {
                    debug!("section '{}' entered view", section.name);
                    section.group.show(now);
                }
                Some(TriggerEdge::Exited) => {
                    debug!("section '{}' left view", section.name);
                    section.group.hide(now);
                }
                None => {}
            }
        }

        // 3. Step every in-flight interpolation.
        let mut flags = ChangeFlags::empty();
        for section in &mut self.sections {
            if section.group.step(now) {
                flags |= ChangeFlags::NEEDS_PAINT;
            }
            if section.group.is_animating() {
                flags |= ChangeFlags::ANIMATING;
            }
        }

        if let Some(follower) = &mut self.follower {
            let before = follower.pose();
            let after = follower.step(now);
            if after != before {
                flags |= ChangeFlags::NEEDS_PAINT;
            }
            if follower.is_settling() {
                flags |= ChangeFlags::ANIMATING;
            }
        }

        flags
    }

    /// Tear down: deregister every listener, cancel in-flight
    /// interpolation, and restore the native cursor. Idempotent; also runs
    /// on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        debug!("disposing stage with {} sections", self.sections.len());
        // Guard restores the cursor exactly once
        self.cursor = None;
        self.follower = None;
        self.sections.clear();
        self.events.clear();
        self.scope.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn register_listener(&mut self, kind: &str) {
        self.listeners.set(self.listeners.get() + 1);
        let listeners = self.listeners.clone();
        let kind = kind.to_string();
        self.scope.on_cleanup(move || {
            listeners.set(listeners.get() - 1);
            debug!("deregistered {kind} listener");
        });
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.dispose();
    }
}
