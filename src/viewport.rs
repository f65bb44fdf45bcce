//! Viewport intersection triggers.
//!
//! A trigger watches one element's bounds against the visible viewport and
//! emits an edge when the intersection state changes. `Once` triggers latch
//! after the first entry; `Repeatable` triggers track live state so a later
//! re-entry replays the reveal from its hidden state.

use crate::geometry::Rect;

/// Whether a trigger fires once and latches, or follows live intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Latch permanently after the first entry
    #[default]
    Once,
    /// Emit an exit when the element leaves, so re-entry replays
    Repeatable,
}

/// A state change produced by [`ViewportTrigger::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEdge {
    Entered,
    Exited,
}

/// Intersection state machine for one watched element.
#[derive(Debug, Clone)]
pub struct ViewportTrigger {
    mode: TriggerMode,
    /// Signed outset applied to the viewport before testing. Negative pulls
    /// the effective edge inward, e.g. -100.0 means the element must be
    /// 100px past the real edge before it counts as visible.
    margin: f32,
    visible: bool,
    latched: bool,
}

impl ViewportTrigger {
    pub fn new(mode: TriggerMode, margin: f32) -> Self {
        Self {
            mode,
            margin,
            visible: false,
            latched: false,
        }
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Whether the element currently counts as visible. For a latched
    /// `Once` trigger this stays true regardless of later geometry.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Re-evaluate against the current geometry. `bounds` is `None` when
    /// the element is missing, which is treated as non-intersecting.
    /// Returns an edge only when the published state changes.
    pub fn evaluate(&mut self, bounds: Option<Rect>, viewport: Rect) -> Option<TriggerEdge> {
        if self.latched {
            return None;
        }

        let effective = viewport.expand(self.margin);
        let intersecting = bounds.is_some_and(|b| b.intersects(&effective));

        match (self.visible, intersecting) {
            (false, true) => {
                self.visible = true;
                if self.mode == TriggerMode::Once {
                    self.latched = true;
                }
                Some(TriggerEdge::Entered)
            }
            (true, false) if self.mode == TriggerMode::Repeatable => {
                self.visible = false;
                Some(TriggerEdge::Exited)
            }
            _ => None,
        }
    }

    /// Force the trigger into its fired state without geometry. Used when
    /// no intersection observer is available and sections must degrade to
    /// "always visible".
    pub fn force_entered(&mut self) -> Option<TriggerEdge> {
        if self.visible {
            return None;
        }
        self.visible = true;
        if self.mode == TriggerMode::Once {
            self.latched = true;
        }
        Some(TriggerEdge::Entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1280.0,
        height: 800.0,
    };

    fn in_view() -> Option<Rect> {
        Some(Rect::new(100.0, 300.0, 400.0, 200.0))
    }

    fn below_view() -> Option<Rect> {
        Some(Rect::new(100.0, 2000.0, 400.0, 200.0))
    }

    #[test]
    fn test_enter_emits_once_per_entry() {
        let mut trigger = ViewportTrigger::new(TriggerMode::Repeatable, 0.0);
        assert_eq!(
            trigger.evaluate(in_view(), VIEWPORT),
            Some(TriggerEdge::Entered)
        );
        // Still intersecting, no new edge
        assert_eq!(trigger.evaluate(in_view(), VIEWPORT), None);
    }

    #[test]
    fn test_once_latches_through_exit() {
        let mut trigger = ViewportTrigger::new(TriggerMode::Once, 0.0);
        assert_eq!(
            trigger.evaluate(in_view(), VIEWPORT),
            Some(TriggerEdge::Entered)
        );
        assert_eq!(trigger.evaluate(below_view(), VIEWPORT), None);
        assert!(trigger.visible());
        assert_eq!(trigger.evaluate(in_view(), VIEWPORT), None);
    }

    #[test]
    fn test_repeatable_exit_and_reentry() {
        let mut trigger = ViewportTrigger::new(TriggerMode::Repeatable, 0.0);
        assert_eq!(
            trigger.evaluate(in_view(), VIEWPORT),
            Some(TriggerEdge::Entered)
        );
        assert_eq!(
            trigger.evaluate(below_view(), VIEWPORT),
            Some(TriggerEdge::Exited)
        );
        assert!(!trigger.visible());
        assert_eq!(
            trigger.evaluate(in_view(), VIEWPORT),
            Some(TriggerEdge::Entered)
        );
    }

    #[test]
    fn test_missing_bounds_is_not_intersecting() {
        let mut trigger = ViewportTrigger::new(TriggerMode::Once, 0.0);
        assert_eq!(trigger.evaluate(None, VIEWPORT), None);
        assert!(!trigger.visible());
    }

    #[test]
    fn test_negative_margin_delays_entry() {
        // Element pokes 50px into the viewport bottom; a -100px margin
        // requires 100px of penetration.
        let mut trigger = ViewportTrigger::new(TriggerMode::Once, -100.0);
        let barely = Some(Rect::new(0.0, 750.0, 400.0, 200.0));
        assert_eq!(trigger.evaluate(barely, VIEWPORT), None);

        let deeper = Some(Rect::new(0.0, 650.0, 400.0, 200.0));
        assert_eq!(
            trigger.evaluate(deeper, VIEWPORT),
            Some(TriggerEdge::Entered)
        );
    }

    #[test]
    fn test_force_entered_latches_once_mode() {
        let mut trigger = ViewportTrigger::new(TriggerMode::Once, -100.0);
        assert_eq!(trigger.force_entered(), Some(TriggerEdge::Entered));
        assert_eq!(trigger.force_entered(), None);
        // Geometry can no longer un-latch it
        assert_eq!(trigger.evaluate(None, VIEWPORT), None);
        assert!(trigger.visible());
    }
}
