//! State shared by both seek bar variants.

use centerbar_unit::{Factor, Px, PxConstraints, PxConstraints2d, PxSize};

use crate::{
    event::PointerEvent,
    input::{DragState, PointerState, ThumbTracker, TrackContext, TrackReply},
    render::TrackFrame,
    style::ResolvedStyle,
    value::TrackGeometry,
    widget::UpdateFlags,
};

/// Resolve one axis of the widget size.
///
/// Exact constraints win, bounded constraints cap the `desired` length. Logs a warning if
/// the result is smaller than `desired`.
pub fn measure_dim(desired: Px, constraints: PxConstraints) -> Px {
    let r = constraints.resolve(desired);
    if r < desired {
        tracing::warn!(desired = desired.0, actual = r.0, "the seek bar is too small, the content might get cut");
    }
    r
}

/// Thumb value, pointer state, geometry and pending host requests.
#[derive(Debug, Clone)]
pub struct SeekTrack {
    value: Factor,
    tracker: ThumbTracker,
    style: ResolvedStyle,
    touch_slop: Px,
    size: PxSize,
    enabled: bool,
    updates: UpdateFlags,
}
impl SeekTrack {
    /// New enabled track with zero size.
    pub fn new(style: ResolvedStyle, touch_slop: Px, value: Factor) -> Self {
        Self {
            value,
            tracker: ThumbTracker::new(),
            style,
            touch_slop,
            size: PxSize::new(Px::ZERO, Px::ZERO),
            enabled: true,
            updates: UpdateFlags::empty(),
        }
    }

    /// Normalized thumb position.
    pub fn value(&self) -> Factor {
        self.value
    }

    /// Move the thumb and request a render.
    pub fn set_value(&mut self, value: Factor) {
        self.value = value;
        self.updates |= UpdateFlags::RENDER;
    }

    /// Resolved visuals.
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Size from the last layout.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Geometry for the current size.
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.size.width, self.style.padding())
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.tracker.drag_state()
    }

    /// Current pointer state.
    pub fn pointer_state(&self) -> &PointerState {
        self.tracker.state()
    }

    /// Measure for the `constraints`.
    pub fn measure(&self, constraints: PxConstraints2d) -> PxSize {
        let desired = self.style.preferred_size();
        PxSize::new(measure_dim(desired.width, constraints.x), measure_dim(desired.height, constraints.y))
    }

    /// Set the final size.
    pub fn layout(&mut self, size: PxSize) {
        if self.size != size {
            self.size = size;
            self.updates |= UpdateFlags::RENDER;
        }
    }

    /// Handle the pointer event.
    ///
    /// Disabled tracks return a not handled reply without touching any state.
    pub fn pointer_event(&mut self, ev: &PointerEvent) -> TrackReply {
        if !self.enabled {
            tracing::debug!(action = ?ev.action, "pointer event ignored, seek bar disabled");
            return TrackReply::default();
        }
        let ctx = TrackContext {
            geometry: self.geometry(),
            hit_radius: self.style.hit_radius(),
            touch_slop: self.touch_slop,
        };
        let reply = self.tracker.on_event(ev, &ctx, &mut self.value);
        self.updates |= reply.updates;
        reply
    }

    /// Frame for rendering with the thumb value zero at the normalized `zero`.
    pub fn frame(&self, zero: Factor) -> TrackFrame<'_> {
        TrackFrame {
            style: &self.style,
            size: self.size,
            zero,
            value: self.value,
            thumb_pressed: self.tracker.state().is_thumb_pressed,
        }
    }

    /// Take pending host requests.
    pub fn take_updates(&mut self) -> UpdateFlags {
        std::mem::take(&mut self.updates)
    }

    /// Enable or disable input.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.updates |= UpdateFlags::RENDER;
        }
    }

    /// Gets if input is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use centerbar_unit::FactorUnits;

    use super::*;
    use crate::{event::PointerAction, style::SeekBarStyle};

    fn track() -> SeekTrack {
        let style = SeekBarStyle::default().resolve(1.fct()).unwrap();
        SeekTrack::new(style, Px(8.0), 0.5.fct())
    }

    #[test]
    fn measure_modes() {
        let t = track();
        // preferred height = 7 * 2 + 7 / 4
        assert_eq!(PxSize::new(Px(200.0), Px(15.75)), t.measure(PxConstraints2d::new_unbounded()));
        assert_eq!(PxSize::new(Px(120.0), Px(15.75)), t.measure(PxConstraints2d::new_bounded(Px(120.0), Px(100.0))));
        assert_eq!(PxSize::new(Px(300.0), Px(48.0)), t.measure(PxConstraints2d::new_exact(Px(300.0), Px(48.0))));
    }

    #[test]
    fn disabled_ignores_events() {
        let mut t = track();
        t.layout(PxSize::new(Px(214.0), Px(20.0)));
        t.take_updates();
        t.set_enabled(false);
        assert_eq!(UpdateFlags::RENDER, t.take_updates());

        let reply = t.pointer_event(&PointerEvent::single(PointerAction::Down, Px(107.0), Px(10.0)));
        assert!(!reply.handled);
        assert_eq!(0.5.fct(), t.value());
        assert_eq!(PointerState::default(), *t.pointer_state());
        assert!(t.take_updates().is_empty());
    }

    #[test]
    fn updates_accumulate_until_taken() {
        let mut t = track();
        t.layout(PxSize::new(Px(214.0), Px(20.0)));
        t.pointer_event(&PointerEvent::single(PointerAction::Down, Px(107.0), Px(10.0)));
        assert_eq!(UpdateFlags::RENDER | UpdateFlags::CLAIM_DRAG, t.take_updates());
        assert!(t.take_updates().is_empty());
    }
}
