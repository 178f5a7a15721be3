//! Pointer input state machine.
//!
//! Converts raw [`PointerEvent`]s into thumb drag state and normalized value updates.

use centerbar_unit::{Factor, Px};

use crate::{
    event::{PointerAction, PointerEvent, PointerId},
    value::TrackGeometry,
    widget::UpdateFlags,
};

/// Drag state derived from [`PointerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No gesture on the thumb.
    Idle,
    /// Thumb pressed, movement has not exceeded the touch slop yet.
    PressedNotDragging,
    /// Thumb is following the active pointer.
    Dragging,
}

/// Transient pointer tracking state.
///
/// Reset at the end of each gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Pointer that drives the thumb, `None` outside a gesture.
    pub active_pointer: Option<PointerId>,
    /// Reference *x* for the touch slop test.
    pub down_x: Px,
    /// Thumb is following the active pointer.
    pub is_dragging: bool,
    /// Gesture started on the thumb.
    pub is_thumb_pressed: bool,
    /// Widget shows the pressed visual state.
    pub is_pressed: bool,
}
impl PointerState {
    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        if self.is_dragging {
            DragState::Dragging
        } else if self.is_thumb_pressed {
            DragState::PressedNotDragging
        } else {
            DragState::Idle
        }
    }
}

/// Geometry and tuning used to interpret one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackContext {
    /// Current track geometry.
    pub geometry: TrackGeometry,
    /// Maximum horizontal distance from the thumb center that still presses the thumb.
    pub hit_radius: Px,
    /// Minimum movement before a press becomes a drag.
    pub touch_slop: Px,
}

/// Result of [`ThumbTracker::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackReply {
    /// If the event was consumed, `false` means the host should apply its default handling.
    pub handled: bool,
    /// Host requests raised by the event.
    pub updates: UpdateFlags,
    /// If the value change listeners must be notified.
    pub notify: bool,
}
impl TrackReply {
    fn unhandled(updates: UpdateFlags) -> Self {
        Self {
            handled: false,
            updates,
            notify: false,
        }
    }
}

/// The thumb input state machine.
#[derive(Debug, Clone, Default)]
pub struct ThumbTracker {
    state: PointerState,
}
impl ThumbTracker {
    /// New idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer state.
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.state.drag_state()
    }

    /// Process the event, updating `value` in place.
    pub fn on_event(&mut self, ev: &PointerEvent, ctx: &TrackContext, value: &mut Factor) -> TrackReply {
        let mut reply = TrackReply {
            handled: true,
            ..Default::default()
        };

        match ev.action {
            PointerAction::Down => {
                let Some(index) = ev.last_index() else {
                    tracing::debug!("pointer down without pointers");
                    return TrackReply::unhandled(UpdateFlags::empty());
                };
                let p = ev.pointers[index];
                self.state.active_pointer = Some(p.id);
                self.state.down_x = p.position.x;

                let thumb_x = ctx.geometry.normalized_to_screen(*value);
                self.state.is_thumb_pressed = (p.position.x - thumb_x).abs() <= ctx.hit_radius;

                if !self.state.is_thumb_pressed {
                    tracing::trace!(x = p.position.x.0, thumb_x = thumb_x.0, "press missed the thumb");
                    return TrackReply::unhandled(UpdateFlags::empty());
                }

                tracing::trace!(pointer = p.id.0, "thumb pressed");
                self.state.is_pressed = true;
                reply.updates |= UpdateFlags::RENDER;
                self.track(ev, ctx, value, &mut reply);
                reply.updates |= UpdateFlags::CLAIM_DRAG;
            }
            PointerAction::Move => {
                if self.state.is_thumb_pressed {
                    if self.state.is_dragging {
                        self.track(ev, ctx, value, &mut reply);
                    } else if let Some(x) = self.active_x(ev) {
                        if (x - self.state.down_x).abs() > ctx.touch_slop {
                            tracing::trace!("touch slop exceeded, dragging");
                            self.state.is_pressed = true;
                            reply.updates |= UpdateFlags::RENDER;
                            self.start_tracking();
                            self.track(ev, ctx, value, &mut reply);
                            reply.updates |= UpdateFlags::CLAIM_DRAG;
                        }
                    }
                    reply.notify = true;
                }
            }
            PointerAction::Up => {
                if self.state.is_dragging {
                    self.track(ev, ctx, value, &mut reply);
                    self.stop_tracking();
                } else {
                    // released before crossing the touch slop, seek to the release point.
                    self.start_tracking();
                    self.track(ev, ctx, value, &mut reply);
                    self.stop_tracking();
                }
                self.end_gesture();
                reply.updates |= UpdateFlags::RENDER;
                reply.notify = true;
            }
            PointerAction::PointerDown => {
                if let Some(index) = ev.last_index() {
                    let p = ev.pointers[index];
                    self.state.down_x = p.position.x;
                    self.state.active_pointer = Some(p.id);
                    tracing::trace!(pointer = p.id.0, "secondary pointer is now active");
                }
                reply.updates |= UpdateFlags::RENDER;
            }
            PointerAction::PointerUp { index } => {
                if ev.pointer_id(index).is_some() && ev.pointer_id(index) == self.state.active_pointer {
                    let new_index = if index == 0 { 1 } else { 0 };
                    if let (Some(id), Some(x)) = (ev.pointer_id(new_index), ev.x(new_index)) {
                        self.state.down_x = x;
                        self.state.active_pointer = Some(id);
                        tracing::trace!(pointer = id.0, "active pointer lifted, switched");
                    }
                }
                reply.updates |= UpdateFlags::RENDER;
            }
            PointerAction::Cancel => {
                tracing::trace!(dragging = self.state.is_dragging, "gesture canceled");
                self.end_gesture();
                reply.updates |= UpdateFlags::RENDER;
            }
        }

        reply
    }

    fn active_x(&self, ev: &PointerEvent) -> Option<Px> {
        let x = self.state.active_pointer.and_then(|id| ev.x_of(id));
        if x.is_none() {
            tracing::debug!(active = ?self.state.active_pointer, "active pointer not in event batch");
        }
        x
    }

    fn track(&mut self, ev: &PointerEvent, ctx: &TrackContext, value: &mut Factor, reply: &mut TrackReply) {
        if let Some(x) = self.active_x(ev) {
            *value = ctx.geometry.screen_to_normalized(x).max(Factor(0.0));
            reply.updates |= UpdateFlags::RENDER;
        }
    }

    fn start_tracking(&mut self) {
        self.state.is_dragging = true;
    }

    fn stop_tracking(&mut self) {
        self.state.is_dragging = false;
    }

    fn end_gesture(&mut self) {
        self.state = PointerState::default();
    }
}

#[cfg(test)]
mod tests {
    use centerbar_unit::{FactorUnits, PxPoint};

    use super::*;
    use crate::event::PointerSample;

    fn ctx() -> TrackContext {
        TrackContext {
            geometry: TrackGeometry::new(Px(200.0), Px(20.0)),
            hit_radius: Px(10.0),
            touch_slop: Px(8.0),
        }
    }

    fn ev(action: PointerAction, x: f32) -> PointerEvent {
        PointerEvent::single(action, Px(x), Px(10.0))
    }

    fn multi(action: PointerAction, pointers: &[(u32, f32)]) -> PointerEvent {
        PointerEvent::new(
            action,
            pointers
                .iter()
                .map(|&(id, x)| PointerSample::new(PointerId(id), PxPoint::new(Px(x), Px(10.0))))
                .collect(),
        )
    }

    #[test]
    fn press_misses_thumb() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        let r = t.on_event(&ev(PointerAction::Down, 40.0), &ctx(), &mut value);
        assert!(!r.handled);
        assert!(!r.notify);
        assert_eq!(DragState::Idle, t.drag_state());
        assert_eq!(0.5.fct(), value);
    }

    #[test]
    fn press_on_thumb_edge() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        // thumb at 100, hit radius 10
        let r = t.on_event(&ev(PointerAction::Down, 110.0), &ctx(), &mut value);
        assert!(r.handled);
        assert!(r.updates.contains(UpdateFlags::RENDER | UpdateFlags::CLAIM_DRAG));
        assert!(t.state().is_pressed);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());
        assert_eq!(Factor(90.0 / 160.0), value);
    }

    #[test]
    fn slop() {
        let mut t = ThumbTracker::new();
        let mut value = Factor(30.0 / 160.0); // thumb at x=50

        let r = t.on_event(&ev(PointerAction::Down, 50.0), &ctx(), &mut value);
        assert!(r.handled);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());

        let r = t.on_event(&ev(PointerAction::Move, 55.0), &ctx(), &mut value);
        assert!(r.notify);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());
        assert_eq!(Factor(30.0 / 160.0), value);

        let r = t.on_event(&ev(PointerAction::Move, 60.0), &ctx(), &mut value);
        assert!(r.notify);
        assert!(r.updates.contains(UpdateFlags::CLAIM_DRAG));
        assert_eq!(DragState::Dragging, t.drag_state());
        assert_eq!(Factor(40.0 / 160.0), value);

        t.on_event(&ev(PointerAction::Move, 61.0), &ctx(), &mut value);
        assert_eq!(Factor(41.0 / 160.0), value);
    }

    #[test]
    fn drag_and_release() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&ev(PointerAction::Down, 100.0), &ctx(), &mut value);
        t.on_event(&ev(PointerAction::Move, 140.0), &ctx(), &mut value);
        assert_eq!(DragState::Dragging, t.drag_state());

        let r = t.on_event(&ev(PointerAction::Up, 180.0), &ctx(), &mut value);
        assert!(r.notify);
        assert_eq!(1.fct(), value);
        assert_eq!(DragState::Idle, t.drag_state());
        assert!(!t.state().is_pressed);
    }

    #[test]
    fn tap_seeks() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        // press missed, host still delivers the release.
        t.on_event(&ev(PointerAction::Down, 20.0), &ctx(), &mut value);
        let r = t.on_event(&ev(PointerAction::Up, 20.0), &ctx(), &mut value);
        assert!(r.handled);
        assert!(r.notify);
        assert_eq!(0.fct(), value);
        assert_eq!(DragState::Idle, t.drag_state());
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        let r = t.on_event(&ev(PointerAction::Move, 30.0), &ctx(), &mut value);
        assert!(r.handled);
        assert!(!r.notify);
        assert_eq!(0.5.fct(), value);
    }

    #[test]
    fn down_uses_last_pointer() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        let r = t.on_event(&multi(PointerAction::Down, &[(1, 20.0), (7, 100.0)]), &ctx(), &mut value);
        assert!(r.handled);
        assert_eq!(Some(PointerId(7)), t.state().active_pointer);
        assert_eq!(Px(100.0), t.state().down_x);
    }

    #[test]
    fn secondary_pointer_down_switches_active() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&multi(PointerAction::Down, &[(1, 100.0)]), &ctx(), &mut value);
        t.on_event(&multi(PointerAction::PointerDown, &[(1, 100.0), (2, 150.0)]), &ctx(), &mut value);
        assert_eq!(Some(PointerId(2)), t.state().active_pointer);
        assert_eq!(Px(150.0), t.state().down_x);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());

        // now the slop is measured from the new pointer.
        t.on_event(&multi(PointerAction::Move, &[(1, 100.0), (2, 155.0)]), &ctx(), &mut value);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());
        t.on_event(&multi(PointerAction::Move, &[(1, 100.0), (2, 180.0)]), &ctx(), &mut value);
        assert_eq!(DragState::Dragging, t.drag_state());
        assert_eq!(1.fct(), value);
    }

    #[test]
    fn active_pointer_up_switches_to_other() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&multi(PointerAction::Down, &[(1, 100.0)]), &ctx(), &mut value);
        t.on_event(&multi(PointerAction::PointerDown, &[(1, 100.0), (2, 100.0)]), &ctx(), &mut value);

        t.on_event(&multi(PointerAction::PointerUp { index: 1 }, &[(1, 90.0), (2, 100.0)]), &ctx(), &mut value);
        assert_eq!(Some(PointerId(1)), t.state().active_pointer);
        assert_eq!(Px(90.0), t.state().down_x);
    }

    #[test]
    fn inactive_pointer_up_keeps_active() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&multi(PointerAction::Down, &[(1, 100.0)]), &ctx(), &mut value);
        t.on_event(&multi(PointerAction::PointerUp { index: 1 }, &[(1, 100.0), (2, 60.0)]), &ctx(), &mut value);
        assert_eq!(Some(PointerId(1)), t.state().active_pointer);
        assert_eq!(Px(100.0), t.state().down_x);
    }

    #[test]
    fn cancel_while_dragging() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&ev(PointerAction::Down, 100.0), &ctx(), &mut value);
        t.on_event(&ev(PointerAction::Move, 130.0), &ctx(), &mut value);
        let r = t.on_event(&ev(PointerAction::Cancel, 130.0), &ctx(), &mut value);
        assert!(r.handled);
        assert!(!r.notify);
        assert!(r.updates.contains(UpdateFlags::RENDER));
        assert_eq!(DragState::Idle, t.drag_state());
        assert!(!t.state().is_pressed);
        assert_eq!(Factor(110.0 / 160.0), value);
    }

    #[test]
    fn cancel_before_slop() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&ev(PointerAction::Down, 104.0), &ctx(), &mut value);
        assert_eq!(DragState::PressedNotDragging, t.drag_state());
        assert!(t.state().is_pressed);

        let r = t.on_event(&ev(PointerAction::Cancel, 104.0), &ctx(), &mut value);
        assert!(r.handled);
        assert!(!r.notify);
        assert!(r.updates.contains(UpdateFlags::RENDER));
        assert_eq!(PointerState::default(), *t.state());
        assert_eq!(Factor(84.0 / 160.0), value);
    }

    #[test]
    fn gesture_end_clears_pointer() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&multi(PointerAction::Down, &[(4, 100.0)]), &ctx(), &mut value);
        assert_eq!(Some(PointerId(4)), t.state().active_pointer);
        t.on_event(&multi(PointerAction::Up, &[(4, 120.0)]), &ctx(), &mut value);
        assert_eq!(PointerState::default(), *t.state());

        // a stray move after the gesture does nothing.
        let r = t.on_event(&multi(PointerAction::Move, &[(4, 30.0)]), &ctx(), &mut value);
        assert!(!r.notify);
        assert_eq!(Factor(100.0 / 160.0), value);
    }

    #[test]
    fn missing_active_pointer_is_skipped() {
        let mut t = ThumbTracker::new();
        let mut value = 0.5.fct();

        t.on_event(&multi(PointerAction::Down, &[(1, 100.0)]), &ctx(), &mut value);
        t.on_event(&multi(PointerAction::Move, &[(1, 150.0)]), &ctx(), &mut value);
        let r = t.on_event(&multi(PointerAction::Move, &[(3, 20.0)]), &ctx(), &mut value);
        assert!(r.handled);
        assert_eq!(Factor(130.0 / 160.0), value);
    }
}
