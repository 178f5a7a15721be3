//! Dual-range seek bar.

use centerbar_unit::{Factor, PxConstraints2d, PxSize};

use crate::{
    config::{ConfigError, RangeSeekBarConfig, TouchConfig},
    event::PointerEvent,
    input::{DragState, PointerState},
    notify::RangeNotifier,
    render::{Surface, ThumbDirection},
    style::{ResolvedStyle, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE},
    track::SeekTrack,
    value::ValueRange,
    widget::{SeekWidget, UpdateFlags},
};

/// Reference range the thumb moves on, user values are scaled from it.
pub const INTERNAL_RANGE: ValueRange = ValueRange::new(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE);

/// Seek bar with two value scales, one each side of the center.
///
/// Left of the center the thumb reports values scaled to `from_value`, right of the center
/// values scaled to `to_value`. Each side has its own listener and only one is called per update.
#[derive(Debug)]
pub struct RangeSeekBar {
    from_value: f64,
    to_value: f64,
    track: SeekTrack,
    notifier: RangeNotifier,
}
impl RangeSeekBar {
    /// New seek bar.
    ///
    /// A non-zero `to_progress` sets the initial thumb position, otherwise `from_progress` does.
    pub fn new(config: RangeSeekBarConfig, scale_factor: Factor, touch: TouchConfig) -> Result<Self, ConfigError> {
        let style = config.style.resolve(scale_factor)?;
        let mut r = Self {
            from_value: config.from_value,
            to_value: config.to_value,
            track: SeekTrack::new(style, touch.touch_slop_px(scale_factor), INTERNAL_RANGE.to_normalized(0.0)),
            notifier: RangeNotifier::default(),
        };
        if config.to_progress != 0.0 {
            r.set_to_progress(config.to_progress);
        } else if config.from_progress != 0.0 {
            r.set_from_progress(config.from_progress);
        }
        Ok(r)
    }

    /// Set the listener called when the thumb moves left of the center.
    pub fn on_from_value_change(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.notifier.set_from(listener);
    }

    /// Set the listener called when the thumb moves right of the center.
    pub fn on_to_value_change(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.notifier.set_to(listener);
    }

    /// Move the thumb to the `from_value` scaled `progress`, clamped to the track.
    pub fn set_from_progress(&mut self, progress: f64) {
        self.set_internal(scale(progress, self.from_value, DEFAULT_MIN_VALUE));
    }

    /// Move the thumb to the `to_value` scaled `progress`, clamped to the track.
    pub fn set_to_progress(&mut self, progress: f64) {
        self.set_internal(scale(progress, self.to_value, DEFAULT_MAX_VALUE));
    }

    /// Replace the values reported at each end.
    ///
    /// The thumb keeps its position.
    pub fn set_from_to_values(&mut self, from_value: f64, to_value: f64) {
        self.from_value = from_value;
        self.to_value = to_value;
    }

    fn set_internal(&mut self, internal: f64) {
        let internal = internal.clamp(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE);
        self.track.set_value(INTERNAL_RANGE.to_normalized(internal));
    }

    /// Value reported at the left end.
    pub fn from_value(&self) -> f64 {
        self.from_value
    }

    /// Value reported at the right end.
    pub fn to_value(&self) -> f64 {
        self.to_value
    }

    /// Thumb position on the [`INTERNAL_RANGE`].
    pub fn internal_value(&self) -> f64 {
        INTERNAL_RANGE.to_value(self.track.value())
    }

    /// Side of the center the thumb is on.
    pub fn direction(&self) -> ThumbDirection {
        ThumbDirection::of(self.track.geometry(), INTERNAL_RANGE.to_normalized(0.0), self.track.value())
    }

    /// Value the listener of the current side receives, `None` before the first layout.
    pub fn value(&self) -> Option<f64> {
        let internal = self.internal_value();
        match self.direction() {
            ThumbDirection::Right => Some(internal / DEFAULT_MAX_VALUE * self.to_value),
            ThumbDirection::Left => Some(internal / DEFAULT_MIN_VALUE * self.from_value),
            ThumbDirection::None => None,
        }
    }

    /// Current normalized thumb position.
    pub fn normalized(&self) -> Factor {
        self.track.value()
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.track.drag_state()
    }

    /// Current pointer state.
    pub fn pointer_state(&self) -> &PointerState {
        self.track.pointer_state()
    }

    /// If the widget shows the pressed state.
    pub fn is_pressed(&self) -> bool {
        self.track.pointer_state().is_pressed
    }

    /// Resolved visuals.
    pub fn style(&self) -> &ResolvedStyle {
        self.track.style()
    }

    /// Size from the last layout.
    pub fn size(&self) -> PxSize {
        self.track.size()
    }
}
impl SeekWidget for RangeSeekBar {
    fn measure(&mut self, constraints: PxConstraints2d) -> PxSize {
        self.track.measure(constraints)
    }

    fn layout(&mut self, size: PxSize) {
        self.track.layout(size);
    }

    fn pointer_event(&mut self, ev: &PointerEvent) -> bool {
        let reply = self.track.pointer_event(ev);
        if reply.notify {
            let direction = self.direction();
            let internal = self.internal_value();
            tracing::trace!(?direction, internal, "range seek bar value changed");
            self.notifier.notify(direction, internal, self.from_value, self.to_value);
        }
        reply.handled
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.track.frame(INTERNAL_RANGE.to_normalized(0.0)).render(surface);
    }

    fn take_updates(&mut self) -> UpdateFlags {
        self.track.take_updates()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.track.set_enabled(enabled);
    }

    fn is_enabled(&self) -> bool {
        self.track.is_enabled()
    }
}

/// Convert a user `progress` in the `end_value` scale to the internal value at `internal_end`.
///
/// Returns `0` for a zero scale.
fn scale(progress: f64, end_value: f64, internal_end: f64) -> f64 {
    if end_value == 0.0 {
        return 0.0;
    }
    progress / end_value * internal_end
}
