//! Single value seek bar.

use std::fmt;

use centerbar_unit::{Factor, PxConstraints2d, PxSize};

use crate::{
    config::{ConfigError, SeekBarConfig, TouchConfig},
    event::PointerEvent,
    input::{DragState, PointerState},
    notify::ChangeNotifier,
    render::Surface,
    style::ResolvedStyle,
    track::SeekTrack,
    value::ValueRange,
    widget::{SeekWidget, UpdateFlags},
};

/// Seek bar with one value range whose progress segment starts at the value zero.
///
/// # Examples
///
/// ```
/// use centerbar_wgt::{CenterSeekBar, SeekBarConfig, SeekWidget, TouchConfig};
/// use centerbar_unit::{Factor, Px, PxSize};
///
/// let mut bar = CenterSeekBar::new(SeekBarConfig::default(), Factor(1.0), TouchConfig::default()).unwrap();
/// bar.layout(PxSize::new(Px(214.0), Px(16.0)));
/// bar.set_progress(50.0).unwrap();
/// assert_eq!(50.0, bar.value());
/// assert!(bar.set_progress(150.0).is_err());
/// ```
#[derive(Debug)]
pub struct CenterSeekBar {
    range: ValueRange,
    track: SeekTrack,
    notifier: ChangeNotifier,
}
impl CenterSeekBar {
    /// New seek bar.
    ///
    /// The `scale_factor` converts the config dimensions from dip to layout pixels.
    pub fn new(config: SeekBarConfig, scale_factor: Factor, touch: TouchConfig) -> Result<Self, ConfigError> {
        let style = config.style.resolve(scale_factor)?;
        let mut r = Self {
            range: ValueRange::new(config.min_value, config.max_value),
            track: SeekTrack::new(style, touch.touch_slop_px(scale_factor), Factor(0.0)),
            notifier: ChangeNotifier::default(),
        };
        r.set_progress(config.progress)?;
        Ok(r)
    }

    /// Set the listener called with the user value after each pointer update.
    pub fn on_value_change(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.notifier.set(listener);
    }

    /// Move the thumb to the user `value`.
    ///
    /// Does not call the listener. Values outside the range are an error and leave the thumb
    /// where it is.
    pub fn set_progress(&mut self, value: f64) -> Result<(), ProgressError> {
        let n = self.range.to_normalized(value);
        if !(0.0..=1.0).contains(&n.0) {
            return Err(ProgressError::OutOfRange {
                value,
                min: self.range.min,
                max: self.range.max,
            });
        }
        self.track.set_value(n);
        Ok(())
    }

    /// Replace the value range.
    ///
    /// The thumb keeps its normalized position, so the reported value changes.
    pub fn set_absolute_min_max(&mut self, min: f64, max: f64) {
        self.range = ValueRange::new(min, max);
        self.track.set_value(self.track.value());
    }

    /// Current value range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Current user value.
    pub fn value(&self) -> f64 {
        self.range.to_value(self.track.value())
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
impl SeekWidget for CenterSeekBar {
    fn measure(&mut self, constraints: PxConstraints2d) -> PxSize {
        self.track.measure(constraints)
    }

    fn layout(&mut self, size: PxSize) {
        self.track.layout(size);
    }

    fn pointer_event(&mut self, ev: &PointerEvent) -> bool {
        let reply = self.track.pointer_event(ev);
        if reply.notify {
            let value = self.value();
            tracing::trace!(value, "seek bar value changed");
            self.notifier.notify(value);
        }
        reply.handled
    }

    fn render(&self, surface: &mut dyn Surface) {
        let zero = self.range.to_normalized(0.0);
        self.track.frame(zero).render(surface);
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

/// Error setting the progress of a [`CenterSeekBar`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ProgressError {
    /// Value is not in the range.
    OutOfRange {
        /// Value that was set.
        value: f64,
        /// Range minimum.
        min: f64,
        /// Range maximum.
        max: f64,
    },
}
impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressError::OutOfRange { value, min, max } => write!(f, "value {value} is not in the [{min}, {max}] range"),
        }
    }
}
impl std::error::Error for ProgressError {}
