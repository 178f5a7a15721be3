//! Value model.
//!
//! The thumb position is a [`Factor`] in the `[0.0..=1.0]` range, the [`ValueRange`] maps it to and from the
//! user domain and the [`TrackGeometry`] maps it to and from the widget *x* coordinate.

use centerbar_unit::{Factor, Px};
use serde::{Deserialize, Serialize};

/// User domain bounds.
///
/// The `max >= min` invariant is not checked, a range with `min == max` is *degenerate* and
/// normalizes every value to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Value at the left end of the track.
    pub min: f64,
    /// Value at the right end of the track.
    pub max: f64,
}
impl ValueRange {
    /// New range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between `min` and `max`.
    pub fn len(self) -> f64 {
        self.max - self.min
    }

    /// If `min == max`.
    pub fn is_degenerate(self) -> bool {
        self.len() == 0.0
    }

    /// Normalize the `value`.
    ///
    /// Returns `0` for a degenerate range. The result is not clamped.
    pub fn to_normalized(self, value: f64) -> Factor {
        if self.is_degenerate() {
            return Factor(0.0);
        }
        Factor((value - self.min) / self.len())
    }

    /// Denormalize the `normalized` value.
    pub fn to_value(self, normalized: Factor) -> f64 {
        self.min + normalized.0 * self.len()
    }
}

/// Horizontal track geometry.
///
/// The usable track is `[padding, width - padding]`, the padding reserves half the thumb at each end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Widget width.
    pub width: Px,
    /// Inset at each end of the track.
    pub padding: Px,
}
impl TrackGeometry {
    /// New geometry.
    pub fn new(width: Px, padding: Px) -> Self {
        Self { width, padding }
    }

    /// Length of the usable track, can be zero or negative.
    pub fn usable_width(self) -> f64 {
        self.width.0 as f64 - 2.0 * self.padding.0 as f64
    }

    /// If the widget is too narrow to fit any usable track.
    pub fn is_degenerate(self) -> bool {
        self.usable_width() <= 0.0
    }

    /// Convert a widget *x* coordinate to a normalized value.
    ///
    /// The result is clamped to `[0.0..=1.0]`, returns `0` if the geometry is degenerate.
    pub fn screen_to_normalized(self, x: Px) -> Factor {
        if self.is_degenerate() {
            return Factor(0.0);
        }
        Factor((x.0 as f64 - self.padding.0 as f64) / self.usable_width()).clamp_range()
    }

    /// Convert a normalized value to a widget *x* coordinate.
    ///
    /// The result is not clamped, values outside `[0.0..=1.0]` or a width that changed after the value
    /// was computed can place it outside the track.
    pub fn normalized_to_screen(self, normalized: Factor) -> Px {
        Px((self.padding.0 as f64 + normalized.0 * self.usable_width()) as f32)
    }
}
