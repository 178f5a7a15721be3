use std::fmt;

use crate::{Px, PxSize};

/// Pixel length constraints.
///
/// These constraints express the three sizing modes a host can impose on a widget axis:
/// an exact length, an upper bound (*at most*) or no bound at all.
///
/// See also the [`PxConstraints2d`].
#[derive(Clone, Copy, PartialEq)]
pub struct PxConstraints {
    max: Px,
    min: Px,
}
impl PxConstraints {
    /// New unbounded constraint.
    pub fn new_unbounded() -> Self {
        PxConstraints { max: Px::MAX, min: Px(0.0) }
    }

    /// New bounded between zero and `max`.
    pub fn new_bounded(max: Px) -> Self {
        PxConstraints { max, min: Px(0.0) }
    }

    /// New bounded to only allow the `length`.
    pub fn new_exact(length: Px) -> Self {
        PxConstraints { max: length, min: length }
    }

    /// Gets if the constraints have no upper bound.
    pub fn is_unbounded(self) -> bool {
        self.max == Px::MAX
    }

    /// Gets if the constraints only allow one length.
    pub fn is_exact(self) -> bool {
        self.max == self.min
    }

    /// Gets the fixed length if the constraints only allow one length.
    pub fn exact(self) -> Option<Px> {
        if self.is_exact() {
            Some(self.max)
        } else {
            None
        }
    }

    /// Gets the maximum allowed length, or `None` if is unbounded.
    ///
    /// The maximum is inclusive.
    pub fn max(self) -> Option<Px> {
        if self.max < Px::MAX {
            Some(self.max)
        } else {
            None
        }
    }

    /// Gets the minimum allowed length.
    ///
    /// The minimum is inclusive.
    pub fn min(self) -> Px {
        self.min
    }

    /// Clamp the `px` by min and max.
    pub fn clamp(self, px: Px) -> Px {
        self.min.max(px).min(self.max)
    }

    /// Resolve the `desired` length.
    ///
    /// Exact constraints return the exact length, bounded constraints return the `desired` length capped by
    /// the maximum and unbounded constraints return `desired` as is.
    pub fn resolve(self, desired: Px) -> Px {
        match self.exact() {
            Some(l) => l,
            None => self.clamp(desired),
        }
    }
}
impl From<Px> for PxConstraints {
    fn from(length: Px) -> Self {
        PxConstraints::new_exact(length)
    }
}
impl fmt::Debug for PxConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PxConstraints")
            .field("max", &self.max())
            .field("min", &self.min)
            .finish()
    }
}
impl Default for PxConstraints {
    fn default() -> Self {
        Self::new_unbounded()
    }
}

/// Pixel *size* constraints.
///
/// Constraints for both the ***x*** and ***y*** axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxConstraints2d {
    /// Constraints of lengths in the *x* or *width* dimension.
    pub x: PxConstraints,
    /// Constraints of lengths in the *y* or *height* dimension.
    pub y: PxConstraints,
}
impl PxConstraints2d {
    /// New unbounded constraint.
    pub fn new_unbounded() -> Self {
        Self {
            x: PxConstraints::new_unbounded(),
            y: PxConstraints::new_unbounded(),
        }
    }

    /// New bounded between zero and `max_x`, `max_y`.
    pub fn new_bounded(max_x: Px, max_y: Px) -> Self {
        Self {
            x: PxConstraints::new_bounded(max_x),
            y: PxConstraints::new_bounded(max_y),
        }
    }

    /// New bounded between zero and `max`.
    pub fn new_bounded_size(max: PxSize) -> Self {
        Self::new_bounded(max.width, max.height)
    }

    /// New bounded to only allow the *size*.
    pub fn new_exact(x: Px, y: Px) -> Self {
        Self {
            x: PxConstraints::new_exact(x),
            y: PxConstraints::new_exact(y),
        }
    }

    /// New bounded to only allow the `size`.
    pub fn new_exact_size(size: PxSize) -> Self {
        Self::new_exact(size.width, size.height)
    }

    /// Resolve the `desired` size in both axis.
    pub fn resolve(self, desired: PxSize) -> PxSize {
        PxSize::new(self.x.resolve(desired.width), self.y.resolve(desired.height))
    }
}
impl From<PxSize> for PxConstraints2d {
    fn from(size: PxSize) -> Self {
        PxConstraints2d::new_exact_size(size)
    }
}
