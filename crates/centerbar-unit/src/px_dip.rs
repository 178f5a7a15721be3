use derive_more as dm;
use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseFloatError, ops, str::FromStr};

use crate::{about_eq, parse_suffix, Factor, EPSILON_100};

/// Layout pixel.
///
/// Unlike device pixels this unit keeps sub-pixel precision, pointer positions and track geometry
/// are computed in it.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.001` epsilon.
#[derive(
    Copy, Clone, Default, dm::Add, dm::AddAssign, dm::Sub, dm::SubAssign, dm::Neg, PartialOrd, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Px(pub f32);
impl Px {
    /// Maximum representable length, used as the *unbounded* marker in constraints.
    pub const MAX: Px = Px(f32::MAX);

    /// Zero length.
    pub const ZERO: Px = Px(0.0);

    /// Computes the absolute value of self.
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Convert to device independent pixels.
    pub fn to_dip(self, scale_factor: Factor) -> Dip {
        Dip((self.0 as f64 / scale_factor.0) as f32)
    }
}
impl PartialEq for Px {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EPSILON_100)
    }
}
impl fmt::Debug for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Px({})", self.0)
    }
}
impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
impl FromStr for Px {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suffix(s, &["px"]).map(Px)
    }
}
impl ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}
impl ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
impl ops::Mul<Factor> for Px {
    type Output = Px;

    fn mul(self, rhs: Factor) -> Px {
        Px((self.0 as f64 * rhs.0) as f32)
    }
}

/// Device independent pixel.
///
/// Widget dimensions are declared in this unit and converted to [`Px`] once, using the
/// host scale factor.
#[derive(
    Copy, Clone, Default, dm::Add, dm::AddAssign, dm::Sub, dm::SubAssign, dm::Neg, PartialOrd, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Dip(pub f32);
impl Dip {
    /// Convert to layout pixels.
    pub fn to_px(self, scale_factor: Factor) -> Px {
        Px((self.0 as f64 * scale_factor.0) as f32)
    }
}
impl PartialEq for Dip {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EPSILON_100)
    }
}
impl fmt::Debug for Dip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dip({})", self.0)
    }
}
impl fmt::Display for Dip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}
impl FromStr for Dip {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suffix(s, &["dip", "dp"]).map(Dip)
    }
}

/// Extension methods for initializing pixel units.
///
/// # Examples
///
/// ```
/// # use centerbar_unit::*;
/// assert_eq!(Px(12.0), 6.dip().to_px(2.fct()));
/// assert_eq!(Px(3.5), 3.5.px());
/// ```
pub trait PxDipUnits {
    /// Layout pixels.
    fn px(self) -> Px;
    /// Device independent pixels.
    fn dip(self) -> Dip;
}
impl PxDipUnits for f32 {
    fn px(self) -> Px {
        Px(self)
    }

    fn dip(self) -> Dip {
        Dip(self)
    }
}
impl PxDipUnits for i32 {
    fn px(self) -> Px {
        Px(self as f32)
    }

    fn dip(self) -> Dip {
        Dip(self as f32)
    }
}

/// Length that is either already in layout pixels or still in device independent pixels.
///
/// Parses from `"6"`, `"6dp"`, `"6dip"` (all [`Dip`]) or `"6px"` ([`Px`]), deserializes from
/// the same strings or from a plain number in dip.
#[derive(Clone, Copy, PartialEq)]
pub enum Length {
    /// Device independent pixels.
    Dip(Dip),
    /// Layout pixels, not scaled.
    Px(Px),
}
impl Length {
    /// Resolve to layout pixels.
    pub fn to_px(self, scale_factor: Factor) -> Px {
        match self {
            Length::Dip(d) => d.to_px(scale_factor),
            Length::Px(p) => p,
        }
    }
}
impl Default for Length {
    fn default() -> Self {
        Length::Dip(Dip(0.0))
    }
}
impl From<Dip> for Length {
    fn from(d: Dip) -> Self {
        Length::Dip(d)
    }
}
impl From<Px> for Length {
    fn from(p: Px) -> Self {
        Length::Px(p)
    }
}
impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Dip(d) => fmt::Debug::fmt(d, f),
            Length::Px(p) => fmt::Debug::fmt(p, f),
        }
    }
}
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Dip(d) => fmt::Display::fmt(d, f),
            Length::Px(p) => fmt::Display::fmt(p, f),
        }
    }
}
impl FromStr for Length {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.ends_with("px") {
            s.parse().map(Length::Px)
        } else {
            s.parse().map(Length::Dip)
        }
    }
}
impl Serialize for Length {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LengthVisitor;
        impl serde::de::Visitor<'_> for LengthVisitor {
            type Value = Length;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a number in dip or a string like \"6dp\" or \"6px\"")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Length, E> {
                Ok(Length::Dip(Dip(v as f32)))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Length, E> {
                Ok(Length::Dip(Dip(v as f32)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Length, E> {
                Ok(Length::Dip(Dip(v as f32)))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Length, E> {
                v.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_any(LengthVisitor)
    }
}

/// Point in layout pixels.
pub type PxPoint = euclid::Point2D<Px, ()>;
/// Size in layout pixels.
pub type PxSize = euclid::Size2D<Px, ()>;
/// Rectangle in layout pixels.
pub type PxRect = euclid::Rect<Px, ()>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorUnits;

    #[test]
    fn dip_to_px() {
        assert_eq!(Px(21.0), Dip(7.0).to_px(3.fct()));
        assert_eq!(Dip(7.0), Px(21.0).to_dip(3.fct()));
    }

    #[test]
    fn parse_dip() {
        assert_eq!(Ok(Dip(6.0)), "6".parse::<Dip>());
        assert_eq!(Ok(Dip(6.0)), "6dp".parse::<Dip>());
        assert_eq!(Ok(Dip(6.5)), "6.5dip".parse::<Dip>());
        assert!("six".parse::<Dip>().is_err());
    }

    #[test]
    fn parse_length() {
        assert_eq!(Ok(Length::Px(Px(4.0))), "4px".parse::<Length>());
        assert_eq!(Ok(Length::Dip(Dip(4.0))), " 4dp ".parse::<Length>());
        assert_eq!(Px(8.0), "4".parse::<Length>().unwrap().to_px(2.fct()));
        assert_eq!(Px(4.0), "4px".parse::<Length>().unwrap().to_px(2.fct()));
    }

    #[test]
    fn px_ops() {
        assert_eq!(Px(5.0), Px(2.0) + Px(3.0));
        assert_eq!(Px(-1.0), Px(2.0) - Px(3.0));
        assert_eq!(Px(3.0), (-Px(3.0)).abs());
        assert_eq!(Px(1.5), Px(3.0) / 2.0);
        assert_eq!(Px(1.5), Px(3.0) * 0.5.fct());
    }
}
