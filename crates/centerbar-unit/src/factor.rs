use derive_more as dm;
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::{about_eq_f64, EPSILON_F64};

/// Normalized multiplication factor.
///
/// Values of this type are normalized to generally be in between `0.0` and `1.0` to indicate a fraction
/// of a unit. However, values are not clamped to this range, `Factor(2.0)` is a valid value and so are
/// negative values.
///
/// You can use the *suffix method* `1.0.fct()` to init a factor, see [`FactorUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq_f64`] with `0.000000001` epsilon.
#[derive(Copy, Clone, Default, dm::Add, dm::AddAssign, dm::Sub, dm::SubAssign, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factor(pub f64);
impl Factor {
    /// Clamp factor to `[0.0..=1.0]` range.
    pub fn clamp_range(self) -> Self {
        Factor(self.0.clamp(0.0, 1.0))
    }

    /// Returns the maximum of two factors.
    pub fn max(self, other: impl Into<Factor>) -> Factor {
        Factor(self.0.max(other.into().0))
    }

    /// Returns the minimum of two factors.
    pub fn min(self, other: impl Into<Factor>) -> Factor {
        Factor(self.0.min(other.into().0))
    }

    /// Returns `self` if `min <= self <= max`, returns `min` if `self < min` or returns `max` if `self > max`.
    pub fn clamp(self, min: impl Into<Factor>, max: impl Into<Factor>) -> Factor {
        self.min(max).max(min)
    }

    /// Computes the absolute value of self.
    pub fn abs(self) -> Factor {
        Factor(self.0.abs())
    }

    /// Returns `1.fct() - self`.
    pub fn flip(self) -> Factor {
        1.fct() - self
    }

    /// If the factor is in the `[0.0..=1.0]` range.
    pub fn is_normal(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}
impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        about_eq_f64(self.0, other.0, EPSILON_F64)
    }
}
impl ops::Mul for Factor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Factor(self.0 * rhs.0)
    }
}
impl ops::MulAssign for Factor {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl ops::Div for Factor {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Factor(self.0 / rhs.0)
    }
}
impl ops::DivAssign for Factor {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
impl ops::Neg for Factor {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Factor(-self.0)
    }
}
impl From<f64> for Factor {
    fn from(value: f64) -> Self {
        Factor(value)
    }
}
impl From<f32> for Factor {
    fn from(value: f32) -> Self {
        Factor(value as f64)
    }
}
impl From<Factor> for f64 {
    fn from(value: Factor) -> Self {
        value.0
    }
}
impl fmt::Debug for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("Factor").field(&self.0).finish()
        } else {
            write!(f, "{}.fct()", self.0)
        }
    }
}
impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extension methods for initializing factor units.
///
/// This trait is implemented for [`f64`] and [`i32`] allowing initialization of factor unit types using the `<number>.<unit>()` syntax.
///
/// # Examples
///
/// ```
/// # use centerbar_unit::*;
/// let half = 0.5.fct();
/// assert_eq!(half.flip(), 0.5.fct());
/// ```
pub trait FactorUnits {
    /// Factor.
    fn fct(self) -> Factor;
}
impl FactorUnits for f64 {
    fn fct(self) -> Factor {
        Factor(self)
    }
}
impl FactorUnits for i32 {
    fn fct(self) -> Factor {
        Factor(self as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_range() {
        assert_eq!(1.fct(), 2.0.fct().clamp_range());
        assert_eq!(0.fct(), (-0.5).fct().clamp_range());
        assert_eq!(0.25.fct(), 0.25.fct().clamp_range());
    }

    #[test]
    fn flip() {
        assert_eq!(0.75.fct(), 0.25.fct().flip());
        assert_eq!(0.fct(), 1.fct().flip());
    }

    #[test]
    fn is_normal() {
        assert!(0.fct().is_normal());
        assert!(1.fct().is_normal());
        assert!(!1.0001.fct().is_normal());
        assert!(!(-0.0001).fct().is_normal());
    }

    #[test]
    fn debug_fmt() {
        assert_eq!("0.5.fct()", format!("{:?}", 0.5.fct()));
    }
}
