/// Minimal difference between values in around the 0.0..=1.0 scale.
pub const EPSILON: f32 = 0.00001;
/// Minimal difference between values in around the 1.0..=100.0 scale.
pub const EPSILON_100: f32 = 0.001;
/// Minimal difference between `f64` values in around the 0.0..=1.0 scale.
pub const EPSILON_F64: f64 = 0.000_000_001;

/// [`f32`] equality used in floating-point units.
///
/// * [`NaN`](f32::NAN) is equal to itself.
/// * [`INFINITY`](f32::INFINITY) is equal to itself.
/// * [`NEG_INFINITY`](f32::NEG_INFINITY) is equal to itself.
/// * Finite values are equal if the difference is less than `epsilon`.
pub fn about_eq(a: f32, b: f32, epsilon: f32) -> bool {
    if a.is_nan() {
        b.is_nan()
    } else if a.is_infinite() {
        b.is_infinite() && a.is_sign_positive() == b.is_sign_positive()
    } else {
        (a - b).abs() < epsilon
    }
}

/// [`f64`] version of [`about_eq`].
pub fn about_eq_f64(a: f64, b: f64, epsilon: f64) -> bool {
    if a.is_nan() {
        b.is_nan()
    } else if a.is_infinite() {
        b.is_infinite() && a.is_sign_positive() == b.is_sign_positive()
    } else {
        (a - b).abs() < epsilon
    }
}
