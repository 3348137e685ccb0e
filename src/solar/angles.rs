//! Degree-based trigonometry and angle reduction helpers.
//!
//! Every quantity in the solar model is carried in degrees, so these thin
//! wrappers keep the formulas readable and the radian conversions in one place.

use crate::constants::INV_360;

/// Sine of an angle given in degrees.
#[inline]
pub fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Arc cosine returning degrees.
///
/// Callers must keep `x` inside [-1, 1]; the crossing solvers guard this
/// with their `cost` bound checks.
#[inline]
pub fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Two-argument arc tangent returning degrees in (-180, 180].
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Reduce an angle to the range [0, 360).
///
/// # Examples
/// ```
/// use sunriset::solar::revolution;
/// assert_eq!(revolution(370.0), 10.0);
/// assert_eq!(revolution(-90.0), 270.0);
/// ```
#[inline]
pub fn revolution(x: f64) -> f64 {
    x - 360.0 * (x * INV_360).floor()
}

/// Reduce an angle to the signed range [-180, 180).
///
/// # Examples
/// ```
/// use sunriset::solar::rev180;
/// assert_eq!(rev180(270.0), -90.0);
/// assert_eq!(rev180(-190.0), 170.0);
/// ```
#[inline]
pub fn rev180(x: f64) -> f64 {
    x - 360.0 * (x * INV_360 + 0.5).floor()
}
