//! Scalar helpers shared by the vector, matrix, and rotation modules.
//!
//! Every angle in this crate is in **radians**. The trig wrappers here exist so
//! that the unit is stated in exactly one place; [`deg_to_rad`] and
//! [`rad_to_deg`] are the only functions that accept or produce degrees.

use std::f32::consts::PI;

/// Tolerance used by `approx_eq` helpers and orthonormality checks.
pub const EPSILON: f32 = 1e-5;

/// Converts degrees to radians.
///
/// ```
/// use lintra::scalar::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Sine of an angle in radians.
#[inline]
pub fn sin(angle: f32) -> f32 {
    angle.sin()
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos(angle: f32) -> f32 {
    angle.cos()
}

/// Tangent of an angle in radians.
#[inline]
pub fn tan(angle: f32) -> f32 {
    angle.tan()
}

/// Arc cosine in radians, in `[0, π]`.
///
/// The input is clamped to `[-1, 1]` first. Ratios such as
/// `dot(a, b) / (|a| |b|)` can land a hair outside that range after rounding,
/// and `f32::acos` would return NaN for them.
#[inline]
pub fn acos(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).acos()
}

/// Arc sine in radians, in `[-π/2, π/2]`. Clamped like [`acos`].
#[inline]
pub fn asin(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).asin()
}

/// Four-quadrant arc tangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// Returns true if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}
