use crate::constants::TWOPI;

/// Wraps an angle in radians to [0, 2pi).
///
/// Uses `libm::fmod` rather than `%` so negative input folds onto the
/// positive range after one correction.
///
/// ```
/// use skyref_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_0_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((wrap_0_2pi(5.0 * PI) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = libm::fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}
