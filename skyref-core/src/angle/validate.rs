use super::Angle;
use crate::constants::HALF_PI;
use crate::{CoreError, CoreResult};

/// Checks that RA is finite and wraps it to [0°, 360°).
pub fn validate_right_ascension(angle: Angle) -> CoreResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(CoreError::not_finite("validate_right_ascension"));
    }

    Ok(Angle::from_radians(super::normalize::wrap_0_2pi(rad)))
}

/// Checks that Dec is finite and within [-90°, +90°]. No clamping.
pub fn validate_declination(angle: Angle) -> CoreResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(CoreError::not_finite("validate_declination"));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(CoreError::out_of_range(
        "validate_declination",
        format!("Dec {:.2}° out of range [-90°, +90°]", angle.degrees()),
    ))
}
