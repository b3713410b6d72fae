//! Angle value type.
//!
//! [`Angle`] stores radians internally; constructors and accessors cover the
//! units catalog queries deal in (degrees, arcseconds, hours).
//!
//! ```
//! use skyref_core::Angle;
//!
//! let padding = Angle::from_arcseconds(20.0);
//! assert!((padding.degrees() - 20.0 / 3600.0).abs() < 1e-15);
//! ```

mod format;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
mod validate;

pub use format::{DmsFmt, HmsFmt};
pub use normalize::wrap_0_2pi;
pub use validate::{validate_declination, validate_right_ascension};

use crate::constants::{ARCSEC_PER_RAD, ARCSEC_TO_RAD, DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * DEGREES_PER_HOUR)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.rad * ARCSEC_PER_RAD
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)` in one call.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    pub fn validate_right_ascension(self) -> crate::CoreResult<Self> {
        validate_right_ascension(self)
    }

    pub fn validate_declination(self) -> crate::CoreResult<Self> {
        validate_declination(self)
    }
}
