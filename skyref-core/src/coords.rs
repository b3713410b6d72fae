//! Equatorial sky positions in the ICRS frame.

use crate::angle::{DmsFmt, HmsFmt};
use crate::{Angle, CoreResult};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A right ascension / declination pair in the International Celestial
/// Reference System.
///
/// Construction validates both axes: RA must be finite and is wrapped to
/// [0°, 360°); Dec must be finite and within [-90°, +90°]. Deserialization
/// goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IcrsCoord {
    ra: Angle,
    dec: Angle,
}

impl IcrsCoord {
    pub fn new(ra: Angle, dec: Angle) -> CoreResult<Self> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        Ok(Self { ra, dec })
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoreResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// `(ra, dec)` in decimal degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.ra.degrees(), self.dec.degrees())
    }

    /// Great-circle distance to `other` (Vincenty formula, stable at all separations).
    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_dec1, cos_dec1) = self.dec.sin_cos();
        let (sin_dec2, cos_dec2) = other.dec.sin_cos();
        let (sin_dra, cos_dra) = (self.ra - other.ra).sin_cos();

        let num = libm::sqrt(
            (cos_dec2 * sin_dra).powi(2)
                + (cos_dec1 * sin_dec2 - sin_dec1 * cos_dec2 * cos_dra).powi(2),
        );
        let den = sin_dec1 * sin_dec2 + cos_dec1 * cos_dec2 * cos_dra;

        Angle::from_radians(libm::atan2(num, den))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for IcrsCoord {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Raw {
            ra: Angle,
            dec: Angle,
        }

        let raw = Raw::deserialize(d)?;
        IcrsCoord::new(raw.ra, raw.dec).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for IcrsCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hms = HmsFmt { frac_digits: 3 };
        let dms = DmsFmt { frac_digits: 2 };
        write!(f, "ICRS({}, {})", hms.fmt(self.ra), dms.fmt(self.dec))
    }
}
