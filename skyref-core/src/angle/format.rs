//! Sexagesimal formatting for table output.
//!
//! ```
//! use skyref_core::Angle;
//! use skyref_core::angle::{DmsFmt, HmsFmt};
//!
//! let hms = HmsFmt { frac_digits: 1 };
//! assert_eq!(hms.fmt(Angle::from_hours(14.5)), "14ʰ 30ᵐ 0.0ˢ");
//!
//! let dms = DmsFmt { frac_digits: 0 };
//! assert_eq!(dms.fmt(Angle::from_degrees(-5.25)), "-5° 15' 0\"");
//! ```

use super::Angle;
use core::fmt;

/// `±DD° MM' SS.ss"` with a forced sign. Used for declination.
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// `HHʰ MMᵐ SS.ssˢ`, wrapped to [0h, 24h). Used for right ascension.
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let sign = if a.degrees() < 0.0 { '-' } else { '+' };
        let total = round_to(a.degrees().abs() * 3600.0, self.frac_digits);
        let (deg, min, sec) = split_sexagesimal(total);
        format!(
            "{sign}{deg:.0}° {min:.0}' {sec:.*}\"",
            self.frac_digits as usize
        )
    }
}

impl HmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let mut total = round_to(a.hours().rem_euclid(24.0) * 3600.0, self.frac_digits);
        if total >= 86_400.0 {
            total -= 86_400.0;
        }
        let (hh, mm, ss) = split_sexagesimal(total);
        format!("{hh:.0}ʰ {mm:.0}ᵐ {ss:.*}ˢ", self.frac_digits as usize)
    }
}

// Rounds before splitting so 59.99 never prints as "60.0".
fn round_to(seconds: f64, frac_digits: u8) -> f64 {
    let scale = libm::pow(10.0, frac_digits as f64);
    libm::round(seconds * scale) / scale
}

fn split_sexagesimal(total_seconds: f64) -> (f64, f64, f64) {
    let major = libm::trunc(total_seconds / 3600.0);
    let rest = total_seconds - major * 3600.0;
    let minor = libm::trunc(rest / 60.0);
    (major, minor, rest - minor * 60.0)
}

impl fmt::Display for Angle {
    /// Decimal degrees, 6 places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_decimal_degrees() {
        assert_eq!(Angle::from_degrees(10.5).to_string(), "10.500000°");
    }

    #[test]
    fn test_hms_wraps_negative() {
        let hms = HmsFmt { frac_digits: 0 };
        assert_eq!(hms.fmt(Angle::from_hours(-1.5)), "22ʰ 30ᵐ 0ˢ");
    }

    #[test]
    fn test_dms_positive_sign() {
        let dms = DmsFmt { frac_digits: 1 };
        assert_eq!(dms.fmt(Angle::from_degrees(45.5)), "+45° 30' 0.0\"");
    }
}
