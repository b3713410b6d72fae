//! Angles and ICRS sky positions for catalog reference retrieval.
//!
//! Catalog databases hand back right ascension and declination as plain
//! degrees. This crate turns those into validated values:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] value type, wrapping, validation, sexagesimal formatting |
//! | [`coords`] | [`IcrsCoord`], an equatorial position in the ICRS frame |
//! | [`errors`] | [`CoreError`] and the [`CoreResult`] alias |
//!
//! ```
//! use skyref_core::IcrsCoord;
//!
//! let coord = IcrsCoord::from_degrees(10.5, -5.2).unwrap();
//! assert!((coord.ra().degrees() - 10.5).abs() < 1e-12);
//! ```

pub mod angle;
pub mod constants;
pub mod coords;
pub mod errors;

pub use angle::Angle;
pub use coords::IcrsCoord;
pub use errors::{CoreError, CoreResult};
