//! Ecliptic frame quantities used by the horoscope engine.
//!
//! Provides the mean obliquity of the ecliptic of date (needed by the
//! ascendant solver) and the general precession in longitude (needed to
//! carry J2000 ecliptic planet positions to the mean equinox of date).

pub mod obliquity;
pub mod precession;

pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, mean_obliquity_rad};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
