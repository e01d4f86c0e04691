//! Lahiri ayanamsha and the tropical-to-sidereal conversion.
//!
//! The ayanamsha is modelled as a quadratic in Julian centuries since
//! J2000.0:
//!
//! `ayanamsha(T) = 23.692 + 1.396971·T + 0.000308·T²`
//!
//! This is a linearized approximation of the Lahiri (Chitrapaksha) value,
//! not a table-driven or star-anchored one. Over 1500..2500 CE it stays
//! within a few arc-minutes of the IAU-precession-based Lahiri ayanamsha,
//! which is ample for sign and nakshatra placement.

use jataka_time::jd_to_centuries;

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.692;

/// Linear rate, degrees per Julian century.
pub const LAHIRI_RATE_DEG_PER_CENTURY: f64 = 1.396971;

/// Quadratic term, degrees per century squared.
pub const LAHIRI_ACCEL_DEG_PER_CENTURY2: f64 = 0.000308;

/// Lahiri ayanamsha in degrees for a Julian Day.
pub fn lahiri_ayanamsa_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    LAHIRI_J2000_DEG + LAHIRI_RATE_DEG_PER_CENTURY * t + LAHIRI_ACCEL_DEG_PER_CENTURY2 * t * t
}

/// Convert a tropical longitude to sidereal by subtracting the ayanamsha.
///
/// Result is in [0, 360) for any finite input.
pub fn to_sidereal(tropical_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg)
}
