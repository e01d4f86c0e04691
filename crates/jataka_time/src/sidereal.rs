//! Greenwich and local mean sidereal time.
//!
//! Uses the linear GMST expression from Meeus, *Astronomical Algorithms*
//! (2nd ed.), Eq. 12.4 truncated to its two leading terms:
//!
//! `GMST = 280.46061837° + 360.98564736629° × (JD − 2451545.0)`
//!
//! The quadratic and cubic terms contribute well under an arc-second per
//! century and are omitted so that ascendant results stay reproducible from
//! the published two-term form.

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    (280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD)).rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude (degrees).
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_noon() {
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.46061837).abs() < 1e-9, "GMST = {g}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT ≈ 6h 39m 52s = ~99.97°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.1, "GMST = {g}");
    }

    #[test]
    fn gmst_advances_per_day() {
        // One solar day advances the sidereal clock by ~0.9856°
        let g1 = gmst_deg(2_460_000.5);
        let g2 = gmst_deg(2_460_001.5);
        let diff = (g2 - g1).rem_euclid(360.0);
        assert!((diff - 0.985_647).abs() < 1e-4, "diff = {diff}");
    }

    #[test]
    fn gmst_range_before_epoch() {
        for &jd in &[2_415_020.0, 2_440_000.5, 2_451_544.27, 2_470_000.9] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_east_offset_wraps() {
        assert!((local_sidereal_time_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }
}
