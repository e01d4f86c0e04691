//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Rahu is the Moon's mean ascending node, modelled as uniform retrograde
//! motion from its J2000.0 position:
//!
//! `Ω = 125.0445 − 0.05295376·(jd − 2451545)`
//!
//! Ketu, the descending node, is always exactly opposite Rahu.

use jataka_time::J2000_JD;

use crate::util::normalize_360;

/// Mean node longitude at J2000.0, degrees.
pub const RAHU_J2000_DEG: f64 = 125.0445;

/// Mean node motion, degrees per day (retrograde).
pub const RAHU_DAILY_MOTION_DEG: f64 = -0.05295376;

/// Mean Rahu (ascending node) tropical longitude in degrees [0, 360).
pub fn mean_rahu_deg(jd: f64) -> f64 {
    normalize_360(RAHU_J2000_DEG + RAHU_DAILY_MOTION_DEG * (jd - J2000_JD))
}

/// Mean Ketu (descending node) tropical longitude in degrees [0, 360).
pub fn mean_ketu_deg(jd: f64) -> f64 {
    normalize_360(mean_rahu_deg(jd) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_at_j2000() {
        assert!((mean_rahu_deg(J2000_JD) - 125.0445).abs() < 1e-12);
    }

    #[test]
    fn rahu_is_retrograde() {
        let a = mean_rahu_deg(J2000_JD);
        let b = mean_rahu_deg(J2000_JD + 10.0);
        assert!(b < a);
    }

    #[test]
    fn full_cycle_about_18_6_years() {
        // 360 / 0.05295376 ≈ 6798.4 days
        let period = 360.0 / RAHU_DAILY_MOTION_DEG.abs();
        assert!((period / 365.25 - 18.61).abs() < 0.01, "period = {period}");
    }

    #[test]
    fn ketu_always_opposite() {
        let mut jd = J2000_JD - 100_000.0;
        while jd < J2000_JD + 100_000.0 {
            let r = mean_rahu_deg(jd);
            let k = mean_ketu_deg(jd);
            let diff = normalize_360(k - r);
            assert!((diff - 180.0).abs() < 1e-9, "jd {jd}: diff {diff}");
            jd += 333.3;
        }
    }
}
