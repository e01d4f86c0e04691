//! Mean obliquity of the ecliptic of date.
//!
//! Linear form `ε = 23.439291° − 0.0130042° × T` (Meeus Eq. 22.2, first two
//! terms), T in Julian centuries from J2000.0.

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// Linear rate of the mean obliquity in degrees per Julian century.
const OBLIQUITY_RATE_DEG: f64 = -0.013_004_2;

/// Mean obliquity of date in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG * t
}

/// Mean obliquity of date in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_j2000() {
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn decreasing_forward() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        assert!((mean_obliquity_deg(1.0) - 23.4262868).abs() < 1e-9);
    }

    #[test]
    fn radians_consistent() {
        let t = -0.37;
        assert!((mean_obliquity_rad(t) - mean_obliquity_deg(t).to_radians()).abs() < 1e-15);
    }
}
