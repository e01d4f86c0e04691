//! General precession in ecliptic longitude.
//!
//! Rotates a longitude referred to the mean equinox of J2000.0 onto the mean
//! equinox of date: `λ_date = λ_J2000 + p_A(T)`.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006 precession),
//! Table 1. Public domain.

/// General precession in longitude p_A, in arcseconds.
///
/// `t` = Julian centuries since J2000.0. The linear term is
/// ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude p_A, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn sign_follows_epoch() {
        assert!(general_precession_longitude_deg(-1.0) < 0.0);
        assert!(general_precession_longitude_deg(1.0) > 1.39);
    }
}
