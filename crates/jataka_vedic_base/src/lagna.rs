//! Lagna (Ascendant) computation.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon. From
//! local sidereal time θ, geographic latitude φ and mean obliquity ε:
//!
//! `Asc = atan2(cos θ, −(sin θ·cos φ − tan ε·sin φ))`
//!
//! The result is a tropical longitude; subtract the ayanamsha for the
//! sidereal lagna. Latitude and longitude are not range-checked. Values
//! outside −90..90 / −180..180 give degenerate but finite geometry; at the
//! poles themselves `tan` and `cos` stay finite so nothing panics.

use jataka_frames::mean_obliquity_rad;
use jataka_time::{gmst_deg, jd_to_centuries, local_sidereal_time_deg};

use crate::util::normalize_360;

/// Tropical ecliptic longitude of the Lagna in degrees [0, 360).
///
/// `latitude_deg` is geodetic latitude (north positive), `longitude_deg`
/// is east longitude (east positive).
pub fn ascendant_deg(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let lst = local_sidereal_time_deg(gmst_deg(jd), longitude_deg).to_radians();
    let eps = mean_obliquity_rad(t);
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        lst.cos(),
        -(lst.sin() * phi.cos() - eps.tan() * phi.sin()),
    )
    .to_degrees();
    normalize_360(asc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::J2000_JD;

    #[test]
    fn equator_lst_zero_gives_cancer_point() {
        // At φ=0 and θ=0 the rising point is 90° (0h RA culminates, 6h rises)
        let jd = J2000_JD;
        let lon = -gmst_deg(jd);
        let asc = ascendant_deg(jd, 0.0, lon);
        assert!((asc - 90.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn full_sweep_in_range() {
        let mut jd = J2000_JD;
        while jd < J2000_JD + 1.0 {
            for lat in [-66.0, -13.0, 0.0, 13.08, 51.5, 66.0] {
                let asc = ascendant_deg(jd, lat, 80.27);
                assert!((0.0..360.0).contains(&asc), "jd {jd} lat {lat}: {asc}");
            }
            jd += 0.01;
        }
    }

    #[test]
    fn degenerate_coordinates_stay_finite() {
        for (lat, lon) in [(90.0, 0.0), (-90.0, 10.0), (123.0, 500.0), (-400.0, -720.0)] {
            let asc = ascendant_deg(J2000_JD, lat, lon);
            assert!(asc.is_finite() && (0.0..360.0).contains(&asc), "({lat},{lon}) -> {asc}");
        }
    }

    #[test]
    fn ascendant_rises_through_zodiac_in_a_day() {
        // Over one sidereal day the ascendant visits every sign
        let mut seen = [false; 12];
        let mut jd = J2000_JD;
        while jd < J2000_JD + 0.9973 {
            let asc = ascendant_deg(jd, 13.08, 80.27);
            seen[(asc / 30.0) as usize % 12] = true;
            jd += 0.002;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
