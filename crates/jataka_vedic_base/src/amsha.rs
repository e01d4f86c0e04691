//! Navamsa (D9) divisional mapping.
//!
//! Each 30-degree rashi is split into 9 parts of 3 deg 20'. The count of
//! navamsas starts from a sign fixed by the element of the natal rashi:
//! fire signs from Mesha, earth from Makara, air from Tula, water from Karka.

use serde::{Deserialize, Serialize};

use crate::rashi::{RASHI_SPAN, Rashi};
use crate::util::normalize_360;

/// Span of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl RashiElement {
    /// Rashi index from which the navamsa count starts.
    pub const fn navamsa_start(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Earth => 9,
            Self::Air => 6,
            Self::Water => 3,
        }
    }
}

/// Element of a rashi by 0-based index.
///
/// Fire: 0,4,8 (Mesha, Simha, Dhanu)
/// Earth: 1,5,9 (Vrishabha, Kanya, Makara)
/// Air: 2,6,10 (Mithuna, Tula, Kumbha)
/// Water: 3,7,11 (Karka, Vrischika, Meena)
pub const fn rashi_element(rashi_index: u8) -> RashiElement {
    match rashi_index % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        _ => RashiElement::Water,
    }
}

/// Navamsa placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavamsaInfo {
    /// Rashi occupied in the D9 chart.
    pub rashi: Rashi,
    /// 0-based index of that rashi.
    pub rashi_index: u8,
    /// Which of the 9 divisions of the natal rashi, 1-9.
    pub pada: u8,
    /// Longitude projected into the D9 chart [0, 360).
    pub longitude: f64,
}

/// Map a sidereal longitude into its navamsa rashi.
pub fn navamsa_from_longitude(sidereal_lon_deg: f64) -> NavamsaInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let natal_idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let pos_in_rashi = (lon - natal_idx as f64 * RASHI_SPAN).max(0.0);
    let div_idx = ((pos_in_rashi / NAVAMSA_SPAN).floor() as u8).min(8);

    let start = rashi_element(natal_idx).navamsa_start();
    let target = (start + div_idx) % 12;

    // Position inside the division, stretched back to a full 30° sign
    let scaled = (pos_in_rashi - div_idx as f64 * NAVAMSA_SPAN) / NAVAMSA_SPAN * RASHI_SPAN;

    NavamsaInfo {
        rashi: Rashi::from_index(target),
        rashi_index: target,
        pada: div_idx + 1,
        longitude: normalize_360(target as f64 * RASHI_SPAN + scaled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_signs_follow_element() {
        assert_eq!(rashi_element(0).navamsa_start(), Rashi::Mesha.index());
        assert_eq!(rashi_element(5).navamsa_start(), Rashi::Makara.index());
        assert_eq!(rashi_element(10).navamsa_start(), Rashi::Tula.index());
        assert_eq!(rashi_element(7).navamsa_start(), Rashi::Karka.index());
    }

    #[test]
    fn first_division_lands_on_element_start() {
        for idx in 0..12u8 {
            let n = navamsa_from_longitude(idx as f64 * RASHI_SPAN + 0.5);
            assert_eq!(n.rashi_index, rashi_element(idx).navamsa_start(), "rashi {idx}");
            assert_eq!(n.pada, 1);
        }
    }

    #[test]
    fn fire_rashi() {
        // Mesha 5°: second division, counted from Mesha
        let n = navamsa_from_longitude(5.0);
        assert_eq!(n.rashi, Rashi::Vrishabha);
        assert_eq!(n.pada, 2);
        assert!((n.longitude - 45.0).abs() < 0.01, "got {}", n.longitude);
    }

    #[test]
    fn earth_rashi() {
        // Vrishabha 15.5°: fifth division from Makara wraps to Vrishabha
        let n = navamsa_from_longitude(45.5);
        assert_eq!(n.rashi_index, 1);
        assert!((n.longitude - 49.5).abs() < 0.01, "got {}", n.longitude);
    }

    #[test]
    fn air_and_water_starts() {
        assert_eq!(navamsa_from_longitude(60.0).rashi, Rashi::Tula);
        assert_eq!(navamsa_from_longitude(90.0).rashi, Rashi::Karka);
    }

    #[test]
    fn last_division_of_meena() {
        // Meena is water: 3 + 8 = Meena itself (vargottama end of zodiac)
        let n = navamsa_from_longitude(359.99);
        assert_eq!(n.rashi, Rashi::Meena);
        assert_eq!(n.pada, 9);
    }

    #[test]
    fn every_longitude_in_range() {
        let mut lon = -720.0;
        while lon < 720.0 {
            let n = navamsa_from_longitude(lon);
            assert!(n.rashi_index < 12);
            assert!((1..=9).contains(&n.pada));
            assert!((0.0..360.0).contains(&n.longitude), "lon {lon} -> {}", n.longitude);
            lon += 0.7;
        }
    }
}
