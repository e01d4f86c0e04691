//! Tropical longitudes of all nine grahas at one instant.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha, TARA_GRAHAS};
use crate::luminaries::{moon_longitude_deg, sun_longitude_deg};
use crate::lunar_nodes::{mean_ketu_deg, mean_rahu_deg};
use crate::planets::tara_longitude_deg;

/// Tropical ecliptic longitudes in degrees [0, 360), indexed by graha ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitudes {
    pub longitudes: [f64; 9],
}

impl BodyLongitudes {
    /// Longitude of one graha.
    pub fn get(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// Iterate `(graha, longitude)` pairs in graha order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        ALL_GRAHAS.iter().map(|&g| (g, self.get(g)))
    }
}

/// Compute tropical longitudes of all nine grahas for a Julian Day.
pub fn tropical_longitudes(jd: f64) -> BodyLongitudes {
    let mut longitudes = [0.0; 9];
    longitudes[Graha::Surya.index() as usize] = sun_longitude_deg(jd);
    longitudes[Graha::Chandra.index() as usize] = moon_longitude_deg(jd);
    longitudes[Graha::Rahu.index() as usize] = mean_rahu_deg(jd);
    longitudes[Graha::Ketu.index() as usize] = mean_ketu_deg(jd);
    for g in TARA_GRAHAS {
        if let Some(lon) = tara_longitude_deg(g, jd) {
            longitudes[g.index() as usize] = lon;
        }
    }
    BodyLongitudes { longitudes }
}
