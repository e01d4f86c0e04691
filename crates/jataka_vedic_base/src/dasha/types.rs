//! Core types for Vimshottari dasha calculations.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used to convert dasha years to days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Length of one full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Default timeline horizon in years from birth.
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Hard cap on mahadashas in one timeline (about 1300 years).
pub const MAX_DASHA_PERIODS: usize = 100;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_ORDER: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full mahadasha length in years, parallel to [`VIMSHOTTARI_ORDER`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Position of a graha in [`VIMSHOTTARI_ORDER`].
pub const fn vimshottari_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full mahadasha length of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[vimshottari_position(graha)]
}

/// Convert dasha years to days.
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// How the bhuktis of the birth (truncated) mahadasha are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthBhuktiMode {
    /// Bhuktis start at birth and are scaled from the lord's full allotment,
    /// so together they run past the truncated mahadasha end.
    #[default]
    FullAllotment,
    /// Bhuktis are rescaled to the remaining balance and exactly partition
    /// `[birth, dasha_end]`.
    Balance,
    /// Full-allotment bhuktis anchored so the last one ends with the
    /// mahadasha. Bhuktis that finished before birth are kept and start
    /// before `birth_jd`.
    Elapsed,
}

/// Timeline generation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Generate mahadashas until their end reaches birth + this many years.
    pub horizon_years: f64,
    /// Bhukti layout of the birth mahadasha.
    pub birth_bhukti_mode: BirthBhuktiMode,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            birth_bhukti_mode: BirthBhuktiMode::default(),
        }
    }
}

/// A bhukti (antardasha) inside a mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BhuktiPeriod {
    /// Ruling graha.
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Length in years.
    pub years: f64,
}

impl BhuktiPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls inside `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// A mahadasha with its nine bhuktis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Allotted years (the remaining balance for the birth period).
    pub years: f64,
    /// The graha's full Vimshottari allotment.
    pub full_years: f64,
    /// True for the birth-truncated first period.
    pub is_partial: bool,
    /// Nine bhuktis starting with the mahadasha lord.
    pub bhuktis: Vec<BhuktiPeriod>,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls inside `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_cycle() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn position_matches_order() {
        for (i, g) in VIMSHOTTARI_ORDER.iter().enumerate() {
            assert_eq!(vimshottari_position(*g), i);
        }
        assert_eq!(vimshottari_years(Graha::Shukra), 20.0);
        assert_eq!(vimshottari_years(Graha::Surya), 6.0);
    }

    #[test]
    fn default_config() {
        let c = DashaConfig::default();
        assert_eq!(c.horizon_years, 120.0);
        assert_eq!(c.birth_bhukti_mode, BirthBhuktiMode::FullAllotment);
    }

    #[test]
    fn days_per_year_constant() {
        assert!((DAYS_PER_YEAR - 365.2425).abs() < 1e-15);
        assert!((years_to_days(2.0) - 730.485).abs() < 1e-9);
    }
}
