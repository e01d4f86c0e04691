//! Sidereal (Vedic) horoscope primitives.
//!
//! This crate provides:
//! - Linearized Lahiri ayanamsha and tropical→sidereal conversion
//! - Truncated-series Sun/Moon longitudes, mean lunar nodes, and Keplerian
//!   longitudes for the five tara grahas
//! - Lagna (ascendant) from sidereal time, latitude and obliquity
//! - Rashi, nakshatra/pada, navamsa and whole-sign house lookups
//! - Vimshottari mahadasha/bhukti timelines
//! - Panchang elements (tithi, karana, yoga, vaar)
//! - Rule tables for yogas and doshas
//!
//! Every function is total over finite input: no `Result`, no panics.
//! Identifiers are enums with compile-time lookup tables.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod combinations;
pub mod dasha;
pub mod graha;
pub mod lagna;
pub mod language;
pub mod longitudes;
pub mod luminaries;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod panchang;
pub mod planets;
pub mod rashi;
pub mod util;

pub use amsha::{NAVAMSA_SPAN, NavamsaInfo, RashiElement, navamsa_from_longitude, rashi_element};
pub use ayanamsha::{lahiri_ayanamsa_deg, to_sidereal};
pub use bhava::house_from_signs;
pub use combinations::{
    ChartSigns, DOSHA_RULES, DoshaFinding, DoshaKind, DoshaRule, Severity, YOGA_RULES,
    YogaFinding, YogaKind, YogaRule, detect_doshas, detect_yogas,
};
pub use dasha::{
    ActivePeriod, BhuktiPeriod, BirthBhuktiMode, DAYS_PER_YEAR, DashaConfig, DashaPeriod,
    VIMSHOTTARI_ORDER, active_period, bhuktis, nakshatra_birth_balance, vimshottari_timeline,
};
pub use graha::{ALL_GRAHAS, Graha, TARA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use lagna::ascendant_deg;
pub use language::Language;
pub use longitudes::{BodyLongitudes, tropical_longitudes};
pub use luminaries::{moon_longitude_deg, sun_longitude_deg};
pub use lunar_nodes::{mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_lord,
};
pub use panchang::{
    Karana, KaranaInfo, Paksha, PanchangInfo, Tithi, TithiInfo, Vaar, Yoga, YogaInfo,
    elongation, karana_from_elongation, panchang_at, tithi_from_elongation, vaar_from_jd,
    yoga_from_sum,
};
pub use planets::tara_longitude_deg;
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::normalize_360;
