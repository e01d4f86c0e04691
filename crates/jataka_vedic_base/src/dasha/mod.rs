//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle assigns nine mahadashas in fixed order,
//! starting from the lord of the Moon's birth nakshatra. Each mahadasha is
//! split into nine bhuktis in proportion to the lords' full allotments.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use query::{ActivePeriod, active_period};
pub use subperiod::{bhuktis, snap_last_bhukti_end};
pub use types::{
    BhuktiPeriod, BirthBhuktiMode, DAYS_PER_YEAR, DEFAULT_HORIZON_YEARS, DashaConfig, DashaPeriod,
    MAX_DASHA_PERIODS, VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    vimshottari_position, vimshottari_years, years_to_days,
};
pub use vimshottari::{birth_dasha, vimshottari_timeline};
