//! Bhukti (antardasha) generation.
//!
//! Child duration = `base_years × full_years(child) / 120`, children chained
//! end-to-start from the parent start in Vimshottari order beginning with
//! the parent lord.

use crate::graha::Graha;

use super::types::{
    BhuktiPeriod, VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    vimshottari_position, years_to_days,
};

/// Snap the last bhukti's end to `end_jd` to absorb floating-point drift.
pub fn snap_last_bhukti_end(bhuktis: &mut [BhuktiPeriod], end_jd: f64) {
    if let Some(last) = bhuktis.last_mut() {
        last.end_jd = end_jd;
    }
}

/// Nine proportional bhuktis laid out over `[start_jd, end_jd]`.
///
/// `base_years` sets the proportions; the caller guarantees
/// `end_jd ≈ start_jd + base_years × DAYS_PER_YEAR`.
pub(crate) fn proportional_bhuktis(
    lord: Graha,
    start_jd: f64,
    end_jd: f64,
    base_years: f64,
) -> Vec<BhuktiPeriod> {
    let start_pos = vimshottari_position(lord);
    let mut bhuktis = Vec::with_capacity(VIMSHOTTARI_ORDER.len());
    let mut cursor = start_jd;

    for i in 0..VIMSHOTTARI_ORDER.len() {
        let pos = (start_pos + i) % VIMSHOTTARI_ORDER.len();
        let years = base_years * VIMSHOTTARI_YEARS[pos] / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + years_to_days(years);
        bhuktis.push(BhuktiPeriod {
            graha: VIMSHOTTARI_ORDER[pos],
            start_jd: cursor,
            end_jd: end,
            years,
        });
        cursor = end;
    }

    snap_last_bhukti_end(&mut bhuktis, end_jd);
    bhuktis
}

/// Nine bhuktis of a `base_years`-long period of `lord` starting at `start_jd`.
///
/// The last bhukti ends exactly at `start_jd + base_years × DAYS_PER_YEAR`.
pub fn bhuktis(lord: Graha, start_jd: f64, base_years: f64) -> Vec<BhuktiPeriod> {
    proportional_bhuktis(lord, start_jd, start_jd + years_to_days(base_years), base_years)
}
