//! Lookup of the running dasha and bhukti at a moment.

use serde::Serialize;

use super::types::{BhuktiPeriod, DashaPeriod};

/// The mahadasha and bhukti running at a queried moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivePeriod<'a> {
    pub dasha: &'a DashaPeriod,
    /// `None` when the bhuktis do not cover `jd` (possible only for a
    /// birth period whose bhuktis are rescaled or anchored differently).
    pub bhukti: Option<&'a BhuktiPeriod>,
}

/// Find the mahadasha containing `jd` and, within it, the running bhukti.
///
/// Returns `None` if `jd` lies before the first period or after the last.
pub fn active_period(timeline: &[DashaPeriod], jd: f64) -> Option<ActivePeriod<'_>> {
    let dasha = timeline.iter().find(|p| p.contains(jd))?;
    let bhukti = dasha.bhuktis.iter().find(|b| b.contains(jd));
    Some(ActivePeriod { dasha, bhukti })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DashaConfig, years_to_days};
    use crate::dasha::vimshottari::vimshottari_timeline;
    use crate::graha::Graha;

    #[test]
    fn finds_second_period() {
        let birth = 2451545.0;
        // Moon at 0° → Ketu with full 7 years, then Shukra
        let t = vimshottari_timeline(birth, 0.0, &DashaConfig::default());
        let jd = birth + years_to_days(7.5);
        let a = active_period(&t, jd);
        assert_eq!(a.map(|a| a.dasha.graha), Some(Graha::Shukra));
        // Shukra-Shukra bhukti lasts 20×20/120 = 3.33 years
        assert_eq!(a.and_then(|a| a.bhukti).map(|b| b.graha), Some(Graha::Shukra));
    }

    #[test]
    fn outside_timeline() {
        let birth = 2451545.0;
        let t = vimshottari_timeline(birth, 0.0, &DashaConfig::default());
        assert!(active_period(&t, birth - 1.0).is_none());
        assert!(active_period(&t, birth + years_to_days(500.0)).is_none());
        assert!(active_period(&[], birth).is_none());
    }
}
