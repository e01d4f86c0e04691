//! Vimshottari mahadasha timeline from the Moon's birth nakshatra.

use crate::nakshatra::nakshatra_from_longitude;

use super::balance::nakshatra_birth_balance;
use super::subperiod::{bhuktis, proportional_bhuktis};
use super::types::{
    BirthBhuktiMode, DashaConfig, DashaPeriod, MAX_DASHA_PERIODS, VIMSHOTTARI_ORDER,
    VIMSHOTTARI_YEARS, vimshottari_position, vimshottari_years, years_to_days,
};

/// The birth-truncated first mahadasha.
pub fn birth_dasha(birth_jd: f64, moon_sidereal_lon: f64, mode: BirthBhuktiMode) -> DashaPeriod {
    let lord = nakshatra_from_longitude(moon_sidereal_lon).nakshatra.lord();
    let full_years = vimshottari_years(lord);
    let (_, balance_years, _) = nakshatra_birth_balance(moon_sidereal_lon, full_years);
    let end_jd = birth_jd + years_to_days(balance_years);

    let sub = match mode {
        BirthBhuktiMode::FullAllotment => bhuktis(lord, birth_jd, full_years),
        BirthBhuktiMode::Balance => proportional_bhuktis(lord, birth_jd, end_jd, balance_years),
        BirthBhuktiMode::Elapsed => {
            let notional_start = end_jd - years_to_days(full_years);
            proportional_bhuktis(lord, notional_start, end_jd, full_years)
        }
    };

    DashaPeriod {
        graha: lord,
        start_jd: birth_jd,
        end_jd,
        years: balance_years,
        full_years,
        is_partial: true,
        bhuktis: sub,
    }
}

/// Build the mahadasha timeline.
///
/// The first period is the Moon's nakshatra lord with its remaining balance.
/// Each following lord runs its full allotment, chained end-to-start, until
/// a period end reaches `birth_jd + horizon_years`. At least the birth
/// period is always returned.
pub fn vimshottari_timeline(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &DashaConfig,
) -> Vec<DashaPeriod> {
    let first = birth_dasha(birth_jd, moon_sidereal_lon, config.birth_bhukti_mode);
    let horizon_jd = birth_jd + years_to_days(config.horizon_years.max(0.0));
    let mut pos = vimshottari_position(first.graha);
    let mut cursor = first.end_jd;
    let mut periods = vec![first];

    while cursor < horizon_jd && periods.len() < MAX_DASHA_PERIODS {
        pos = (pos + 1) % VIMSHOTTARI_ORDER.len();
        let graha = VIMSHOTTARI_ORDER[pos];
        let years = VIMSHOTTARI_YEARS[pos];
        let end = cursor + years_to_days(years);
        periods.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            years,
            full_years: years,
            is_partial: false,
            bhuktis: bhuktis(graha, cursor, years),
        });
        cursor = end;
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    const BIRTH: f64 = 2451544.2708333335;

    #[test]
    fn first_lord_from_moon_nakshatra() {
        // Swati (index 14) is ruled by Rahu
        let moon = 14.0 * NAKSHATRA_SPAN_27 + 1.0;
        let d = birth_dasha(BIRTH, moon, BirthBhuktiMode::FullAllotment);
        assert_eq!(d.graha, Graha::Rahu);
        assert!(d.is_partial);
        assert_eq!(d.full_years, 18.0);
        assert!((d.years - 18.0 * (1.0 - 1.0 / NAKSHATRA_SPAN_27)).abs() < 1e-9);
    }

    #[test]
    fn full_allotment_bhuktis_overrun() {
        let moon = 14.0 * NAKSHATRA_SPAN_27 + 6.0;
        let d = birth_dasha(BIRTH, moon, BirthBhuktiMode::FullAllotment);
        assert_eq!(d.bhuktis[0].start_jd, BIRTH);
        let span: f64 = d.bhuktis.iter().map(|b| b.years).sum();
        assert!((span - 18.0).abs() < 1e-9);
        assert!(d.bhuktis[8].end_jd > d.end_jd);
    }

    #[test]
    fn balance_bhuktis_partition_birth_period() {
        let moon = 100.0;
        let d = birth_dasha(BIRTH, moon, BirthBhuktiMode::Balance);
        let span: f64 = d.bhuktis.iter().map(|b| b.years).sum();
        assert!((span - d.years).abs() < 1e-6);
        assert_eq!(d.bhuktis[0].start_jd, d.start_jd);
        assert_eq!(d.bhuktis[8].end_jd, d.end_jd);
    }

    #[test]
    fn elapsed_bhuktis_end_with_dasha() {
        let moon = 100.0;
        let d = birth_dasha(BIRTH, moon, BirthBhuktiMode::Elapsed);
        assert_eq!(d.bhuktis[8].end_jd, d.end_jd);
        assert!(d.bhuktis[0].start_jd <= BIRTH);
    }

    #[test]
    fn timeline_reaches_horizon() {
        let cfg = DashaConfig::default();
        let t = vimshottari_timeline(BIRTH, 200.0, &cfg);
        let last = t.last().map(|p| p.end_jd).unwrap_or(0.0);
        assert!(last >= BIRTH + years_to_days(120.0));
        // The period before the last still ends inside the horizon
        assert!(t[t.len() - 2].end_jd < BIRTH + years_to_days(120.0));
        for w in t.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        assert!(t.iter().skip(1).all(|p| !p.is_partial));
    }

    #[test]
    fn zero_horizon_keeps_birth_period() {
        let cfg = DashaConfig {
            horizon_years: 0.0,
            ..DashaConfig::default()
        };
        assert_eq!(vimshottari_timeline(BIRTH, 200.0, &cfg).len(), 1);
    }

    #[test]
    fn huge_horizon_is_capped() {
        let cfg = DashaConfig {
            horizon_years: 1e9,
            ..DashaConfig::default()
        };
        assert_eq!(vimshottari_timeline(BIRTH, 200.0, &cfg).len(), MAX_DASHA_PERIODS);
    }

    #[test]
    fn lords_follow_cycle() {
        let t = vimshottari_timeline(BIRTH, 0.0, &DashaConfig::default());
        let lords: Vec<Graha> = t.iter().take(3).map(|p| p.graha).collect();
        assert_eq!(lords, vec![Graha::Ketu, Graha::Shukra, Graha::Surya]);
    }
}
