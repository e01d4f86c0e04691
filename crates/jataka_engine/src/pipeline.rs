//! Birth input to horoscope.
//!
//! The pipeline is a straight line: Julian Day, ayanamsha, tropical bodies
//! and ascendant, sidereal mapping, then the derived layers (charts,
//! panchang, dasa timeline, yoga/dosha rules). Every step is total, so the
//! whole computation is too.

use jataka_vedic_base::{
    ALL_GRAHAS, ChartSigns, Graha, Rashi, ascendant_deg, detect_doshas, detect_yogas,
    house_from_signs, lahiri_ayanamsa_deg, nakshatra_from_longitude, navamsa_from_longitude,
    panchang_at, rashi_from_longitude, to_sidereal, tropical_longitudes, vimshottari_timeline,
};
use jataka_time::UtcTime;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::horoscope::{ChartBody, Horoscope, HouseChart, Placement};
use crate::input::BirthInput;

/// Compute the full horoscope for one birth.
///
/// Pure and deterministic: the same input and config always give the same
/// result, and calls share no state.
pub fn compute_horoscope(input: &BirthInput, config: &EngineConfig) -> Horoscope {
    let _span = tracing::debug_span!("compute_horoscope", name = %input.name).entered();

    let jd = input.julian_day();
    let ayanamsa = lahiri_ayanamsa_deg(jd);
    let tropical = tropical_longitudes(jd);
    let asc_tropical = ascendant_deg(jd, input.latitude, input.longitude);
    debug!(jd, ayanamsa, asc_tropical, "birth instant");

    let mut sidereal = [0.0; 9];
    for (g, lon) in tropical.iter() {
        sidereal[g.index() as usize] = to_sidereal(lon, ayanamsa);
    }
    let lagna_sid = to_sidereal(asc_tropical, ayanamsa);
    let lagna_sign = rashi_from_longitude(lagna_sid).rashi_index;

    let lagna = placement(ChartBody::Lagna, asc_tropical, lagna_sid, lagna_sign);
    let grahas: Vec<Placement> = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let p = placement(
                ChartBody::Graha(g),
                tropical.get(g),
                sidereal[g.index() as usize],
                lagna_sign,
            );
            trace!(
                graha = g.name(),
                longitude = p.longitude,
                rashi = p.rashi.name(),
                house = p.house,
                "placement"
            );
            p
        })
        .collect();

    let rasi_chart = rasi_chart(&lagna, &grahas);
    let navamsa_chart = navamsa_chart(&lagna, &grahas);

    let sun = sidereal[Graha::Surya.index() as usize];
    let moon = sidereal[Graha::Chandra.index() as usize];
    let panchang = panchang_at(sun, moon, input.local_julian_day());
    debug!(
        tithi = panchang.tithi.tithi.name(),
        yoga = panchang.yoga.yoga.name(),
        vaar = panchang.vaar.name(),
        "panchang"
    );

    let dasas = vimshottari_timeline(jd, moon, &config.dasha);
    debug!(
        periods = dasas.len(),
        first = ?dasas.first().map(|d| d.graha),
        "dasa timeline"
    );

    let signs = ChartSigns::from_sidereal(&sidereal, lagna_sid);
    let yogas = detect_yogas(&signs);
    let doshas = detect_doshas(&signs);
    debug!(yogas = yogas.len(), doshas = doshas.len(), "rules evaluated");

    Horoscope {
        birth: input.clone(),
        birth_utc: UtcTime::from_jd(jd),
        jd,
        ayanamsa,
        lagna,
        grahas,
        rasi_chart,
        navamsa_chart,
        panchang,
        dasas,
        yogas,
        doshas,
    }
}

fn placement(body: ChartBody, tropical: f64, sidereal: f64, lagna_sign: u8) -> Placement {
    let r = rashi_from_longitude(sidereal);
    let n = nakshatra_from_longitude(sidereal);
    Placement {
        body,
        tropical_longitude: tropical,
        longitude: sidereal,
        rashi: r.rashi,
        degrees_in_rashi: r.degrees_in_rashi,
        nakshatra: n.nakshatra,
        pada: n.pada,
        house: house_from_signs(r.rashi_index, lagna_sign),
        rashi_lord: r.rashi.lord(),
        nakshatra_lord: n.nakshatra.lord(),
        navamsa: navamsa_from_longitude(sidereal),
    }
}

fn rasi_chart(lagna: &Placement, grahas: &[Placement]) -> HouseChart {
    let mut chart = HouseChart::new(lagna.rashi);
    for p in std::iter::once(lagna).chain(grahas) {
        chart.place(p.house, p.body);
    }
    chart
}

/// D9 chart with houses counted from the navamsa lagna.
fn navamsa_chart(lagna: &Placement, grahas: &[Placement]) -> HouseChart {
    let d9_lagna = lagna.navamsa.rashi_index;
    let mut chart = HouseChart::new(Rashi::from_index(d9_lagna));
    for p in std::iter::once(lagna).chain(grahas) {
        chart.place(house_from_signs(p.navamsa.rashi_index, d9_lagna), p.body);
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::IST_OFFSET_HOURS;

    fn chennai(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> BirthInput {
        BirthInput {
            name: "Test".into(),
            place: "Chennai".into(),
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours: IST_OFFSET_HOURS,
            latitude: 13.08,
            longitude: 80.27,
        }
    }

    #[test]
    fn lagna_is_house_one() {
        let h = compute_horoscope(&chennai(1990, 6, 15, 14, 30), &EngineConfig::default());
        assert_eq!(h.lagna.house, 1);
        assert_eq!(h.rasi_chart.house_of(ChartBody::Lagna), Some(1));
        assert_eq!(h.navamsa_chart.house_of(ChartBody::Lagna), Some(1));
    }

    #[test]
    fn every_body_in_both_charts() {
        let h = compute_horoscope(&chennai(1975, 3, 2, 6, 5), &EngineConfig::default());
        for p in &h.grahas {
            assert_eq!(h.rasi_chart.house_of(p.body), Some(p.house));
            assert!(h.navamsa_chart.house_of(p.body).is_some());
        }
        let total: usize = h.rasi_chart.iter().map(|(_, occ)| occ.len()).sum();
        assert_eq!(total, 10);
        let total: usize = h.navamsa_chart.iter().map(|(_, occ)| occ.len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn grahas_in_order() {
        let h = compute_horoscope(&chennai(2010, 10, 10, 10, 10), &EngineConfig::default());
        let order: Vec<ChartBody> = h.grahas.iter().map(|p| p.body).collect();
        let expected: Vec<ChartBody> = ALL_GRAHAS.iter().map(|&g| ChartBody::Graha(g)).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn repeated_calls_identical() {
        let input = chennai(1984, 12, 31, 23, 59);
        let cfg = EngineConfig::default();
        let a = compute_horoscope(&input, &cfg);
        let b = compute_horoscope(&input, &cfg);
        assert_eq!(a.jd, b.jd);
        assert_eq!(a.grahas, b.grahas);
        assert_eq!(a.dasas, b.dasas);
        assert_eq!(a.yogas, b.yogas);
    }
}
