//! The immutable horoscope aggregate and its parts.

use jataka_vedic_base::{
    ActivePeriod, DashaPeriod, DoshaFinding, Graha, Language, NavamsaInfo, Nakshatra,
    PanchangInfo, Rashi, YogaFinding, active_period,
};
use jataka_time::UtcTime;
use serde::Serialize;

use crate::input::BirthInput;

/// Something placed in a chart: one of the nine grahas or the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartBody {
    Graha(Graha),
    Lagna,
}

impl ChartBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Lagna => "Lagna",
        }
    }

    pub const fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Graha(g), _) => g.display_name(language),
            (Self::Lagna, Language::English) => "Ascendant",
            (Self::Lagna, Language::Tamil) => "லக்னம்",
        }
    }

    /// Chart glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Graha(g) => g.symbol(),
            Self::Lagna => "As",
        }
    }
}

/// Position of one body in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub body: ChartBody,
    /// Tropical ecliptic longitude in degrees [0, 360).
    pub tropical_longitude: f64,
    /// Sidereal (Lahiri) longitude in degrees [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// Degrees into the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// 1-4
    pub pada: u8,
    /// Whole-sign house from the lagna, 1-12.
    pub house: u8,
    pub rashi_lord: Graha,
    pub nakshatra_lord: Graha,
    pub navamsa: NavamsaInfo,
}

/// Twelve houses and their occupants, in body order within each house.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HouseChart {
    /// Rashi of house 1.
    pub lagna_rashi: Option<Rashi>,
    houses: [Vec<ChartBody>; 12],
}

impl HouseChart {
    /// Empty chart anchored at `lagna_rashi`.
    pub fn new(lagna_rashi: Rashi) -> Self {
        Self {
            lagna_rashi: Some(lagna_rashi),
            houses: Default::default(),
        }
    }

    /// Place a body in a house (1-12). Out-of-range houses wrap.
    pub fn place(&mut self, house: u8, body: ChartBody) {
        let idx = (house.max(1) as usize - 1) % 12;
        self.houses[idx].push(body);
    }

    /// Occupants of a house (1-12); empty for anything else.
    pub fn occupants(&self, house: u8) -> &[ChartBody] {
        match house {
            1..=12 => self.houses[house as usize - 1].as_slice(),
            _ => &[],
        }
    }

    /// House holding `body`, if placed.
    pub fn house_of(&self, body: ChartBody) -> Option<u8> {
        self.houses
            .iter()
            .position(|h| h.contains(&body))
            .map(|i| i as u8 + 1)
    }

    /// `(house, occupants)` for all twelve houses.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[ChartBody])> {
        self.houses
            .iter()
            .enumerate()
            .map(|(i, h)| (i as u8 + 1, h.as_slice()))
    }
}

/// A complete natal chart, built once by
/// [`compute_horoscope`](crate::compute_horoscope) and never modified.
#[derive(Debug, Clone, Serialize)]
pub struct Horoscope {
    pub birth: BirthInput,
    /// Birth moment in UTC.
    pub birth_utc: UtcTime,
    /// Julian Day (UT) of birth.
    pub jd: f64,
    /// Lahiri ayanamsha at birth, degrees.
    pub ayanamsa: f64,
    pub lagna: Placement,
    /// Nine placements in graha order.
    pub grahas: Vec<Placement>,
    pub rasi_chart: HouseChart,
    pub navamsa_chart: HouseChart,
    pub panchang: PanchangInfo,
    pub dasas: Vec<DashaPeriod>,
    pub yogas: Vec<YogaFinding>,
    pub doshas: Vec<DoshaFinding>,
}

impl Horoscope {
    /// Placement of a graha.
    pub fn placement(&self, graha: Graha) -> Option<&Placement> {
        self.grahas.iter().find(|p| p.body == ChartBody::Graha(graha))
    }

    /// The Moon's nakshatra, which is also the panchang nakshatra.
    pub fn janma_nakshatra(&self) -> Option<Nakshatra> {
        self.placement(Graha::Chandra).map(|p| p.nakshatra)
    }

    /// Dasa and bhukti running at `jd`.
    pub fn active_period(&self, jd: f64) -> Option<ActivePeriod<'_>> {
        active_period(&self.dasas, jd)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_place_and_lookup() {
        let mut chart = HouseChart::new(Rashi::Kanya);
        chart.place(1, ChartBody::Lagna);
        chart.place(2, ChartBody::Graha(Graha::Chandra));
        chart.place(2, ChartBody::Graha(Graha::Guru));
        assert_eq!(chart.occupants(2).len(), 2);
        assert_eq!(chart.house_of(ChartBody::Graha(Graha::Guru)), Some(2));
        assert_eq!(chart.house_of(ChartBody::Graha(Graha::Ketu)), None);
        assert!(chart.occupants(0).is_empty());
        assert!(chart.occupants(13).is_empty());
        assert_eq!(chart.iter().count(), 12);
    }

    #[test]
    fn lagna_names() {
        assert_eq!(ChartBody::Lagna.display_name(Language::Tamil), "லக்னம்");
        assert_eq!(ChartBody::Lagna.symbol(), "As");
        assert_eq!(
            ChartBody::Graha(Graha::Shani).symbol(),
            Graha::Shani.symbol()
        );
    }
}
