//! Rule-based yoga and dosha detection over whole-sign placements.
//!
//! Each rule is an independent function from [`ChartSigns`] to an optional
//! finding. Rules are listed in static tables and evaluated by mapping over
//! the table, so no rule can observe another rule's outcome and evaluation
//! order does not change the result set. New rules are added by appending a
//! function to the relevant table.

use serde::Serialize;

use crate::bhava::house_from_signs;
use crate::graha::Graha;
use crate::language::Language;
use crate::rashi::rashi_from_longitude;

/// Sign indices of the nine grahas and the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSigns {
    /// 0-based rashi index per graha, indexed by graha ordinal.
    pub graha_signs: [u8; 9],
    /// 0-based rashi index of the lagna.
    pub lagna_sign: u8,
}

impl ChartSigns {
    /// Build from sidereal longitudes (indexed by graha ordinal) and the
    /// sidereal lagna.
    pub fn from_sidereal(longitudes: &[f64; 9], lagna_deg: f64) -> Self {
        let mut graha_signs = [0u8; 9];
        for (sign, &lon) in graha_signs.iter_mut().zip(longitudes) {
            *sign = rashi_from_longitude(lon).rashi_index;
        }
        Self {
            graha_signs,
            lagna_sign: rashi_from_longitude(lagna_deg).rashi_index,
        }
    }

    /// Rashi index of a graha.
    pub fn sign(&self, graha: Graha) -> u8 {
        self.graha_signs[graha.index() as usize]
    }

    /// Whole-sign house of a graha counted from the lagna.
    pub fn house(&self, graha: Graha) -> u8 {
        house_from_signs(self.sign(graha), self.lagna_sign)
    }
}

// ---------------------------------------------------------------------------
// Yogas
// ---------------------------------------------------------------------------

/// Auspicious combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaKind {
    /// Guru and Chandra rashi indices differ by a multiple of 3
    /// (`|guru - chandra| % 3 == 0`, same rashi included).
    Gajakesari,
    /// Surya and Buddh in the same rashi.
    Budhaditya,
    /// Placeholder reported when no other yoga forms.
    Samanya,
}

impl YogaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gajakesari => "Gajakesari Yoga",
            Self::Budhaditya => "Budhaditya Yoga",
            Self::Samanya => "Samanya Yoga",
        }
    }

    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Gajakesari => "கஜகேசரி யோகம்",
            Self::Budhaditya => "புதாதித்ய யோகம்",
            Self::Samanya => "சாமான்ய யோகம்",
        }
    }

    pub const fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.name(),
            Language::Tamil => self.tamil_name(),
        }
    }

    pub const fn effect(self) -> &'static str {
        match self {
            Self::Gajakesari => "Fame, wealth, and high intelligence.",
            Self::Budhaditya => "Skill in arts and communication.",
            Self::Samanya => "Balanced life.",
        }
    }
}

/// A detected yoga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YogaFinding {
    pub kind: YogaKind,
    /// Grahas forming the yoga; empty for the general placeholder.
    pub grahas: Vec<Graha>,
    pub effect: &'static str,
}

impl YogaFinding {
    fn new(kind: YogaKind, grahas: Vec<Graha>) -> Self {
        Self {
            kind,
            grahas,
            effect: kind.effect(),
        }
    }
}

/// A yoga rule: reads placements, returns a finding if the yoga forms.
pub type YogaRule = fn(&ChartSigns) -> Option<YogaFinding>;

/// Gajakesari: rashi distance between Guru and Chandra is a multiple of 3
/// (same sign included).
pub fn gajakesari(signs: &ChartSigns) -> Option<YogaFinding> {
    let jup = signs.sign(Graha::Guru) as i16;
    let moon = signs.sign(Graha::Chandra) as i16;
    ((jup - moon).abs() % 3 == 0)
        .then(|| YogaFinding::new(YogaKind::Gajakesari, vec![Graha::Guru, Graha::Chandra]))
}

/// Budhaditya: Surya and Buddh share a rashi.
pub fn budhaditya(signs: &ChartSigns) -> Option<YogaFinding> {
    (signs.sign(Graha::Surya) == signs.sign(Graha::Buddh))
        .then(|| YogaFinding::new(YogaKind::Budhaditya, vec![Graha::Surya, Graha::Buddh]))
}

/// All yoga rules.
pub static YOGA_RULES: [YogaRule; 2] = [gajakesari, budhaditya];

/// Evaluate every yoga rule. Never empty: falls back to [`YogaKind::Samanya`].
pub fn detect_yogas(signs: &ChartSigns) -> Vec<YogaFinding> {
    let found: Vec<YogaFinding> = YOGA_RULES.iter().filter_map(|rule| rule(signs)).collect();
    if found.is_empty() {
        vec![YogaFinding::new(YogaKind::Samanya, Vec::new())]
    } else {
        found
    }
}

// ---------------------------------------------------------------------------
// Doshas
// ---------------------------------------------------------------------------

/// Inauspicious combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DoshaKind {
    /// Mangal in house 1, 2, 4, 7, 8 or 12 from the lagna.
    Kuja,
}

impl DoshaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kuja => "Kuja Dosha",
        }
    }

    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Kuja => "குஜ தோஷம்",
        }
    }

    pub const fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.name(),
            Language::Tamil => self.tamil_name(),
        }
    }
}

/// Severity label of a dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Moderate,
}

impl Severity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moderate => "Moderate",
        }
    }
}

/// A detected dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoshaFinding {
    pub kind: DoshaKind,
    pub severity: Severity,
    /// House of the afflicting graha.
    pub house: u8,
    pub effect: &'static str,
    pub remedy: &'static str,
}

/// A dosha rule: reads placements, returns a finding if the dosha is present.
pub type DoshaRule = fn(&ChartSigns) -> Option<DoshaFinding>;

/// Houses from the lagna in which Mangal causes Kuja dosha.
pub const KUJA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Kuja (Mangal) dosha.
pub fn kuja_dosha(signs: &ChartSigns) -> Option<DoshaFinding> {
    let house = signs.house(Graha::Mangal);
    KUJA_HOUSES.contains(&house).then_some(DoshaFinding {
        kind: DoshaKind::Kuja,
        severity: Severity::Moderate,
        house,
        effect: "Marital delays.",
        remedy: "Mangal Shanti.",
    })
}

/// All dosha rules.
pub static DOSHA_RULES: [DoshaRule; 1] = [kuja_dosha];

/// Evaluate every dosha rule. May be empty.
pub fn detect_doshas(signs: &ChartSigns) -> Vec<DoshaFinding> {
    DOSHA_RULES.iter().filter_map(|rule| rule(signs)).collect()
}
