//! Short text summary handed to the conversational assistant.
//!
//! Carries only name, ascendant sign, tithi, nakshatra, yoga names and
//! dosha names.

use jataka_vedic_base::Language;

use crate::horoscope::Horoscope;

impl Horoscope {
    /// One-paragraph digest in the requested language.
    pub fn digest(&self, language: Language) -> String {
        let labels = Labels::for_language(language);
        let tithi = &self.panchang.tithi;

        let nakshatra = self
            .janma_nakshatra()
            .map(|n| n.display_name(language))
            .unwrap_or("-");
        let yogas = join(self.yogas.iter().map(|y| y.kind.display_name(language)));
        let doshas = join(self.doshas.iter().map(|d| d.kind.display_name(language)));

        format!(
            "{}: {}. {}: {}. {}: {} ({}). {}: {}. {}: {}. {}: {}.",
            labels.name,
            self.birth.name,
            labels.lagna,
            self.lagna.rashi.display_name(language),
            labels.tithi,
            tithi.tithi.display_name(language),
            tithi.paksha.display_name(language),
            labels.nakshatra,
            nakshatra,
            labels.yogas,
            yogas,
            labels.doshas,
            if doshas.is_empty() { labels.none } else { doshas.as_str() },
        )
    }
}

struct Labels {
    name: &'static str,
    lagna: &'static str,
    tithi: &'static str,
    nakshatra: &'static str,
    yogas: &'static str,
    doshas: &'static str,
    none: &'static str,
}

impl Labels {
    const fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                name: "Name",
                lagna: "Ascendant",
                tithi: "Tithi",
                nakshatra: "Nakshatra",
                yogas: "Yogas",
                doshas: "Doshas",
                none: "None",
            },
            Language::Tamil => Self {
                name: "பெயர்",
                lagna: "லக்னம்",
                tithi: "திதி",
                nakshatra: "நட்சத்திரம்",
                yogas: "யோகங்கள்",
                doshas: "தோஷங்கள்",
                none: "இல்லை",
            },
        }
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::input::{BirthInput, IST_OFFSET_HOURS};
    use crate::pipeline::compute_horoscope;
    use jataka_vedic_base::{Language, Rashi};

    fn sample() -> crate::Horoscope {
        let input = BirthInput {
            name: "Meena".into(),
            place: "Chennai".into(),
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            utc_offset_hours: IST_OFFSET_HOURS,
            latitude: 13.08,
            longitude: 80.27,
        };
        compute_horoscope(&input, &EngineConfig::default())
    }

    #[test]
    fn english_digest_fields() {
        let d = sample().digest(Language::English);
        assert!(d.starts_with("Name: Meena."), "{d}");
        assert!(d.contains("Ascendant: Virgo"), "{d}");
        assert!(d.contains("Nakshatra: Swati"), "{d}");
        assert!(d.contains("Gajakesari Yoga"), "{d}");
        assert!(d.contains("Doshas: None."), "{d}");
    }

    #[test]
    fn digest_omits_longitudes_and_dasas() {
        let h = sample();
        let d = h.digest(Language::English);
        assert!(!d.contains("Rahu"), "{d}");
        assert!(!d.contains(&format!("{:.2}", h.ayanamsa)), "{d}");
    }

    #[test]
    fn tamil_digest_uses_tamil_labels() {
        let d = sample().digest(Language::Tamil);
        assert!(d.starts_with("பெயர்: Meena."), "{d}");
        assert!(d.contains("கஜகேசரி யோகம்"), "{d}");
        assert!(d.contains(Rashi::Kanya.tamil_name()), "{d}");
    }
}
