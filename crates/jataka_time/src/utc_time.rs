//! UTC calendar date/time used for rendering period boundaries.
//!
//! The engine keeps every instant as a Julian Day internally. `UtcTime` is
//! the human-facing form produced at the edges (dasa boundaries, birth
//! instant) and is what the serialized horoscope carries.

use serde::{Deserialize, Serialize};

use crate::julian::{SECONDS_PER_DAY, civil_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day of this instant.
    pub fn to_jd(&self) -> f64 {
        civil_to_jd(
            self.year,
            self.month,
            self.day,
            self.hour as f64,
            self.minute as f64 + self.second / 60.0,
        )
    }

    /// Calendar form of a Julian Day.
    ///
    /// A half-millisecond nudge keeps instants that sit exactly on a minute
    /// boundary from rendering as `:59.999` after float round-off.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd + 0.0005 / SECONDS_PER_DAY);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(1999, 12, 31, 18, 30, 0.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (1999, 12, 31));
        assert_eq!((back.hour, back.minute), (18, 30));
        assert!(back.second < 1e-3, "second = {}", back.second);
    }

    #[test]
    fn display_iso() {
        let t = UtcTime::new(2024, 1, 15, 0, 5, 9.7);
        assert_eq!(t.to_string(), "2024-01-15T00:05:09Z");
    }
}
