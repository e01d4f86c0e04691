//! Julian Day ↔ Gregorian calendar conversion.
//!
//! The forward conversion is the classic Meeus (ch. 7) algorithm with the
//! Gregorian leap correction `B = 2 − A + ⌊A/4⌋`, where January and February
//! are counted as months 13 and 14 of the previous year. The hour argument
//! may be fractional or negative, which is how callers fold a fixed UTC
//! offset into the conversion.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian civil date and UTC time of day to a Julian Day.
///
/// `hour_utc` may be fractional and may lie outside 0..24; the excess simply
/// spills into the adjacent day.
pub fn civil_to_jd(year: i32, month: u32, day: u32, hour_utc: f64, minute_utc: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + (hour_utc + minute_utc / 60.0) / 24.0
}

/// Convert a Julian Day to `(year, month, day_with_fraction)`.
///
/// Inverse of [`civil_to_jd`] for Gregorian dates (Meeus ch. 7).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Day of week for the civil day containing `jd` (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor().rem_euclid(7.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = civil_to_jd(2000, 1, 1, 12.0, 0.0);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year() {
        // 1999-12-31 0h and 2000-01-01 0h must be one day apart
        let dec = civil_to_jd(1999, 12, 31, 0.0, 0.0);
        let jan = civil_to_jd(2000, 1, 1, 0.0, 0.0);
        assert!((jan - dec - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_hour_spills_backward() {
        let a = civil_to_jd(2000, 1, 1, -5.5, 0.0);
        let b = civil_to_jd(1999, 12, 31, 18.5, 0.0);
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }

    #[test]
    fn meeus_sputnik() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = civil_to_jd(1957, 10, 4, 0.81 * 24.0, 0.0);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn calendar_roundtrip() {
        let jd = civil_to_jd(2024, 3, 20, 12.0, 30.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 3));
        assert!((d - (20.0 + 12.5 / 24.0)).abs() < 1e-8, "day = {d}");
    }

    #[test]
    fn calendar_leap_day() {
        let (y, m, d) = jd_to_calendar(civil_to_jd(2024, 2, 29, 0.0, 0.0));
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_epoch() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday
        assert_eq!(weekday_from_jd(civil_to_jd(2000, 1, 1, 0.0, 0.0)), 6);
        // 2024-03-17 was a Sunday
        assert_eq!(weekday_from_jd(civil_to_jd(2024, 3, 17, 23.9, 0.0)), 0);
    }
}
