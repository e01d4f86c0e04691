//! Birth data: the validated [`BirthInput`], the raw [`BirthForm`] it is
//! parsed from, and the place-resolution boundary.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use jataka_time::civil_to_jd;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Offset of Indian Standard Time from UTC, in hours.
pub const IST_OFFSET_HOURS: f64 = 5.5;

/// Birth moment and place, already validated.
///
/// Date and time are local civil values; `utc_offset_hours` converts them
/// to UTC. Latitude is north-positive, longitude east-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub place: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0..=23
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl BirthInput {
    /// Julian Day (UT) of the birth moment.
    pub fn julian_day(&self) -> f64 {
        civil_to_jd(
            self.year,
            self.month,
            self.day,
            f64::from(self.hour) - self.utc_offset_hours,
            f64::from(self.minute),
        )
    }

    /// Julian Day shifted to local civil time. Only meaningful for calendar
    /// lookups such as the weekday.
    pub fn local_julian_day(&self) -> f64 {
        self.julian_day() + self.utc_offset_hours / 24.0
    }

    /// Replace place name and coordinates with a resolved candidate.
    pub fn at_place(mut self, candidate: &PlaceCandidate) -> Self {
        self.place = candidate.display_name.clone();
        self.latitude = candidate.latitude;
        self.longitude = candidate.longitude;
        self
    }
}

/// One match returned by a [`PlaceResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceCandidate {
    /// Build from the string coordinates a geocoding service returns.
    pub fn parse(display_name: &str, lat: &str, lon: &str) -> Result<Self, EngineError> {
        Ok(Self {
            display_name: display_name.to_string(),
            latitude: parse_coordinate(lat, 90.0, "latitude")?,
            longitude: parse_coordinate(lon, 180.0, "longitude")?,
        })
    }
}

/// Free-text place lookup.
///
/// The engine ships no implementation; callers plug in a geocoder and pass
/// the chosen candidate to [`BirthInput::at_place`].
pub trait PlaceResolver {
    fn resolve(&self, query: &str) -> Result<Vec<PlaceCandidate>, EngineError>;
}

/// Half of the day for a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Self::Am),
            "PM" => Ok(Self::Pm),
            other => Err(EngineError::InvalidTime(format!(
                "expected AM or PM, got {other:?}"
            ))),
        }
    }

    /// Convert a 12-hour clock hour (1..=12) to 0..=23.
    pub const fn to_24h(self, hour12: u32) -> u32 {
        match (self, hour12) {
            (Self::Am, 12) => 0,
            (Self::Pm, 12) => 12,
            (Self::Am, h) => h,
            (Self::Pm, h) => h + 12,
        }
    }
}

/// Birth details as entered in a form, all strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthForm {
    pub name: String,
    /// `DD-MM-YYYY`
    pub dob: String,
    /// `HH:MM`, 12-hour when `ampm` is set, 24-hour otherwise.
    pub tob: String,
    pub ampm: Option<String>,
    pub place: String,
    pub latitude: String,
    pub longitude: String,
    pub utc_offset_hours: f64,
}

impl TryFrom<&BirthForm> for BirthInput {
    type Error = EngineError;

    fn try_from(form: &BirthForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        if name.chars().count() < 2 {
            return Err(EngineError::MissingField("name"));
        }
        if form.place.trim().is_empty() {
            return Err(EngineError::MissingField("place"));
        }

        let date = NaiveDate::parse_from_str(form.dob.trim(), "%d-%m-%Y")
            .map_err(|e| EngineError::InvalidDate(format!("{:?}: {e}", form.dob)))?;
        let time = NaiveTime::parse_from_str(form.tob.trim(), "%H:%M")
            .map_err(|e| EngineError::InvalidTime(format!("{:?}: {e}", form.tob)))?;

        let hour = match form.ampm.as_deref() {
            Some(ampm) => {
                let meridiem = Meridiem::parse(ampm)?;
                if !(1..=12).contains(&time.hour()) {
                    return Err(EngineError::InvalidTime(format!(
                        "{:?} is not a 12-hour clock time",
                        form.tob
                    )));
                }
                meridiem.to_24h(time.hour())
            }
            None => time.hour(),
        };

        let offset = form.utc_offset_hours;
        if !offset.is_finite() || offset.abs() > 14.0 {
            return Err(EngineError::InvalidTime(format!(
                "UTC offset {offset} outside -14..=14 hours"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            place: form.place.trim().to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour,
            minute: time.minute(),
            utc_offset_hours: offset,
            latitude: parse_coordinate(&form.latitude, 90.0, "latitude")?,
            longitude: parse_coordinate(&form.longitude, 180.0, "longitude")?,
        })
    }
}

impl TryFrom<BirthForm> for BirthInput {
    type Error = EngineError;

    fn try_from(form: BirthForm) -> Result<Self, Self::Error> {
        Self::try_from(&form)
    }
}

fn parse_coordinate(s: &str, limit: f64, what: &str) -> Result<f64, EngineError> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|e| EngineError::InvalidCoordinate(format!("{what} {s:?}: {e}")))?;
    if !v.is_finite() || v.abs() > limit {
        return Err(EngineError::InvalidCoordinate(format!(
            "{what} {v} outside -{limit}..={limit}"
        )));
    }
    Ok(v)
}
