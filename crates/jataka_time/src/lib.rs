//! Civil calendar and sidereal time support for the horoscope engine.
//!
//! This crate provides:
//! - Gregorian civil date/time ↔ Julian Day conversions
//! - A `UtcTime` calendar type used for rendering period boundaries
//! - Greenwich/Local mean sidereal time in degrees
//!
//! Everything here is plain floating-point arithmetic with no I/O and no
//! failure paths over finite input.

pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, civil_to_jd, jd_to_calendar, jd_to_centuries,
    weekday_from_jd,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcTime;
