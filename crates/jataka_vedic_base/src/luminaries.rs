//! Truncated-series longitudes of the Sun and Moon.
//!
//! Both models return tropical (equinox of date) ecliptic longitude in
//! degrees [0, 360). They are short series from Meeus, *Astronomical
//! Algorithms* (2nd ed.), chapters 25 and 47:
//!
//! - Sun: geometric mean longitude plus the two leading equation-of-centre
//!   terms. Error is roughly 0.01 deg.
//! - Moon: mean longitude plus the six largest periodic terms in longitude.
//!   Error is a few tenths of a degree; enough for rashi and nakshatra, not
//!   for arc-second work.

use jataka_time::jd_to_centuries;

use crate::util::normalize_360;

/// Sun's tropical ecliptic longitude in degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = 280.46646 + 36000.76983 * t;
    let m = (357.52911 + 35999.05029 * t).to_radians();
    let c = 1.914602 * m.sin() + 0.019993 * (2.0 * m).sin();
    normalize_360(l0 + c)
}

/// Moon's tropical ecliptic longitude in degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let lp = 218.3164477 + 481267.88123421 * t;
    // Mean elongation, solar anomaly, lunar anomaly, argument of latitude
    let d = (297.8501921 + 445267.1114034 * t).to_radians();
    let m = (357.5291092 + 35999.0502909 * t).to_radians();
    let mp = (134.9633964 + 477198.8675055 * t).to_radians();
    let f = (93.2720950 + 483202.0175233 * t).to_radians();
    let e = 1.0 - 0.002516 * t;

    let sum = 6.288774 * mp.sin() + 1.274027 * (2.0 * d - mp).sin() + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * mp).sin()
        - 0.185116 * e * m.sin()
        - 0.114332 * (2.0 * f).sin();

    normalize_360(lp + sum)
}
