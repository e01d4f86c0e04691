//! Approximate geocentric longitudes of the five tara grahas.
//!
//! Mangal, Buddh, Guru, Shukra and Shani are placed with the Keplerian
//! elements of E. M. Standish, "Keplerian Elements for Approximate Positions
//! of the Major Planets" (JPL SSD, Table 1, valid 1800-2050 AD). Elements and
//! their linear rates are referred to the mean ecliptic and equinox of
//! J2000.0.
//!
//! Procedure per planet:
//! 1. Propagate the six elements linearly to `T` centuries past J2000.0.
//! 2. Solve Kepler's equation for the eccentric anomaly (Newton iteration).
//! 3. Rotate the orbital-plane position into heliocentric J2000 ecliptic
//!    coordinates.
//! 4. Subtract the Earth-Moon barycentre to get a geocentric vector.
//! 5. Take its longitude and add the general precession in longitude to
//!    move from the J2000 equinox to the mean equinox of date.
//!
//! Inside the validity window the result is good to roughly an arc-minute
//! for the inner planets and a few arc-minutes for Guru and Shani. Outside
//! it the elements drift smoothly; the output stays finite and continuous.

use std::f64::consts::TAU;

use jataka_frames::general_precession_longitude_deg;
use jataka_time::jd_to_centuries;

use crate::graha::Graha;
use crate::util::normalize_360;

/// Maximum Newton iterations for Kepler's equation.
const KEPLER_MAX_ITER: usize = 30;

/// Convergence threshold on the eccentric anomaly, radians.
const KEPLER_TOL_RAD: f64 = 1e-12;

/// Row indices into [`ELEMENTS`].
const ROW_MERCURY: usize = 0;
const ROW_VENUS: usize = 1;
const ROW_EM_BARY: usize = 2;
const ROW_MARS: usize = 3;
const ROW_JUPITER: usize = 4;
const ROW_SATURN: usize = 5;

/// Standish Table 1: J2000 value then rate per Julian century for
/// a (au), e, I (deg), L (deg), long. perihelion (deg), long. node (deg).
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 6] = [
    //  a            e            I             L               varpi          Omega
    //  a_dot        e_dot        I_dot         L_dot           varpi_dot      Omega_dot
    [ 0.38709927,  0.20563593,  7.00497902,  252.25032350,   77.45779628,   48.33076593,
      0.00000037,  0.00001906, -0.00594749,  149472.67411175, 0.16047689,  -0.12534081],
    [ 0.72333566,  0.00677672,  3.39467605,  181.97909950,  131.60246718,   76.67984255,
      0.00000390, -0.00004107, -0.00078890,  58517.81538729,  0.00268329,  -0.27769418],
    [ 1.00000261,  0.01671123, -0.00001531,  100.46457166,  102.93768193,    0.0,
      0.00000562, -0.00004392, -0.01294668,  35999.37244981,  0.32327364,   0.0       ],
    [ 1.52371034,  0.09339410,  1.84969142,   -4.55343205,  -23.94362959,   49.55953891,
      0.00001847,  0.00007882, -0.00813131,  19140.30268499,  0.44441088,  -0.29257343],
    [ 5.20288700,  0.04838624,  1.30439695,   34.39644051,   14.72847983,  100.47390909,
     -0.00011607, -0.00013253, -0.00183714,  3034.74612775,   0.21252668,   0.20469106],
    [ 9.53667594,  0.05386179,  2.48599187,   49.95424423,   92.59887831,  113.66242448,
     -0.00125060, -0.00050991,  0.00193609,  1222.49362201,  -0.54179478,  -0.28867794],
];

fn element_row(graha: Graha) -> Option<usize> {
    match graha {
        Graha::Buddh => Some(ROW_MERCURY),
        Graha::Shukra => Some(ROW_VENUS),
        Graha::Mangal => Some(ROW_MARS),
        Graha::Guru => Some(ROW_JUPITER),
        Graha::Shani => Some(ROW_SATURN),
        Graha::Surya | Graha::Chandra | Graha::Rahu | Graha::Ketu => None,
    }
}

/// Solve `E - e·sin E = M` for E (radians) by Newton iteration.
///
/// Always returns after at most [`KEPLER_MAX_ITER`] steps.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOL_RAD {
            break;
        }
    }
    ecc
}

/// Heliocentric J2000 ecliptic position (au) of one element row.
fn heliocentric_position(row: usize, t: f64) -> [f64; 3] {
    let el = &ELEMENTS[row];
    let a = el[0] + el[6] * t;
    let e = el[1] + el[7] * t;
    let incl = (el[2] + el[8] * t).to_radians();
    let l = el[3] + el[9] * t;
    let varpi = el[4] + el[10] * t;
    let node = (el[5] + el[11] * t).to_radians();

    let omega = varpi.to_radians() - node;
    // Mean anomaly folded into [-π, π)
    let m = (l - varpi).to_radians().rem_euclid(TAU);
    let m = if m >= std::f64::consts::PI { m - TAU } else { m };

    let ecc = solve_kepler(m, e);
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
        (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric tropical longitude (mean equinox of date) of a tara graha.
///
/// Returns `None` for Surya, Chandra, Rahu and Ketu, which have their own
/// models.
pub fn tara_longitude_deg(graha: Graha, jd: f64) -> Option<f64> {
    let row = element_row(graha)?;
    let t = jd_to_centuries(jd);
    let p = heliocentric_position(row, t);
    let earth = heliocentric_position(ROW_EM_BARY, t);
    let dx = p[0] - earth[0];
    let dy = p[1] - earth[1];
    let lon_j2000 = dy.atan2(dx).to_degrees();
    Some(normalize_360(lon_j2000 + general_precession_longitude_deg(t)))
}
