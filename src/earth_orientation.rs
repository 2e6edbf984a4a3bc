//! # Earth orientation: obliquity and nutation
//!
//! Mean and true obliquity of the ecliptic, and the IAU 1980 nutation
//! angles (Δψ, Δε) evaluated from the dominant periodic terms of the
//! series (AA ch. 22).
//!
//! The nutation angles feed the equation of the equinoxes (apparent
//! sidereal time) and the apparent solar position.

use crate::constants::{ArcSecond, Degree, JulianDay};
use crate::juliandays::julian_century;
use crate::numeric::fmod360;

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// The mean obliquity ε₀ is the angle between the Earth's equator and the
/// ecliptic plane, uncorrected for nutation. Cubic polynomial in Julian
/// centuries since J2000 (AA Eq. 22.2), evaluated with Horner's method.
///
/// Arguments
/// ---------
/// * `jd`: the Julian Day (TT scale).
///
/// Return
/// ------
/// * Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(jd: JulianDay) -> Degree {
    // Obliquity coefficients, arcseconds
    let ob0 = (23.0 * 3600.0 + 26.0 * 60.0) + 21.448;
    let ob1 = -46.8150;
    let ob2 = -0.00059;
    let ob3 = 0.001813;

    let t = julian_century(jd);

    (((ob3 * t + ob2) * t + ob1) * t + ob0) / 3600.0
}

/// True obliquity of the ecliptic: mean obliquity plus the nutation in
/// obliquity.
pub fn true_obliquity(jd: JulianDay) -> Degree {
    mean_obliquity(jd) + nutation_in_obliquity(jd) / 3600.0
}

/// Nutation in longitude Δψ, in arcseconds.
pub fn nutation_in_longitude(jd: JulianDay) -> ArcSecond {
    nutation(jd).0
}

/// Nutation in obliquity Δε, in arcseconds.
pub fn nutation_in_obliquity(jd: JulianDay) -> ArcSecond {
    nutation(jd).1
}

/// One periodic term of the IAU 1980 nutation series.
///
/// The five small integers multiply the fundamental arguments D, M, M′, F
/// and Ω; the coefficients are in units of 0.0001 arcsecond, with their
/// secular variation per Julian century.
struct NutationTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    sin_coeff: f64,
    sin_t: f64,
    cos_coeff: f64,
    cos_t: f64,
}

macro_rules! nut {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $om:expr, $s:expr, $st:expr, $c:expr, $ct:expr) => {
        NutationTerm {
            d: $d,
            m: $m,
            mp: $mp,
            f: $f,
            om: $om,
            sin_coeff: $s,
            sin_t: $st,
            cos_coeff: $c,
            cos_t: $ct,
        }
    };
}

/// Dominant terms of the IAU 1980 nutation series (AA Table 22.A).
/// Terms below 0.0006″ are dropped; the truncation error stays under
/// 0.01″ in both angles.
#[rustfmt::skip]
const NUTATION_TERMS: [NutationTerm; 41] = [
    nut!( 0,  0,  0,  0,  1, -171996.0, -174.2, 92025.0,  8.9),
    nut!(-2,  0,  0,  2,  2,  -13187.0,   -1.6,  5736.0, -3.1),
    nut!( 0,  0,  0,  2,  2,   -2274.0,   -0.2,   977.0, -0.5),
    nut!( 0,  0,  0,  0,  2,    2062.0,    0.2,  -895.0,  0.5),
    nut!( 0,  1,  0,  0,  0,    1426.0,   -3.4,    54.0, -0.1),
    nut!( 0,  0,  1,  0,  0,     712.0,    0.1,    -7.0,  0.0),
    nut!(-2,  1,  0,  2,  2,    -517.0,    1.2,   224.0, -0.6),
    nut!( 0,  0,  0,  2,  1,    -386.0,   -0.4,   200.0,  0.0),
    nut!( 0,  0,  1,  2,  2,    -301.0,    0.0,   129.0, -0.1),
    nut!(-2, -1,  0,  2,  2,     217.0,   -0.5,   -95.0,  0.3),
    nut!(-2,  0,  1,  0,  0,    -158.0,    0.0,     0.0,  0.0),
    nut!(-2,  0,  0,  2,  1,     129.0,    0.1,   -70.0,  0.0),
    nut!( 0,  0, -1,  2,  2,     123.0,    0.0,   -53.0,  0.0),
    nut!( 2,  0,  0,  0,  0,      63.0,    0.0,     0.0,  0.0),
    nut!( 0,  0,  1,  0,  1,      63.0,    0.1,   -33.0,  0.0),
    nut!( 2,  0, -1,  2,  2,     -59.0,    0.0,    26.0,  0.0),
    nut!( 0,  0, -1,  0,  1,     -58.0,   -0.1,    32.0,  0.0),
    nut!( 0,  0,  1,  2,  1,     -51.0,    0.0,    27.0,  0.0),
    nut!(-2,  0,  2,  0,  0,      48.0,    0.0,     0.0,  0.0),
    nut!( 0,  0, -2,  2,  1,      46.0,    0.0,   -24.0,  0.0),
    nut!( 2,  0,  0,  2,  2,     -38.0,    0.0,    16.0,  0.0),
    nut!( 0,  0,  2,  2,  2,     -31.0,    0.0,    13.0,  0.0),
    nut!( 0,  0,  2,  0,  0,      29.0,    0.0,     0.0,  0.0),
    nut!(-2,  0,  1,  2,  2,      29.0,    0.0,   -12.0,  0.0),
    nut!( 0,  0,  0,  2,  0,      26.0,    0.0,     0.0,  0.0),
    nut!(-2,  0,  0,  2,  0,     -22.0,    0.0,     0.0,  0.0),
    nut!( 0,  0, -1,  2,  1,      21.0,    0.0,   -10.0,  0.0),
    nut!( 0,  2,  0,  0,  0,      17.0,   -0.1,     0.0,  0.0),
    nut!( 2,  0, -1,  0,  1,      16.0,    0.0,    -8.0,  0.0),
    nut!(-2,  2,  0,  2,  2,     -16.0,    0.1,     7.0,  0.0),
    nut!( 0,  1,  0,  0,  1,     -15.0,    0.0,     9.0,  0.0),
    nut!(-2,  0,  1,  0,  1,     -13.0,    0.0,     7.0,  0.0),
    nut!( 0, -1,  0,  0,  1,     -12.0,    0.0,     6.0,  0.0),
    nut!( 0,  0,  2, -2,  0,      11.0,    0.0,     0.0,  0.0),
    nut!( 2,  0, -1,  2,  1,     -10.0,    0.0,     5.0,  0.0),
    nut!( 2,  0,  1,  2,  2,      -8.0,    0.0,     3.0,  0.0),
    nut!( 0,  1,  0,  2,  2,       7.0,    0.0,    -3.0,  0.0),
    nut!(-2,  1,  1,  0,  0,      -7.0,    0.0,     0.0,  0.0),
    nut!( 0, -1,  0,  2,  2,      -7.0,    0.0,     3.0,  0.0),
    nut!( 2,  0,  0,  2,  1,      -7.0,    0.0,     3.0,  0.0),
    nut!( 2,  0,  1,  0,  0,       6.0,    0.0,     0.0,  0.0),
];

/// Evaluate (Δψ, Δε) in arcseconds at a given Julian Day.
///
/// The five fundamental arguments are third-order polynomials of the
/// Julian century T (AA p. 144), folded into `[0, 360)` before the series
/// sum.
fn nutation(jd: JulianDay) -> (ArcSecond, ArcSecond) {
    let t = julian_century(jd);

    // Mean elongation of the Moon from the Sun
    let d = fmod360(297.850_36 + 445_267.111_480 * t - 0.001_9142 * t * t
        + t * t * t / 189_474.0);
    // Mean anomaly of the Sun (Earth)
    let m = fmod360(357.527_72 + 35_999.050_340 * t - 0.000_1603 * t * t
        - t * t * t / 300_000.0);
    // Mean anomaly of the Moon
    let mp = fmod360(134.962_98 + 477_198.867_398 * t + 0.008_6972 * t * t
        + t * t * t / 56_250.0);
    // Argument of latitude of the Moon
    let f = fmod360(93.271_91 + 483_202.017_538 * t - 0.003_6825 * t * t
        + t * t * t / 327_270.0);
    // Longitude of the ascending node of the Moon's mean orbit
    let om = fmod360(125.044_52 - 1_934.136_261 * t + 0.002_0708 * t * t
        + t * t * t / 450_000.0);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for term in &NUTATION_TERMS {
        let arg = (term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * mp
            + term.f as f64 * f
            + term.om as f64 * om)
            .to_radians();
        dpsi += (term.sin_coeff + term.sin_t * t) * arg.sin();
        deps += (term.cos_coeff + term.cos_t * t) * arg.cos();
    }

    // Coefficients are tabulated in units of 0.0001 arcsecond
    (dpsi * 1e-4, deps * 1e-4)
}

#[cfg(test)]
mod earth_orientation_tests {
    use super::*;

    const JD_1987_APRIL_10: f64 = 2_446_895.5;

    #[test]
    fn test_mean_obliquity() {
        // AA Example 22.a: ε0 = 23°26'27.407"
        let eps0 = mean_obliquity(JD_1987_APRIL_10);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps0 - expected).abs() < 1e-6, "eps0 = {eps0}");
    }

    #[test]
    fn test_nutation_angles() {
        // AA Example 22.a: Δψ = -3.788", Δε = +9.443"
        let dpsi = nutation_in_longitude(JD_1987_APRIL_10);
        let deps = nutation_in_obliquity(JD_1987_APRIL_10);
        assert!((dpsi - -3.788).abs() < 0.05, "dpsi = {dpsi}");
        assert!((deps - 9.443).abs() < 0.05, "deps = {deps}");
    }

    #[test]
    fn test_true_obliquity() {
        // AA Example 22.a: ε = 23°26'36.850"
        let eps = true_obliquity(JD_1987_APRIL_10);
        let expected = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
        assert!((eps - expected).abs() < 5e-5, "eps = {eps}");
    }
}
