//! # Low-accuracy solar ephemeris
//!
//! Geometric and apparent position of the Sun from the short series of
//! AA ch. 25 (accuracy about 0.01°), plus rise/transit/set convenience
//! wrappers over the engine using the solar reference altitude.

use crate::constants::{
    Degree, JulianCentury, JulianDay, DEG2RAD, STANDARD_ALTITUDE_SUN,
};
use crate::coordinates::{
    ecliptic_to_equatorial, EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates,
};
use crate::earth_orientation::mean_obliquity;
use crate::juliandays::{julian_century, julian_day_midnight};
use crate::numeric::fmod360;
use crate::rise_transit_set::{
    accurate_rise_transit_set_times, rise_transit_set_times, RiseTransitSet,
};

/// Geometric mean longitude of the Sun, referred to the mean equinox of the
/// date (AA p. 163).
pub fn mean_longitude(t: JulianCentury) -> Degree {
    fmod360(280.466_46 + 36_000.769_83 * t + 0.000_3032 * t * t)
}

/// Mean anomaly of the Sun — equal to the mean anomaly of the Earth.
pub fn mean_anomaly(jd: JulianDay) -> Degree {
    let t = julian_century(jd);
    fmod360(357.529_11 + 35_999.050_29 * t - 0.000_1537 * t * t + t * t * t / 24_490_000.0)
}

/// Eccentricity of the Earth's orbit (AA Eq. 25.4).
pub fn eccentricity(t: JulianCentury) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// The Sun's equation of the center, in degrees (AA p. 164).
pub fn equation_of_center(t: JulianCentury, mean_anomaly: Degree) -> Degree {
    let m = mean_anomaly * DEG2RAD;
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// True geometric longitude of the Sun referred to the mean equinox of the
/// date — the quantity required for geocentric planetary positions.
pub fn geometric_ecliptic_longitude(jd: JulianDay) -> Degree {
    let t = julian_century(jd);
    let l0 = mean_longitude(t);
    let m = mean_anomaly(jd);
    let c = equation_of_center(t, m);
    fmod360(l0 + c)
}

/// Distance Earth–Sun in astronomical units (AA Eq. 25.5).
pub fn radius_vector(jd: JulianDay) -> f64 {
    let t = julian_century(jd);
    let e = eccentricity(t);
    let nu = (mean_anomaly(jd) + equation_of_center(t, mean_anomaly(jd))) * DEG2RAD;
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Longitude of the ascending node of the Moon's mean orbit, the argument
/// of the dominant nutation term (AA p. 164).
fn ascending_node(t: JulianCentury) -> Degree {
    125.04 - 1934.136 * t
}

/// Apparent longitude of the Sun: the geometric longitude corrected for
/// nutation and aberration (AA p. 164).
pub fn apparent_ecliptic_longitude(jd: JulianDay) -> Degree {
    let t = julian_century(jd);
    let omega = ascending_node(t) * DEG2RAD;
    geometric_ecliptic_longitude(jd) - 0.005_69 - 0.004_78 * omega.sin()
}

/// Apparent equatorial coordinates of the Sun.
///
/// The obliquity is corrected by the `0.00256 cos Ω` term so that the
/// right ascension comes out apparent (AA p. 165).
pub fn apparent_equatorial_coordinates(jd: JulianDay) -> EquatorialCoordinates {
    let t = julian_century(jd);
    let omega = ascending_node(t) * DEG2RAD;
    let epsilon = mean_obliquity(jd) + 0.002_56 * omega.cos();
    let ecl = EclipticCoordinates {
        longitude: apparent_ecliptic_longitude(jd),
        latitude: 0.0,
    };
    ecliptic_to_equatorial(&ecl, epsilon)
}

/// Rise, transit and set of the Sun on a given day, approximate path.
///
/// Uses the solar reference altitude (refraction plus semi-diameter) and
/// the Sun's apparent position at midnight of the day of interest.
pub fn rise_transit_set(jd: JulianDay, geo: &GeographicCoordinates) -> RiseTransitSet {
    let coords = apparent_equatorial_coordinates(julian_day_midnight(jd));
    rise_transit_set_times(jd, &coords, geo, STANDARD_ALTITUDE_SUN)
}

/// Rise, transit and set of the Sun, accurate path over three daily samples.
pub fn accurate_rise_transit_set(
    jd: JulianDay,
    geo: &GeographicCoordinates,
    iterations: usize,
) -> RiseTransitSet {
    let jd0 = julian_day_midnight(jd);
    let samples = [
        apparent_equatorial_coordinates(jd0 - 1.0),
        apparent_equatorial_coordinates(jd0),
        apparent_equatorial_coordinates(jd0 + 1.0),
    ];
    accurate_rise_transit_set_times(jd, &samples, geo, STANDARD_ALTITUDE_SUN, iterations)
}

#[cfg(test)]
mod sun_tests {
    use super::*;
    use crate::juliandays::julian_day;

    // AA Example 25.a: the Sun on 1992 October 13, 0h Dynamical Time
    const JD_1992_OCTOBER_13: f64 = 2_448_908.5;

    #[test]
    fn test_mean_longitude_and_anomaly() {
        let t = julian_century(JD_1992_OCTOBER_13);
        assert!((mean_longitude(t) - 201.807_20).abs() < 1e-4);
        assert!((mean_anomaly(JD_1992_OCTOBER_13) - 278.993_97).abs() < 1e-4);
    }

    #[test]
    fn test_geometric_longitude() {
        let lon = geometric_ecliptic_longitude(JD_1992_OCTOBER_13);
        assert!((lon - 199.909_88).abs() < 1e-4, "lon = {lon}");
    }

    #[test]
    fn test_apparent_longitude() {
        let lon = apparent_ecliptic_longitude(JD_1992_OCTOBER_13);
        assert!((lon - 199.908_95).abs() < 2e-4, "lon = {lon}");
    }

    #[test]
    fn test_radius_vector() {
        let r = radius_vector(JD_1992_OCTOBER_13);
        assert!((r - 0.997_66).abs() < 1e-4, "r = {r}");
    }

    #[test]
    fn test_apparent_equatorial_coordinates() {
        let equ = apparent_equatorial_coordinates(JD_1992_OCTOBER_13);
        assert!((equ.right_ascension - 198.380_83).abs() < 2e-3, "ra = {}", equ.right_ascension);
        assert!((equ.declination - -7.785_07).abs() < 2e-3, "dec = {}", equ.declination);
    }

    #[test]
    fn test_sun_rise_transit_set_plausibility() {
        // Greenwich meridian at the March 2024 equinox: transit close to
        // mean noon, day close to twelve hours
        let jd = julian_day(2024, 3, 20, 0, 0, 0).unwrap();
        let geo = GeographicCoordinates::new(0.0, 45.0);
        let rts = rise_transit_set(jd, &geo);
        assert!(!rts.transit.is_circumpolar);
        assert!(rts.transit.is_above_horizon);
        assert!((rts.transit.utc - 12.0).abs() < 0.5, "transit = {}", rts.transit.utc);
        let day_length = rts.set.julian_day.unwrap() - rts.rise.julian_day.unwrap();
        assert!((day_length * 24.0 - 12.0).abs() < 0.5, "length = {day_length}");
        assert!(rts.rise.julian_day.unwrap() < rts.transit.julian_day);
        assert!(rts.transit.julian_day < rts.set.julian_day.unwrap());
    }

    #[test]
    fn test_accurate_matches_approximate_within_minutes() {
        let jd = julian_day(2024, 3, 20, 0, 0, 0).unwrap();
        let geo = GeographicCoordinates::new(0.0, 45.0);
        let approx = rise_transit_set(jd, &geo);
        let precise = accurate_rise_transit_set(jd, &geo, 2);
        let diff = (approx.rise.utc.unwrap() - precise.rise.utc.unwrap()).abs();
        assert!(diff < 0.2, "rise differs by {diff} h");
    }
}
