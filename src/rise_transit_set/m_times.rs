//! Daily estimation of the transit, rise and set day fractions (AA p. 102).

use crate::constants::{Degree, JulianDay, DEG2RAD, H2DEG, RAD2DEG};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates};
use crate::juliandays::{julian_day_midnight, local_sidereal_time};
use crate::numeric::{altitude_from_hour_angle, fmod};

/// Day fractions of the three events, measured from 0h UT on the day of
/// interest.
///
/// `m1` and `m2` are `None` when the object is circumpolar. After
/// refinement the fractions may leave `[0, 1)`; the orchestrator's
/// day-boundary correction puts the absolute Julian Days back in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MTimes {
    /// Transit day fraction.
    pub m0: f64,
    /// Rise day fraction.
    pub m1: Option<f64>,
    /// Set day fraction.
    pub m2: Option<f64>,
    /// `|cos H0| > 1`: the body never crosses the reference altitude.
    pub is_circumpolar: bool,
    /// Altitude of the body at transit, degrees.
    pub altitude: Degree,
    /// Cosine of the semi-diurnal hour angle H0.
    pub cos_h0: f64,
}

/// Estimate the transit, rise and set day fractions of a body from one
/// day's equatorial coordinates (AA Eq. 15.1 and 15.2).
///
/// Arguments
/// ---------
/// * `jd`: the Julian Day of the day of interest
/// * `equ`: the body's equatorial coordinates at 0h Dynamical Time of that day
/// * `geo`: the observer's location (east-positive longitude)
/// * `alt`: the reference altitude of the body's center for rise and set,
///   e.g. [`STANDARD_ALTITUDE_STARS`](crate::constants::STANDARD_ALTITUDE_STARS)
///
/// Return
/// ------
/// * The [`MTimes`] estimate. Circumpolarity is reported through the flag,
///   never as an error; at the poles `cos H0` becomes infinite and the
///   object is likewise flagged circumpolar.
pub fn m_times(
    jd: JulianDay,
    equ: &EquatorialCoordinates,
    geo: &GeographicCoordinates,
    alt: Degree,
) -> MTimes {
    // 0h UT on day D; not the 0h Dynamical Time of the coordinates. AA p. 102.
    let jd0 = julian_day_midnight(jd);

    // Greenwich sidereal time in degrees
    let theta0 = local_sidereal_time(jd0, 0.0) * H2DEG;

    // The algorithms in AA use positive-west longitudes, so formula 15.2,
    // m0 = (alpha + L - Theta0) / 360, becomes a subtraction here.
    let m0 = fmod((equ.right_ascension - geo.longitude - theta0) / 360.0, 1.0);

    let sin_alt = (alt * DEG2RAD).sin();
    let (sin_phi, cos_phi) = (geo.latitude * DEG2RAD).sin_cos();
    let (sin_delta, cos_delta) = (equ.declination * DEG2RAD).sin_cos();

    // AA Eq. 15.1
    let cos_h0 = (sin_alt - sin_phi * sin_delta) / (cos_phi * cos_delta);
    let is_circumpolar = cos_h0.abs() > 1.0;

    // Altitude at the meridian crossing: hour angle zero, AA Eq. 13.6
    let altitude = altitude_from_hour_angle(geo.latitude * DEG2RAD, equ.declination * DEG2RAD, 0.0)
        * RAD2DEG;

    let (m1, m2) = if is_circumpolar {
        (None, None)
    } else {
        // semi-diurnal arc in day-fraction units
        let h0 = cos_h0.acos() * RAD2DEG / 360.0;
        (Some(fmod(m0 - h0, 1.0)), Some(fmod(m0 + h0, 1.0)))
    };

    MTimes {
        m0,
        m1,
        m2,
        is_circumpolar,
        altitude,
        cos_h0,
    }
}
