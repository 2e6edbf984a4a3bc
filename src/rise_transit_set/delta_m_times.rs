//! Refinement correction for one event's day fraction (AA p. 103).

use crate::constants::{
    Degree, Second, DEG2RAD, EARTH_SIDEREAL_ROTATION_RATE, RAD2DEG, SECONDS_PER_DAY,
};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates};
use crate::numeric::{altitude_from_hour_angle, fmod180, fmod360, interpolate};

/// Correction to a single event's day fraction, with the intermediate
/// quantities the orchestrator reads back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaMTimes {
    /// Correction to add to the running day fraction.
    pub delta_m: f64,
    /// Hour angle at the estimated instant, degrees.
    pub hour_angle: Degree,
    /// Altitude of the body at the estimated instant, degrees.
    pub local_altitude: Degree,
}

/// Compute the correction `Δm` for one of the three events.
///
/// The sidereal time is advanced to the estimated instant, the coordinates
/// are interpolated at the dynamical-time offset `n = m + ΔT/86400`, and
/// the correction drives the hour angle to zero (transit) or the altitude
/// to the reference altitude (rise and set).
///
/// Arguments
/// ---------
/// * `m`: the event's current day-fraction estimate
/// * `is_transit`: selects the hour-angle correction instead of the
///   altitude correction
/// * `theta0`: Greenwich sidereal time at 0h UT of the day, in degrees
/// * `delta_t`: ΔT = TT − UT in seconds at the day of interest
/// * `equ`: equatorial coordinates at 0h Dynamical Time of the day before,
///   the day of, and the day after the day of interest
/// * `geo`: the observer's location
/// * `alt`: the reference altitude for rise and set
pub fn delta_m_times(
    m: f64,
    is_transit: bool,
    theta0: Degree,
    delta_t: Second,
    equ: &[EquatorialCoordinates; 3],
    geo: &GeographicCoordinates,
    alt: Degree,
) -> DeltaMTimes {
    // sidereal time at the estimated instant
    let theta = fmod360(theta0 + EARTH_SIDEREAL_ROTATION_RATE * m);

    // interpolation parameter on the dynamical-time axis
    let n = m + delta_t / SECONDS_PER_DAY;

    let alpha = interpolate(
        equ[0].right_ascension,
        equ[1].right_ascension,
        equ[2].right_ascension,
        n,
    );
    let delta = interpolate(equ[0].declination, equ[1].declination, equ[2].declination, n);

    let hour_angle = fmod180(theta + geo.longitude - alpha);

    let phi = geo.latitude * DEG2RAD;
    let local_altitude =
        altitude_from_hour_angle(phi, delta * DEG2RAD, hour_angle * DEG2RAD) * RAD2DEG;

    let delta_m = if is_transit {
        -hour_angle / 360.0
    } else {
        // Newton-like step: the denominator is the derivative of the
        // altitude with respect to the day fraction, AA p. 103
        (local_altitude - alt)
            / (360.0 * (delta * DEG2RAD).cos() * phi.cos() * (hour_angle * DEG2RAD).sin())
    };

    DeltaMTimes {
        delta_m,
        hour_angle,
        local_altitude,
    }
}
