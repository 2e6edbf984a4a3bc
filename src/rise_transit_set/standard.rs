//! Approximate rise/transit/set: a single estimation pass, no refinement.

use super::{assemble, m_times, RiseTransitSet};
use crate::constants::{Degree, JulianDay};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates};

/// Compute the times of rise, transit and set of a body on a given day,
/// for a given observer, from a single day's coordinates.
///
/// Accuracy is of the order of a few minutes; use
/// [`accurate_rise_transit_set_times`](super::accurate_rise_transit_set_times)
/// when sub-minute accuracy is needed.
///
/// Arguments
/// ---------
/// * `jd`: the Julian Day of the day of interest
/// * `equ`: the apparent equatorial coordinates of the body at 0h Dynamical
///   Time of that day
/// * `geo`: the observer's location (east-positive longitude)
/// * `alt`: the reference altitude of the body's center for rise and set;
///   its value is not 0 — for stars and planets it accounts for refraction
///   ([`STANDARD_ALTITUDE_STARS`](crate::constants::STANDARD_ALTITUDE_STARS)),
///   for the Sun also for the semi-diameter
///   ([`STANDARD_ALTITUDE_SUN`](crate::constants::STANDARD_ALTITUDE_SUN))
///
/// Return
/// ------
/// * The [`RiseTransitSet`] for that day. For a circumpolar body the rise
///   and set events are empty and `transit.is_circumpolar` is set.
pub fn rise_transit_set_times(
    jd: JulianDay,
    equ: &EquatorialCoordinates,
    geo: &GeographicCoordinates,
    alt: Degree,
) -> RiseTransitSet {
    let mt = m_times(jd, equ, geo, alt);
    assemble(jd, &mt, alt)
}
