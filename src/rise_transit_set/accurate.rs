//! Accurate rise/transit/set: iterative refinement over three daily samples.

use super::{assemble, delta_m_times, m_times, MTimes, RiseTransitSet};
use crate::constants::{Degree, JulianDay, H2DEG};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates};
use crate::deltat::delta_t;
use crate::juliandays::{julian_day_midnight, local_sidereal_time};

/// Compute the times of rise, transit and set of a body on a given day
/// with sub-minute accuracy.
///
/// The coordinates are assumed to be mean equatorial coordinates for the
/// epoch and equinox J2000.0; proper motion is neglected (AA p. 135).
///
/// Arguments
/// ---------
/// * `jd`: the Julian Day of the day of interest
/// * `equ`: the body's apparent equatorial coordinates at 0h Dynamical Time
///   of three consecutive days, centered on the day of interest
/// * `geo`: the observer's location (east-positive longitude)
/// * `alt`: the reference altitude of the body's center for rise and set
/// * `iterations`: number of refinement passes; `1` is already sufficient
///   for sub-minute accuracy, `0` degenerates to the initial estimate
///
/// Return
/// ------
/// * The refined [`RiseTransitSet`]. For a circumpolar body the refinement
///   is skipped entirely: there is no crossing to refine.
pub fn accurate_rise_transit_set_times(
    jd: JulianDay,
    equ: &[EquatorialCoordinates; 3],
    geo: &GeographicCoordinates,
    alt: Degree,
    iterations: usize,
) -> RiseTransitSet {
    // Greenwich sidereal time at 0h UT on day D, in degrees. AA p. 102.
    let jd0 = julian_day_midnight(jd);
    let theta0 = local_sidereal_time(jd0, 0.0) * H2DEG;

    let initial = m_times(jd, &equ[1], geo, alt);

    let refined = match (initial.m1, initial.m2) {
        (Some(m1), Some(m2)) => {
            let dt = delta_t(jd);
            // Each pass corrects the three events independently; the fold
            // threads a fresh value, nothing is mutated across iterations.
            let (m0, m1, m2, altitude) = (0..iterations).fold(
                (initial.m0, m1, m2, initial.altitude),
                |(m0, m1, m2, _), _| {
                    let d0 = delta_m_times(m0, true, theta0, dt, equ, geo, alt);
                    let d1 = delta_m_times(m1, false, theta0, dt, equ, geo, alt);
                    let d2 = delta_m_times(m2, false, theta0, dt, equ, geo, alt);
                    (
                        m0 + d0.delta_m,
                        m1 + d1.delta_m,
                        m2 + d2.delta_m,
                        d0.local_altitude,
                    )
                },
            );
            MTimes {
                m0,
                m1: Some(m1),
                m2: Some(m2),
                altitude,
                ..initial
            }
        }
        _ => initial,
    };

    assemble(jd, &refined, alt)
}
