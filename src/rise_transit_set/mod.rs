//! # Rise, transit and set times
//!
//! The engine of the library (AA ch. 15): from daily equatorial coordinates
//! and an observer location, compute the instants at which a body crosses a
//! reference altitude (rise and set) and the local meridian (transit).
//!
//! Two entry points are provided:
//!
//! - [`rise_transit_set_times`] — a single estimation pass from one day's
//!   coordinates; accurate to a few minutes.
//! - [`accurate_rise_transit_set_times`] — three consecutive daily samples
//!   and a fixed number of refinement iterations; accurate below the minute.
//!
//! Circumpolar objects (never crossing the reference altitude) are a valid
//! outcome, reported through [`Transit::is_circumpolar`] with the rise and
//! set events left empty — never an error.

mod accurate;
mod delta_m_times;
mod m_times;
mod standard;

pub use accurate::accurate_rise_transit_set_times;
pub use delta_m_times::{delta_m_times, DeltaMTimes};
pub use m_times::{m_times, MTimes};
pub use standard::rise_transit_set_times;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour, JulianDay, STANDARD_ALTITUDE_STARS};
use crate::juliandays::jd_at_utc;

/// A rise or set crossing. Both fields are `None` for circumpolar objects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossingEvent {
    /// UTC clock time of the event on the day of interest, decimal hours.
    pub utc: Option<Hour>,
    /// Absolute Julian Day of the event.
    pub julian_day: Option<JulianDay>,
}

/// The meridian crossing, always defined even for circumpolar objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transit {
    /// UTC clock time of the transit, decimal hours.
    pub utc: Hour,
    /// Absolute Julian Day of the transit.
    pub julian_day: JulianDay,
    /// Altitude of the body at transit, degrees.
    pub altitude: Degree,
    /// The reference altitude the rise/set events refer to.
    pub ref_altitude: Degree,
    /// Transit altitude above the standard stellar horizon altitude.
    pub is_above_horizon: bool,
    /// Transit altitude above the caller-specified reference altitude.
    pub is_above_altitude: bool,
    /// The body never crosses the reference altitude on this day.
    pub is_circumpolar: bool,
    /// Transit day fraction, kept for diagnostic purposes.
    pub m0: f64,
    /// Cosine of the semi-diurnal hour angle, kept for diagnostic purposes.
    pub cos_h0: f64,
}

/// Rise, transit and set of a body on a given day, for a given observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseTransitSet {
    pub rise: CrossingEvent,
    pub transit: Transit,
    pub set: CrossingEvent,
}

/// Assemble the result structure from the (possibly refined) day fractions,
/// and apply the day-boundary correction: the rise must precede and the set
/// must follow the transit of the same observational night, even when the
/// modulo-1 day fractions wrapped to an adjacent calendar day.
fn assemble(jd: JulianDay, mt: &MTimes, ref_altitude: Degree) -> RiseTransitSet {
    let transit_utc = mt.m0 * 24.0;
    let transit_jd = jd_at_utc(jd, transit_utc);

    let transit = Transit {
        utc: transit_utc,
        julian_day: transit_jd,
        altitude: mt.altitude,
        ref_altitude,
        is_above_horizon: mt.altitude > STANDARD_ALTITUDE_STARS,
        is_above_altitude: mt.altitude > ref_altitude,
        is_circumpolar: mt.is_circumpolar,
        m0: mt.m0,
        cos_h0: mt.cos_h0,
    };

    let mut rise = CrossingEvent::default();
    let mut set = CrossingEvent::default();

    if let (Some(m1), Some(m2)) = (mt.m1, mt.m2) {
        rise.utc = Some(m1 * 24.0);
        set.utc = Some(m2 * 24.0);

        let mut rise_jd = jd_at_utc(jd, m1 * 24.0);
        let mut set_jd = jd_at_utc(jd, m2 * 24.0);
        if rise_jd > transit_jd {
            rise_jd -= 1.0;
        }
        if set_jd < transit_jd {
            set_jd += 1.0;
        }
        rise.julian_day = Some(rise_jd);
        set.julian_day = Some(set_jd);
    }

    RiseTransitSet { rise, transit, set }
}
