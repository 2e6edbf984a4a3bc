//! # Julian Day arithmetic and sidereal time
//!
//! The universal time axis of the library is the raw `f64` Julian Day.
//! Calendar conversions go through [`hifitime::Epoch`]; everything else is
//! plain day arithmetic.

use hifitime::Epoch;

use crate::constants::{
    Degree, Hour, JulianCentury, JulianDay, JulianMillennium, DAYS_PER_JULIAN_CENTURY, DEG2H,
    DEG2RAD, J2000, MJD_START,
};
use crate::earth_orientation::{nutation_in_longitude, true_obliquity};
use crate::errors::ZenithError;
use crate::numeric::{fmod24, fmod360};

/// The Julian Day of a calendar date and UTC clock time.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`: Gregorian calendar date
/// * `hour`, `minute`, `second`: UTC clock time
///
/// Return
/// ------
/// * The Julian Day, or [`ZenithError::InvalidDate`] for an impossible date.
pub fn julian_day(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<JulianDay, ZenithError> {
    let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)?;
    Ok(epoch.to_jde_utc_days())
}

/// The Julian Day of midnight (0h UT) on the same calendar day as `jd`.
pub fn julian_day_midnight(jd: JulianDay) -> JulianDay {
    (jd - 0.5).floor() + 0.5
}

/// The Modified Julian Day.
pub fn modified_julian_day(jd: JulianDay) -> f64 {
    jd - MJD_START
}

/// Julian centuries elapsed since J2000.0 (AA Eq. 12.1).
pub fn julian_century(jd: JulianDay) -> JulianCentury {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Julian millennia elapsed since J2000.0.
pub fn julian_millennium(jd: JulianDay) -> JulianMillennium {
    (jd - J2000) / 365_250.0
}

/// The local mean sidereal time at a given longitude, in hours.
///
/// Implements the Greenwich mean sidereal time polynomial of AA Eq. 12.4,
/// then adds the (east-positive) longitude and folds into `[0, 24)`.
///
/// Arguments
/// ---------
/// * `jd`: the Julian Day (any instant, not just 0h UT)
/// * `longitude`: the observer's longitude in degrees, east-positive.
///   Pass `0` for the Greenwich sidereal time.
pub fn local_sidereal_time(jd: JulianDay, longitude: Degree) -> Hour {
    let t = julian_century(jd);

    // Greenwich sidereal time in degrees, Equ. 12.4 of AA, p. 88
    let gmst = 280.460_618_37
        + 360.985_647_366_29 * (jd - J2000)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;

    fmod24((fmod360(gmst) + longitude) * DEG2H)
}

/// The local apparent sidereal time at a given longitude, in hours.
///
/// Mean sidereal time corrected by the equation of the equinoxes,
/// `Δψ cos ε` (AA p. 88). `Δψ` is in arcseconds; dividing by 15 converts
/// to seconds of time.
pub fn apparent_local_sidereal_time(jd: JulianDay, longitude: Degree) -> Hour {
    let dpsi = nutation_in_longitude(jd);
    let eps = true_obliquity(jd) * DEG2RAD;
    let correction_seconds = dpsi * eps.cos() / 15.0;
    fmod24(local_sidereal_time(jd, longitude) + correction_seconds / 3600.0)
}

/// The absolute Julian Day of the UTC clock time `utc` on the calendar day
/// of `jd`.
///
/// `utc` is a fraction-of-day times 24 and is not folded: values outside
/// `[0, 24)` land on the adjacent calendar day, which is exactly what the
/// rise/transit/set orchestrator needs before its day-boundary correction.
pub fn jd_at_utc(jd: JulianDay, utc: Hour) -> JulianDay {
    julian_day_midnight(jd) + utc / 24.0
}
