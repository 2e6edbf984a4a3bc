//! # Coordinate systems and transformations
//!
//! The data-model structs shared by every module (equatorial, geographic,
//! ecliptic, horizontal coordinates) and the transformations between them.
//!
//! The ecliptic ↔ equatorial conversion goes through a cartesian rotation
//! about the vernal-equinox axis; the horizontal conversion uses the
//! spherical-triangle formulas directly (AA ch. 13).

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianDay, Meter, DEG2RAD, H2DEG, RAD2DEG};
use crate::juliandays::local_sidereal_time;
use crate::numeric::{altitude_from_hour_angle, fmod180, fmod360, fmod90};

/// Position on the celestial sphere relative to the Earth's equator and
/// equinox. Both angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    /// Right ascension, in degrees (not hours).
    pub right_ascension: Degree,
    pub declination: Degree,
    /// Epoch of the equinox the coordinates are referred to, if not J2000.0.
    pub epoch: Option<JulianDay>,
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Degree, declination: Degree) -> Self {
        Self {
            right_ascension,
            declination,
            epoch: None,
        }
    }
}

/// Observer location on the Earth's surface. Longitude is **east-positive**.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinates {
    pub longitude: Degree,
    pub latitude: Degree,
    pub height: Option<Meter>,
}

impl GeographicCoordinates {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        Self {
            longitude,
            latitude,
            height: None,
        }
    }
}

/// Position relative to the ecliptic plane and the equinox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    pub longitude: Degree,
    pub latitude: Degree,
}

/// Local position: azimuth measured from **South**, turning westward
/// (AA convention), altitude above the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    pub azimuth: Degree,
    pub altitude: Degree,
}

/// Active rotation by `angle` radians around the x-axis (vernal equinox).
fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Transform ecliptic coordinates into equatorial coordinates
/// (AA Eq. 13.3/13.4, expressed as a frame rotation).
///
/// Arguments
/// ---------
/// * `ecl`: ecliptic longitude and latitude, degrees
/// * `obliquity`: the obliquity of the ecliptic ε to use — mean for mean
///   positions, true for apparent positions.
pub fn ecliptic_to_equatorial(ecl: &EclipticCoordinates, obliquity: Degree) -> EquatorialCoordinates {
    let lambda = ecl.longitude * DEG2RAD;
    let beta = ecl.latitude * DEG2RAD;
    let v = Vector3::new(
        beta.cos() * lambda.cos(),
        beta.cos() * lambda.sin(),
        beta.sin(),
    );
    let eq = rotation_x(obliquity * DEG2RAD) * v;
    EquatorialCoordinates {
        right_ascension: fmod360(eq.y.atan2(eq.x) * RAD2DEG),
        declination: eq.z.asin() * RAD2DEG,
        epoch: None,
    }
}

/// Transform equatorial coordinates into ecliptic coordinates
/// (inverse rotation of [`ecliptic_to_equatorial`]).
pub fn equatorial_to_ecliptic(equ: &EquatorialCoordinates, obliquity: Degree) -> EclipticCoordinates {
    let alpha = equ.right_ascension * DEG2RAD;
    let delta = equ.declination * DEG2RAD;
    let v = Vector3::new(
        delta.cos() * alpha.cos(),
        delta.cos() * alpha.sin(),
        delta.sin(),
    );
    let ecl = rotation_x(obliquity * DEG2RAD).transpose() * v;
    EclipticCoordinates {
        longitude: fmod360(ecl.y.atan2(ecl.x) * RAD2DEG),
        latitude: ecl.z.asin() * RAD2DEG,
    }
}

/// Local hour angle of a body, in degrees in `(-180, 180]`.
///
/// Positive west of the meridian, negative east of it.
pub fn hour_angle(jd: JulianDay, right_ascension: Degree, longitude: Degree) -> Degree {
    let lmst = local_sidereal_time(jd, longitude) * H2DEG;
    fmod180(lmst - right_ascension)
}

/// Transform equatorial coordinates into local horizontal coordinates
/// (AA Eq. 13.5/13.6).
pub fn equatorial_to_horizontal(
    jd: JulianDay,
    equ: &EquatorialCoordinates,
    geo: &GeographicCoordinates,
) -> HorizontalCoordinates {
    let h = hour_angle(jd, equ.right_ascension, geo.longitude) * DEG2RAD;
    let phi = geo.latitude * DEG2RAD;
    let delta = equ.declination * DEG2RAD;

    let altitude = altitude_from_hour_angle(phi, delta, h) * RAD2DEG;
    let azimuth = h.sin().atan2(h.cos() * phi.sin() - delta.tan() * phi.cos()) * RAD2DEG;

    HorizontalCoordinates {
        azimuth: fmod360(azimuth),
        altitude: fmod90(altitude),
    }
}

/// Altitude of a body as it crosses the local meridian (hour angle zero).
pub fn transit_altitude(equ: &EquatorialCoordinates, geo: &GeographicCoordinates) -> Degree {
    let phi = geo.latitude * DEG2RAD;
    let delta = equ.declination * DEG2RAD;
    altitude_from_hour_angle(phi, delta, 0.0) * RAD2DEG
}
