//! # Numeric primitives
//!
//! Angle folding (the `fmod` family) and the three-point Bessel interpolation
//! kernel shared by the rise/transit/set engine and the ΔT table lookup.
//!
//! The interpolation and altitude kernels are generic over
//! [`num_traits::Float`]: the crate instantiates them with `f64`, and any
//! higher-precision `Float` implementor can be substituted without touching
//! the algorithms.

use num_traits::{Float, FromPrimitive};

/// True mathematical modulo: the result lies in `[0, m)` for `m > 0`,
/// regardless of the sign of `x`.
///
/// `fmod(-0.5, 1.0) == 0.5`, `fmod(1.0, 1.0) == 0.0`.
pub fn fmod(x: f64, m: f64) -> f64 {
    x.rem_euclid(m)
}

/// Fold an angle into `[0, 360)` degrees.
pub fn fmod360(x: f64) -> f64 {
    fmod(x, 360.0)
}

/// Fold a time into `[0, 24)` hours.
pub fn fmod24(x: f64) -> f64 {
    fmod(x, 24.0)
}

/// Fold an angle into `(-180, 180]` degrees.
pub fn fmod180(x: f64) -> f64 {
    let r = fmod360(x);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Fold a latitude-like angle back into `[-90, 90]` degrees.
///
/// This is a reflection, not a modulo: values past the poles are folded
/// back toward the equator, so `fmod90(91.0) == 89.0` and
/// `fmod90(-91.0) == -89.0`.
pub fn fmod90(x: f64) -> f64 {
    let r = fmod360(x);
    if r > 270.0 {
        r - 360.0
    } else if r > 90.0 {
        180.0 - r
    } else {
        r
    }
}

/// Three-point Bessel interpolation (AA p. 24).
///
/// Given three equally spaced samples `y1, y2, y3` and a fractional offset
/// `n` from the middle sample (in units of the sample spacing, typically in
/// `[-1, 1]`), returns the interpolated value at `y2 + n` spacings:
///
/// ```text
/// a = y2 - y1;  b = y3 - y2;  c = b - a
/// y = y2 + (n/2) · (a + b + n·c)
/// ```
///
/// `interpolate(y1, y2, y3, 0) == y2` exactly.
pub fn interpolate<F: Float + FromPrimitive>(y1: F, y2: F, y3: F, n: F) -> F {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    let two = F::from_f64(2.0).unwrap();
    y2 + (n / two) * (a + b + n * c)
}

/// Local altitude above the horizon for a given hour angle (AA Eq. 13.6).
///
/// All angles in radians. `sin h = sin φ sin δ + cos φ cos δ cos H`.
pub fn altitude_from_hour_angle<F: Float + FromPrimitive>(latitude: F, declination: F, hour_angle: F) -> F {
    let sinh = latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos();
    sinh.asin()
}
