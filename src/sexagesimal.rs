//! # Sexagesimal values and angle-string parsing
//!
//! Decomposition of decimal hours/degrees into radix, minutes and seconds,
//! and parsing of the classical `HH MM SS.SS` / `±DD MM SS.S` catalog
//! notations into degrees.

use std::fmt;

use crate::constants::{Degree, H2DEG};
use crate::errors::ZenithError;

/// A decimal value split into its sexagesimal components.
///
/// `radix` is the floor of the decimal value (rounding toward negative
/// infinity), so `minutes` and `seconds` are always non-negative and
/// `radix + minutes/60 + seconds/3600` reconstructs the input exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub radix: i32,
    pub minutes: u8,
    pub seconds: f64,
}

impl From<f64> for Sexagesimal {
    fn from(decimal: f64) -> Self {
        let radix = decimal.floor();
        let fraction_minutes = (decimal - radix) * 60.0;
        let minutes = fraction_minutes.floor();
        let seconds = (fraction_minutes - minutes) * 60.0;
        Self {
            radix: radix as i32,
            minutes: minutes as u8,
            seconds,
        }
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:04.1}", self.radix, self.minutes, self.seconds)
    }
}

/// Recompose a decimal value from non-negative sexagesimal components.
pub fn decimal_value(radix: f64, minutes: f64, seconds: f64) -> f64 {
    radix + minutes / 60.0 + seconds / 3600.0
}

/// Parse a right ascension string to degrees.
///
/// Arguments
/// ---------
/// * `ra`: a string in the format `HH MM SS.SS`
///
/// Return
/// ------
/// * The right ascension in degrees, or
///   [`ZenithError::InvalidRightAscension`] for a malformed string.
pub fn parse_right_ascension(ra: &str) -> Result<Degree, ZenithError> {
    let invalid = || ZenithError::InvalidRightAscension(ra.to_string());
    let parts: Vec<&str> = ra.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let h: f64 = parts[0].parse().map_err(|_| invalid())?;
    let m: f64 = parts[1].parse().map_err(|_| invalid())?;
    let s: f64 = parts[2].parse().map_err(|_| invalid())?;

    Ok(decimal_value(h, m, s) * H2DEG)
}

/// Parse a declination string to degrees.
///
/// Arguments
/// ---------
/// * `dec`: a string in the format `±DD MM SS.S`
///
/// Return
/// ------
/// * The declination in degrees, or [`ZenithError::InvalidDeclination`]
///   for a malformed string.
pub fn parse_declination(dec: &str) -> Result<Degree, ZenithError> {
    let invalid = || ZenithError::InvalidDeclination(dec.to_string());
    let parts: Vec<&str> = dec.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0]
        .trim_start_matches(['-', '+'])
        .parse()
        .map_err(|_| invalid())?;
    let m: f64 = parts[1].parse().map_err(|_| invalid())?;
    let s: f64 = parts[2].parse().map_err(|_| invalid())?;

    Ok(sign * decimal_value(d, m, s))
}
