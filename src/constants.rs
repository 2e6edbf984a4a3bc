//! # Constants and type definitions for Zenith
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `zenith` library.
//!
//! ## Overview
//!
//! - Astronomical constants and reference epochs
//! - Unit conversions (degrees ↔ radians ↔ hours, days ↔ seconds)
//! - Core type aliases used across the crate
//! - Standard reference altitudes for rise/set computations
//!
//! These definitions are used by all main modules, including the sidereal time routines,
//! the coordinate transforms, and the rise/transit/set engine.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a mean solar day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

/// Degrees → hours
pub const DEG2H: f64 = 24.0 / 360.0;

/// Hours → degrees
pub const H2DEG: f64 = 360.0 / 24.0;

/// Julian Day of the standard epoch J2000.0 (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Conversion offset between Julian Date and Modified Julian Date
pub const MJD_START: f64 = 2_400_000.5;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Mean advance of Greenwich sidereal time per mean solar day, in degrees
pub const EARTH_SIDEREAL_ROTATION_RATE: f64 = 360.985_647;

/// Obliquity of the ecliptic at the standard epoch J2000.0, in degrees
pub const ECLIPTIC_OBLIQUITY_J2000: f64 = 23.439_291_1;

/// Reference altitude of the center of a star or planet at rise/set,
/// accounting for standard atmospheric refraction at the horizon.
pub const STANDARD_ALTITUDE_STARS: f64 = -0.5667;

/// Reference altitude of the center of the Sun at rise/set (refraction
/// plus semi-diameter).
pub const STANDARD_ALTITUDE_SUN: f64 = -0.8333;

/// Reference altitude of the center of the Moon at rise/set (mean value,
/// the lunar parallax dominates the refraction term).
pub const STANDARD_ALTITUDE_MOON: f64 = 0.125;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle in arcseconds
pub type ArcSecond = f64;
/// Time of day in decimal hours
pub type Hour = f64;
/// Duration in seconds
pub type Second = f64;
/// Distance in meters
pub type Meter = f64;

/// Julian Day (days since -4712-01-01 12:00)
pub type JulianDay = f64;
/// Time interval of 36525 days from J2000.0
pub type JulianCentury = f64;
/// Time interval of 365250 days from J2000.0
pub type JulianMillennium = f64;
