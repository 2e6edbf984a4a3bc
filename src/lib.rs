//! # Zenith
//!
//! Positions and rise/transit/set times of celestial bodies, following the
//! algorithms of Jean Meeus' *Astronomical Algorithms*.
//!
//! A pure computation library: given a Julian Day and an observer location,
//! it returns angles, distances and time quantities through closed-form and
//! series expressions. No I/O, no shared state; every function is
//! deterministic and safe to call concurrently.
//!
//! ```no_run
//! use zenith::constants::STANDARD_ALTITUDE_STARS;
//! use zenith::coordinates::{EquatorialCoordinates, GeographicCoordinates};
//! use zenith::juliandays::julian_day;
//! use zenith::rise_transit_set::rise_transit_set_times;
//!
//! let jd = julian_day(1988, 3, 20, 0, 0, 0)?;
//! let venus = EquatorialCoordinates::new(41.73129, 18.44092);
//! let boston = GeographicCoordinates::new(-71.0833, 42.3333);
//! let events = rise_transit_set_times(jd, &venus, &boston, STANDARD_ALTITUDE_STARS);
//! if !events.transit.is_circumpolar {
//!     println!("rise at {:.2}h UTC", events.rise.utc.unwrap());
//! }
//! # Ok::<(), zenith::errors::ZenithError>(())
//! ```

pub mod constants;
pub mod coordinates;
pub mod deltat;
pub mod earth_orientation;
pub mod errors;
pub mod juliandays;
pub mod numeric;
pub mod rise_transit_set;
pub mod sexagesimal;
pub mod sun;
