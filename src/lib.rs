#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Bidirectional conversion between WGS84 latitude/longitude and
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! coordinates.
//!
//! ```
//! use utm::{from_latlon, to_latlon, Designator};
//!
//! let coord = from_latlon(50.77535, 6.08389, None, Designator::Unspecified).unwrap();
//! assert_eq!(coord.zone_number(), 32);
//! assert_eq!(coord.zone_letter(), Some('U'));
//!
//! let back = to_latlon(coord.easting(), coord.northing(), 32, Designator::Letter('U'), true).unwrap();
//! assert!((back.latitude() - 50.77535).abs() < 1e-5);
//! assert!((back.longitude() - 6.08389).abs() < 1e-5);
//! ```

use thiserror::Error;

pub mod batch;
pub mod latlon;
pub mod utm;
pub mod zone;

pub use batch::{from_latlon_batch, to_latlon_batch, UtmBatch};
pub use latlon::LatLon;
pub use utm::{from_latlon, to_latlon, Utm};
pub use zone::{
    check_valid_zone, check_valid_zone_letter, check_valid_zone_number, latitude_to_zone_letter,
    latlon_to_zone_number, zone_letter_to_central_latitude, zone_number_to_central_longitude,
    Designator,
};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    /// A value lies outside its valid domain.
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Optional parameters were combined in a contradictory or incomplete way.
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
    #[error("Coordinate string is invalid: {0}")]
    InvalidFormat(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from the same text its `Display` impl produces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] on malformed text, or the errors of the
    /// type's validating constructor.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type.
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use utm::{LatLon, Utm};
///
/// let coord: Utm = utm::from_str("32U 294409 5628898").unwrap();
/// assert_eq!(coord.zone_number(), 32);
///
/// let coord: LatLon = utm::from_str("50.77535 6.08389").unwrap();
/// assert_eq!(coord.latitude(), 50.77535);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
