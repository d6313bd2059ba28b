use std::fmt::Display;

use crate::{
    utility::GeoMath,
    utm::{self, Utm},
    zone::{zonespec, Designator},
    Error, ParseCoord,
};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 Latitude/Longitude point. Can be converted
/// to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point inside the area UTM covers:
    /// * Latitude must be in range [-80,84]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.71435);
    /// assert_eq!(coord.longitude(), -74.00597);
    ///
    /// // UTM stops at 84°N and 80°S
    /// assert!(LatLon::create(84.1, 0.0).is_err());
    /// assert!(LatLon::create(-80.1, 0.0).is_err());
    ///
    /// assert!(LatLon::create(0.0, -180.1).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        check_latlon(lat, lon)?;
        Ok(LatLon::new(lat, lon))
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use utm::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-41.28646, 174.77624).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::{Designator, LatLon, Utm};
    ///
    /// let coord_utm = Utm::create(583960., 4507523., 18, Designator::Letter('T')).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// assert!((converted.latitude() - 40.71435).abs() < 1e-4);
    /// assert!((converted.longitude() + 74.00597).abs() < 1e-4);
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts to [`Utm`] in the zone the point naturally belongs to.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::LatLon;
    ///
    /// let coord = LatLon::create(-41.28646, 174.77624).unwrap();
    /// let converted = coord.to_utm();
    ///
    /// assert_eq!(converted.zone_number(), 60);
    /// assert_eq!(converted.zone_letter(), Some('G'));
    /// assert!((converted.easting() - 313784.).abs() < 1.);
    /// assert!((converted.northing() - 5427057.).abs() < 1.);
    /// ```
    pub fn to_utm(&self) -> Utm {
        utm::project_natural(self.latitude, self.longitude)
    }

    /// Converts to [`Utm`], optionally forcing the zone number and the
    /// hemisphere designator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the forced zone number or letter is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::{Designator, LatLon};
    ///
    /// let coord = LatLon::create(40.71435, -74.00597).unwrap();
    /// let converted = coord.to_utm_forced(Some(19), Designator::Letter('T')).unwrap();
    ///
    /// assert_eq!(converted.zone_number(), 19);
    /// assert_eq!(converted.zone_letter(), Some('T'));
    ///
    /// assert!(coord.to_utm_forced(Some(70), Designator::Letter('T')).is_err());
    /// ```
    pub fn to_utm_forced(&self, force_zone_number: Option<i32>, force: Designator) -> Result<Utm, Error> {
        utm::from_latlon(self.latitude, self.longitude, force_zone_number, force)
    }
}

pub(crate) fn check_latlon(lat: f64, lon: f64) -> Result<(), Error> {
    if !lat.in_bounds(zonespec::MINLAT, zonespec::MAXLAT, false) {
        return Err(Error::OutOfRange(format!(
            "latitude {lat} out of range (must be between 80 deg S and 84 deg N)"
        )));
    }
    if !lon.in_bounds(zonespec::MINLON, zonespec::MAXLON, false) {
        return Err(Error::OutOfRange(format!(
            "longitude {lon} out of range (must be between 180 deg W and 180 deg E)"
        )));
    }

    Ok(())
}

impl ParseCoord for LatLon {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let mut next_value = |name: &str| -> Result<f64, Error> {
            let piece = pieces
                .next()
                .ok_or_else(|| Error::InvalidFormat(format!("Missing {name} in {value:?}")))?;
            piece
                .parse()
                .map_err(|_| Error::InvalidFormat(format!("Cannot parse {name} {piece:?}")))
        };

        let lat = next_value("latitude")?;
        let lon = next_value("longitude")?;

        if let Some(extra) = pieces.next() {
            return Err(Error::InvalidFormat(format!("Unexpected trailing {extra:?} in {value:?}")));
        }

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
