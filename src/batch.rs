//! Elementwise conversion of many points sharing one zone.
//!
//! The zone is resolved from the first point only, so callers must make sure
//! all points belong to the same zone (or force one). Every element is then
//! computed exactly as the scalar [`from_latlon`](crate::from_latlon) /
//! [`to_latlon`](crate::to_latlon) would for that zone.

use crate::{
    latlon::{check_latlon, LatLon},
    utility::{min_max, mixed_signs},
    utm::{check_inverse, unproject, ResolvedZone, Utm},
    zone::Designator,
    Error,
};

/// Projected coordinates of a batch of points in a single zone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmBatch {
    pub eastings: Vec<f64>,
    pub northings: Vec<f64>,
    pub zone_number: i32,
    pub zone_letter: Option<char>,
    pub northern: bool,
}

impl UtmBatch {
    pub fn len(&self) -> usize {
        self.eastings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eastings.is_empty()
    }

    /// Iterates over the points as individual [`Utm`] values.
    pub fn iter(&self) -> impl Iterator<Item = Utm> + '_ {
        self.eastings
            .iter()
            .zip(&self.northings)
            .map(|(&easting, &northing)| Utm {
                easting,
                northing,
                zone_number: self.zone_number,
                zone_letter: self.zone_letter,
                northern: self.northern,
            })
    }
}

fn check_lengths(first: usize, second: usize) -> Result<(), Error> {
    if first != second {
        return Err(Error::InvalidUsage(format!(
            "coordinate slices must have the same length, got {first} and {second}"
        )));
    }
    if first == 0 {
        return Err(Error::InvalidUsage("coordinate slices must not be empty".to_string()));
    }

    Ok(())
}

/// Converts many latitude/longitude points to UTM in one zone.
///
/// # Errors
///
/// Same as [`from_latlon`](crate::from_latlon), checked over all points.
/// Additionally returns [`Error::InvalidUsage`] if the slices differ in length
/// or are empty, or if the latitudes straddle the equator while no letter or
/// hemisphere is forced.
///
/// # Usage
///
/// ```
/// use utm::{from_latlon_batch, Designator};
///
/// let batch = from_latlon_batch(&[0., 3., 6.], &[0., 1., 3.4], None, Designator::Unspecified).unwrap();
///
/// assert_eq!(batch.zone_number, 31);
/// assert_eq!(batch.zone_letter, Some('N'));
/// assert!((batch.eastings[1] - 277707.83).abs() < 1e-2);
/// assert!((batch.northings[2] - 663220.72).abs() < 1e-2);
///
/// assert!(from_latlon_batch(&[-0.1, 0.1], &[0., 0.], None, Designator::Unspecified).is_err());
/// assert!(from_latlon_batch(&[-0.1, 0.1], &[0., 0.], None, Designator::Northern(true)).is_ok());
/// ```
pub fn from_latlon_batch(
    latitudes: &[f64],
    longitudes: &[f64],
    force_zone_number: Option<i32>,
    force: Designator,
) -> Result<UtmBatch, Error> {
    check_lengths(latitudes.len(), longitudes.len())?;

    match (min_max(latitudes), min_max(longitudes)) {
        (Some((lat_min, lat_max)), Some((lon_min, lon_max))) => {
            check_latlon(lat_min, lon_min)?;
            check_latlon(lat_max, lon_max)?;
        }
        _ => return Err(Error::OutOfRange("coordinates must not be NaN".to_string())),
    }

    let zone = ResolvedZone::resolve(latitudes[0], longitudes[0], force_zone_number, force)?;

    if force == Designator::Unspecified && mixed_signs(latitudes) {
        return Err(Error::InvalidUsage("latitudes must all have the same sign".to_string()));
    }

    let (eastings, northings) = latitudes
        .iter()
        .zip(longitudes)
        .map(|(&lat, &lon)| {
            let point = zone.project(lat, lon);
            (point.easting, point.northing)
        })
        .unzip();

    Ok(UtmBatch {
        eastings,
        northings,
        zone_number: zone.number,
        zone_letter: zone.letter,
        northern: zone.northern,
    })
}

/// Converts many UTM points of one zone to latitude/longitude.
///
/// # Errors
///
/// Same as [`to_latlon`](crate::to_latlon), checked over all points.
/// Additionally returns [`Error::InvalidUsage`] if the slices differ in length
/// or are empty.
///
/// # Usage
///
/// ```
/// use utm::{to_latlon_batch, Designator};
///
/// let points = to_latlon_batch(
///     &[166021.443, 277707.831, 544268.128],
///     &[0.0, 331796.292, 663220.720],
///     31,
///     Designator::Northern(true),
///     true,
/// ).unwrap();
///
/// assert!((points[1].latitude() - 3.).abs() < 1e-5);
/// assert!((points[2].longitude() - 3.4).abs() < 1e-5);
/// ```
pub fn to_latlon_batch(
    eastings: &[f64],
    northings: &[f64],
    zone_number: i32,
    designator: Designator,
    strict: bool,
) -> Result<Vec<LatLon>, Error> {
    check_lengths(eastings.len(), northings.len())?;

    let bounds = match (min_max(eastings), min_max(northings)) {
        (Some((min_e, max_e)), Some((min_n, max_n))) => Some((min_e, max_e, min_n, max_n)),
        _ if strict => return Err(Error::OutOfRange("coordinates must not be NaN".to_string())),
        _ => None,
    };

    let northern = check_inverse(bounds, zone_number, designator, strict)?;

    Ok(eastings
        .iter()
        .zip(northings)
        .map(|(&easting, &northing)| unproject(easting, northing, zone_number, northern))
        .collect())
}
