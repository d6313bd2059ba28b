use log::{debug, warn};

use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING},
    latlon::{check_latlon, LatLon},
    projections::transverse_mercator::TransverseMercator,
    utility::GeoMath,
    zone::{
        central_meridian, check_valid_zone, check_valid_zone_number, latitude_to_zone_letter,
        latlon_to_zone_number, zonespec, Designator,
    },
    Error, ParseCoord, ThisOrThat,
};

const MIN_EASTING: f64 = 100_000.;
const MAX_EASTING: f64 = 1_000_000.;
const MIN_NORTHING: f64 = 0.;
const MAX_NORTHING: f64 = 10_000_000.;

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. The zone letter is absent when the hemisphere was given as a flag
/// instead.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "zone"))]
    pub(crate) zone_number: i32,
    #[cfg_attr(feature = "serde", serde(alias = "letter"))]
    pub(crate) zone_letter: Option<char>,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north"))]
    pub(crate) northern: bool,
}

/// Zone a point is projected into, after forcing has been applied.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedZone {
    pub(crate) number: i32,
    pub(crate) letter: Option<char>,
    pub(crate) northern: bool,
}

impl ResolvedZone {
    /// Resolves the zone of a point, which must already be range checked.
    ///
    /// A forced letter wins over the computed one; a forced northern flag
    /// drops the letter altogether.
    pub(crate) fn resolve(
        latitude: f64,
        longitude: f64,
        force_zone_number: Option<i32>,
        force: Designator,
    ) -> Result<ResolvedZone, Error> {
        force.check()?;

        let number = match force_zone_number {
            Some(number) => {
                check_valid_zone(number, force.letter())?;
                warn_if_far(latitude, longitude, number);
                number
            }
            None => latlon_to_zone_number(latitude, longitude),
        };

        let letter = match force {
            Designator::Letter(letter) => Some(letter.to_ascii_uppercase()),
            Designator::Northern(_) => None,
            Designator::Unspecified => latitude_to_zone_letter(latitude),
        };

        let northern = match force {
            Designator::Northern(northern) => northern,
            _ => letter.map_or(latitude >= 0., |letter| letter >= 'N'),
        };

        Ok(ResolvedZone {
            number,
            letter,
            northern,
        })
    }

    pub(crate) fn natural(latitude: f64, longitude: f64) -> ResolvedZone {
        let letter = latitude_to_zone_letter(latitude);
        ResolvedZone {
            number: latlon_to_zone_number(latitude, longitude),
            letter,
            northern: letter.map_or(latitude >= 0., |letter| letter >= 'N'),
        }
    }

    /// Projects a point into this zone, adding false easting and northing.
    pub(crate) fn project(&self, latitude: f64, longitude: f64) -> Utm {
        let (x, y) = TransverseMercator::utm(central_meridian(self.number))
            .from_latlon(latitude, longitude);

        Utm {
            easting: x + FALSE_EASTING,
            northing: y + (!self.northern).ternary(FALSE_NORTHING, 0.),
            zone_number: self.number,
            zone_letter: self.letter,
            northern: self.northern,
        }
    }
}

// The series loses accuracy quickly away from the central meridian
fn warn_if_far(latitude: f64, longitude: f64, forced: i32) {
    let natural = latlon_to_zone_number(latitude, longitude);
    let diff = (forced - natural).abs();
    if diff.min(zonespec::MAXZONE - diff) > 1 {
        warn!("Projecting ({latitude}, {longitude}) into zone {forced}, its own zone is {natural}");
    }
}

pub(crate) fn project_natural(latitude: f64, longitude: f64) -> Utm {
    ResolvedZone::natural(latitude, longitude).project(latitude, longitude)
}

pub(crate) fn check_easting_northing(easting: f64, northing: f64) -> Result<(), Error> {
    if !easting.in_bounds(MIN_EASTING, MAX_EASTING, true) {
        return Err(Error::OutOfRange(format!(
            "easting {easting} out of range (must be between 100,000 m and 999,999 m)"
        )));
    }
    if !northing.in_bounds(MIN_NORTHING, MAX_NORTHING, false) {
        return Err(Error::OutOfRange(format!(
            "northing {northing} out of range (must be between 0 m and 10,000,000 m)"
        )));
    }

    Ok(())
}

/// Validates the arguments of an inverse conversion and returns the
/// hemisphere.
pub(crate) fn check_inverse(
    bounds: Option<(f64, f64, f64, f64)>,
    zone_number: i32,
    designator: Designator,
    strict: bool,
) -> Result<bool, Error> {
    let northern = designator.is_north().ok_or_else(|| {
        Error::InvalidUsage("either the zone letter or northern needs to be set".to_string())
    })?;

    if let Some((min_e, max_e, min_n, max_n)) = bounds {
        if strict {
            check_easting_northing(min_e, min_n)?;
            check_easting_northing(max_e, max_n)?;
        } else if check_easting_northing(min_e, min_n)
            .and(check_easting_northing(max_e, max_n))
            .is_err()
        {
            debug!("Converting UTM coordinates outside the regular grid in zone {zone_number}");
        }
    }

    check_valid_zone(zone_number, designator.letter())?;

    Ok(northern)
}

pub(crate) fn unproject(easting: f64, northing: f64, zone_number: i32, northern: bool) -> LatLon {
    let x = easting - FALSE_EASTING;
    let y = northing - (!northern).ternary(FALSE_NORTHING, 0.);

    let (lat, lon) = TransverseMercator::utm(central_meridian(zone_number)).to_latlon(x, y);
    LatLon::new(lat, lon)
}

/// Converts a latitude/longitude to UTM.
///
/// The zone number and letter are derived from the point unless forced. A
/// forced [`Designator::Letter`] is returned as the zone letter and decides
/// the hemisphere; a forced [`Designator::Northern`] decides the hemisphere
/// and leaves the zone letter empty.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the latitude is outside `[-80, 84]`, the
/// longitude outside `[-180, 180]`, or the forced zone number or letter is
/// invalid.
///
/// # Usage
///
/// ```
/// use utm::{from_latlon, Designator};
///
/// let coord = from_latlon(40.71435, -74.00597, None, Designator::Unspecified).unwrap();
/// assert_eq!(coord.zone_number(), 18);
/// assert_eq!(coord.zone_letter(), Some('T'));
/// assert!((coord.easting() - 583960.).abs() < 1.);
/// assert!((coord.northing() - 4507523.).abs() < 1.);
///
/// // Forced into the neighbouring zone
/// let coord = from_latlon(40.71435, -74.00597, Some(19), Designator::Letter('T')).unwrap();
/// assert_eq!(coord.zone_number(), 19);
///
/// // Forced hemisphere, no zone letter
/// let coord = from_latlon(-0.1, 0., Some(31), Designator::Northern(true)).unwrap();
/// assert_eq!(coord.zone_letter(), None);
/// assert!(coord.northing() < 0.);
///
/// assert!(from_latlon(84.1, 0., None, Designator::Unspecified).is_err());
/// ```
pub fn from_latlon(
    latitude: f64,
    longitude: f64,
    force_zone_number: Option<i32>,
    force: Designator,
) -> Result<Utm, Error> {
    check_latlon(latitude, longitude)?;
    let zone = ResolvedZone::resolve(latitude, longitude, force_zone_number, force)?;

    Ok(zone.project(latitude, longitude))
}

/// Converts a UTM coordinate to latitude/longitude.
///
/// The hemisphere comes from `designator`, which must not be
/// [`Designator::Unspecified`]. With `strict`, the easting must lie in
/// `[100000, 1000000)` and the northing in `[0, 10000000]`. Without it, points
/// projected into a foreign zone can be converted back; the longitude is
/// wrapped into `[-180, 180)`.
///
/// # Errors
///
/// Returns [`Error::InvalidUsage`] if `designator` is unspecified and
/// [`Error::OutOfRange`] if the zone or, with `strict`, the coordinates are
/// invalid.
///
/// # Usage
///
/// ```
/// use utm::{from_latlon, to_latlon, Designator};
///
/// let coord = to_latlon(313784., 5427057., 60, Designator::Letter('G'), true).unwrap();
/// assert!((coord.latitude() + 41.28646).abs() < 1e-4);
/// assert!((coord.longitude() - 174.77624).abs() < 1e-4);
///
/// let coord = to_latlon(313784., 5427057., 60, Designator::Northern(false), true).unwrap();
/// assert!((coord.latitude() + 41.28646).abs() < 1e-4);
///
/// // Just west of the antimeridian, forced into zone 1
/// let forced = from_latlon(0., 179.9, Some(1), Designator::Letter('N')).unwrap();
/// let coord = to_latlon(forced.easting(), forced.northing(), 1, Designator::Letter('N'), false).unwrap();
/// assert!((coord.longitude() - 179.9).abs() < 1e-3);
///
/// assert!(to_latlon(500000., 5000000., 32, Designator::Unspecified, true).is_err());
/// assert!(to_latlon(0., 5000000., 32, Designator::Letter('U'), true).is_err());
/// ```
pub fn to_latlon(
    easting: f64,
    northing: f64,
    zone_number: i32,
    designator: Designator,
    strict: bool,
) -> Result<LatLon, Error> {
    let northern = check_inverse(
        Some((easting, easting, northing, northing)),
        zone_number,
        designator,
        strict,
    )?;

    Ok(unproject(easting, northing, zone_number, northern))
}

impl Utm {
    /// Tries to create a UTM point from its constituent parts. The hemisphere
    /// is given by a zone letter or a northern flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUsage`] if `designator` is unspecified.
    /// Returns [`Error::OutOfRange`] if the zone is invalid or the coordinates
    /// lie outside the regular grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::{Designator, Utm};
    ///
    /// let coord = Utm::create(294409., 5628898., 32, Designator::Letter('u')).unwrap();
    ///
    /// assert_eq!(coord.zone_number(), 32);
    /// assert_eq!(coord.zone_letter(), Some('U'));
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::create(294409., 5628898., 61, Designator::Letter('U')).is_err());
    /// assert!(Utm::create(294409., 5628898., 32, Designator::Letter('O')).is_err());
    /// assert!(Utm::create(1000000., 5628898., 32, Designator::Northern(true)).is_err());
    /// ```
    pub fn create(easting: f64, northing: f64, zone_number: i32, designator: Designator) -> Result<Utm, Error> {
        let northern = check_inverse(
            Some((easting, easting, northing, northing)),
            zone_number,
            designator,
            true,
        )?;

        Ok(Utm {
            easting,
            northing,
            zone_number,
            zone_letter: designator.letter(),
            northern,
        })
    }

    /// Returns the UTM easting in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the zone number, `1..=60`.
    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }

    /// Returns the upper case zone letter, if known.
    pub fn zone_letter(&self) -> Option<char> {
        self.zone_letter
    }

    /// Returns whether the coordinate is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.northern
    }

    /// The letter if known, otherwise the hemisphere flag.
    pub fn designator(&self) -> Designator {
        self.zone_letter
            .map_or(Designator::Northern(self.northern), Designator::Letter)
    }

    /// Converts from [`LatLon`] to [`Utm`]
    pub fn from_latlon(value: &LatLon) -> Utm {
        value.to_utm()
    }

    /// Converts from [`Utm`] to [`LatLon`]. No range check is done, so
    /// coordinates that were forced into a foreign zone convert back as well.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::LatLon;
    ///
    /// let coord = LatLon::create(50.77535, 6.08389).unwrap();
    /// let converted = coord.to_utm().to_latlon();
    ///
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-5);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-5);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        unproject(self.easting, self.northing, self.zone_number, self.northern)
    }
}

impl ParseCoord for Utm {
    /// Parses `"<zone><band> <easting> <northing>"`, e.g. `"32U 294409 5628898"`.
    /// A lower case `n` or `s` in place of the band gives the hemisphere
    /// without a zone letter.
    ///
    /// Only the zone is validated. Easting and northing are taken as is, so
    /// anything [`from_latlon`] returns, forced zones included, parses back.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value.split_whitespace();

        let zone = pieces
            .next()
            .ok_or_else(|| Error::InvalidFormat(format!("Missing zone in {value:?}")))?;

        let digits = zone.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 2 {
            return Err(Error::InvalidFormat(format!("Zone {zone:?} must start with 1 or 2 digits")));
        }

        let zone_number: i32 = zone[..digits]
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("Cannot parse zone number in {zone:?}")))?;
        check_valid_zone_number(zone_number)?;

        let mut band = zone[digits..].chars();
        let designator = match (band.next(), band.next()) {
            (Some('n'), None) => Designator::Northern(true),
            (Some('s'), None) => Designator::Northern(false),
            (Some(letter), None) => Designator::Letter(letter),
            _ => return Err(Error::InvalidFormat(format!("Zone {zone:?} must end with a single band letter"))),
        };

        let mut next_value = |name: &str| -> Result<f64, Error> {
            let piece = pieces
                .next()
                .ok_or_else(|| Error::InvalidFormat(format!("Missing {name} in {value:?}")))?;
            piece
                .parse()
                .map_err(|_| Error::InvalidFormat(format!("Cannot parse {name} {piece:?}")))
        };

        let easting = next_value("easting")?;
        let northing = next_value("northing")?;

        if let Some(extra) = pieces.next() {
            return Err(Error::InvalidFormat(format!("Unexpected trailing {extra:?} in {value:?}")));
        }

        let northern = check_inverse(None, zone_number, designator, false)?;

        Ok(Utm {
            easting,
            northing,
            zone_number,
            zone_letter: designator.letter(),
            northern,
        })
    }
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let band = self
            .zone_letter
            .unwrap_or_else(|| self.northern.ternary('n', 's'));

        let mut buf = ryu::Buffer::new();
        let easting = whole_metres(buf.format(self.easting));
        let mut buf = ryu::Buffer::new();
        let northing = whole_metres(buf.format(self.northing));

        write!(
            f,
            "{}{band} {easting} {northing}",
            self.zone_number,
        )
    }
}

// ryu always prints a fraction, drop it for whole metres
fn whole_metres(value: &str) -> &str {
    value.strip_suffix(".0").unwrap_or(value)
}
