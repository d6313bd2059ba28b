use log::trace;

use crate::{utility::GeoMath, Error, ThisOrThat};

/// Latitude band letters from 80°S northwards, 8° each. `X` is repeated so the
/// top band covers 72°N to 84°N.
pub(crate) const ZONE_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWXX";

pub mod zonespec {
    pub const MINZONE: i32 = 1;
    pub const MAXZONE: i32 = 60;
    pub const MINLAT: f64 = -80.;
    pub const MAXLAT: f64 = 84.;
    pub const MINLON: f64 = -180.;
    pub const MAXLON: f64 = 180.;
}

/// How the hemisphere of a UTM coordinate is given: by zone letter, by an
/// explicit northern flag, or not at all.
///
/// A letter and a flag are mutually exclusive, so at most one of them can be
/// carried. Use [`Designator::from_parts`] when both come in as optional
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Designator {
    /// Latitude band letter, `C..=X` without `I` and `O`, either case.
    Letter(char),
    /// `true` for the northern hemisphere, `false` for the southern one.
    Northern(bool),
    #[default]
    Unspecified,
}

impl Designator {
    /// Builds a designator from an optional zone letter and an optional
    /// northern flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUsage`] if both are set.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm::Designator;
    ///
    /// assert_eq!(Designator::from_parts(Some('T'), None).unwrap(), Designator::Letter('T'));
    /// assert_eq!(Designator::from_parts(None, Some(false)).unwrap(), Designator::Northern(false));
    /// assert_eq!(Designator::from_parts(None, None).unwrap(), Designator::Unspecified);
    /// assert!(Designator::from_parts(Some('T'), Some(true)).is_err());
    /// ```
    pub fn from_parts(letter: Option<char>, northern: Option<bool>) -> Result<Designator, Error> {
        match (letter, northern) {
            (Some(_), Some(_)) => Err(Error::InvalidUsage(
                "set either the zone letter or northern, but not both".to_string(),
            )),
            (Some(letter), None) => Ok(Designator::Letter(letter)),
            (None, Some(northern)) => Ok(Designator::Northern(northern)),
            (None, None) => Ok(Designator::Unspecified),
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Designator::Letter(letter) => Some(letter.to_ascii_uppercase()),
            _ => None,
        }
    }

    /// Hemisphere carried by the designator. Letters from `N` upwards are
    /// northern.
    pub fn is_north(&self) -> Option<bool> {
        match self {
            Designator::Letter(letter) => Some(letter.to_ascii_uppercase() >= 'N'),
            Designator::Northern(northern) => Some(*northern),
            Designator::Unspecified => None,
        }
    }

    pub(crate) fn check(&self) -> Result<(), Error> {
        match self {
            Designator::Letter(letter) => check_valid_zone_letter(*letter),
            _ => Ok(()),
        }
    }
}

/// Checks that a zone number lies in `[1, 60]`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] otherwise.
pub fn check_valid_zone_number(zone_number: i32) -> Result<(), Error> {
    if (zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone_number) {
        Ok(())
    } else {
        Err(Error::OutOfRange(format!(
            "zone number {zone_number} out of range (must be between 1 and 60)"
        )))
    }
}

/// Checks that a zone letter lies in `C..=X`, excluding `I` and `O`. Lower case
/// letters are accepted.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] otherwise.
pub fn check_valid_zone_letter(zone_letter: char) -> Result<(), Error> {
    let upper = zone_letter.to_ascii_uppercase();
    if ('C'..='X').contains(&upper) && upper != 'I' && upper != 'O' {
        Ok(())
    } else {
        Err(Error::OutOfRange(format!(
            "zone letter {zone_letter:?} out of range (must be between C and X)"
        )))
    }
}

/// Checks a zone number and, if given, a zone letter.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming whichever part is invalid.
///
/// # Usage
///
/// ```
/// use utm::check_valid_zone;
///
/// assert!(check_valid_zone(32, Some('U')).is_ok());
/// assert!(check_valid_zone(60, Some('e')).is_ok());
/// assert!(check_valid_zone(1, None).is_ok());
///
/// assert!(check_valid_zone(0, Some('U')).is_err());
/// assert!(check_valid_zone(20, Some('I')).is_err());
/// assert!(check_valid_zone(20, Some('Y')).is_err());
/// ```
pub fn check_valid_zone(zone_number: i32, zone_letter: Option<char>) -> Result<(), Error> {
    check_valid_zone_number(zone_number)?;
    if let Some(letter) = zone_letter {
        check_valid_zone_letter(letter)?;
    }

    Ok(())
}

/// Returns the zone number containing the point, honouring the Norway and
/// Svalbard exceptions. The longitude is wrapped into `[-180, 180)` first, so
/// `180` lands in zone 1.
///
/// # Usage
///
/// ```
/// use utm::latlon_to_zone_number;
///
/// assert_eq!(latlon_to_zone_number(40.71435, -74.00597), 18);
/// assert_eq!(latlon_to_zone_number(0., 180.), 1);
/// // Norway
/// assert_eq!(latlon_to_zone_number(60., 5.), 32);
/// // Svalbard
/// assert_eq!(latlon_to_zone_number(79., 18.), 33);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn latlon_to_zone_number(latitude: f64, longitude: f64) -> i32 {
    let longitude = longitude.ang_normalize();

    let zone = if (56_f64..64.).contains(&latitude) && (3_f64..12.).contains(&longitude) {
        // The Norway exception
        32
    } else if (72_f64..=84.).contains(&latitude) && (0_f64..42.).contains(&longitude) {
        // The Svalbard exception
        if longitude < 9. {
            31
        } else if longitude < 21. {
            33
        } else if longitude < 33. {
            35
        } else {
            37
        }
    } else {
        ((longitude + 180.) / 6.).floor() as i32 + 1
    };

    trace!("Point ({latitude}, {longitude}) lies in zone {zone}");
    zone
}

/// Returns the latitude band letter, or `None` outside `[-80, 84]`.
///
/// # Usage
///
/// ```
/// use utm::latitude_to_zone_letter;
///
/// assert_eq!(latitude_to_zone_letter(50.77535), Some('U'));
/// assert_eq!(latitude_to_zone_letter(0.), Some('N'));
/// assert_eq!(latitude_to_zone_letter(-0.1), Some('M'));
/// assert_eq!(latitude_to_zone_letter(84.), Some('X'));
/// assert_eq!(latitude_to_zone_letter(84.1), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn latitude_to_zone_letter(latitude: f64) -> Option<char> {
    latitude
        .in_bounds(zonespec::MINLAT, zonespec::MAXLAT, false)
        .then(|| ZONE_LETTERS.as_bytes()[((latitude + 80.) as usize) >> 3] as char)
}

/// Returns the central meridian of a zone in degrees.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the zone is not in `[1, 60]`.
///
/// # Usage
///
/// ```
/// use utm::zone_number_to_central_longitude;
///
/// assert_eq!(zone_number_to_central_longitude(1).unwrap(), -177.);
/// assert_eq!(zone_number_to_central_longitude(31).unwrap(), 3.);
/// assert!(zone_number_to_central_longitude(61).is_err());
/// ```
pub fn zone_number_to_central_longitude(zone_number: i32) -> Result<f64, Error> {
    check_valid_zone_number(zone_number)?;
    Ok(central_meridian(zone_number))
}

pub(crate) fn central_meridian(zone_number: i32) -> f64 {
    f64::from((zone_number - 1) * 6 - 180 + 3)
}

/// Returns the latitude at the middle of a band in degrees. The wide `X` band
/// is centred on 78°.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the letter is not a valid band.
///
/// # Usage
///
/// ```
/// use utm::zone_letter_to_central_latitude;
///
/// assert_eq!(zone_letter_to_central_latitude('C').unwrap(), -76.);
/// assert_eq!(zone_letter_to_central_latitude('q').unwrap(), 20.);
/// assert_eq!(zone_letter_to_central_latitude('X').unwrap(), 78.);
/// assert!(zone_letter_to_central_latitude('O').is_err());
/// ```
pub fn zone_letter_to_central_latitude(zone_letter: char) -> Result<f64, Error> {
    check_valid_zone_letter(zone_letter)?;
    let zone_letter = zone_letter.to_ascii_uppercase();

    let index = ZONE_LETTERS
        .find(zone_letter)
        .ok_or_else(|| Error::OutOfRange(format!("zone letter {zone_letter:?} has no latitude band")))?;

    #[allow(clippy::cast_precision_loss)]
    let central = (zone_letter == 'X').ternary(78., -76. + 8. * index as f64);
    Ok(central)
}
