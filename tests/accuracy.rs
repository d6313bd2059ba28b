use float_eq::assert_float_eq;

use utm::{from_latlon, to_latlon, Designator, LatLon};

struct Known {
    latlon: (f64, f64),
    utm: (f64, f64, i32, char),
    northern: bool,
}

const KNOWN_VALUES: &[Known] = &[
    // Aachen, Germany
    Known { latlon: (50.77535, 6.08389), utm: (294_409., 5_628_898., 32, 'U'), northern: true },
    // New York, USA
    Known { latlon: (40.71435, -74.00597), utm: (583_960., 4_507_523., 18, 'T'), northern: true },
    // Wellington, New Zealand
    Known { latlon: (-41.28646, 174.77624), utm: (313_784., 5_427_057., 60, 'G'), northern: false },
    // Capetown, South Africa
    Known { latlon: (-33.92487, 18.42406), utm: (261_878., 6_243_186., 34, 'H'), northern: false },
    // Mendoza, Argentina
    Known { latlon: (-32.89018, -68.84405), utm: (514_586., 6_360_877., 19, 'H'), northern: false },
    // Fairbanks, Alaska, USA
    Known { latlon: (64.83778, -147.71639), utm: (466_013., 7_190_568., 6, 'W'), northern: true },
    // Ben Nevis, Scotland, UK
    Known { latlon: (56.79680, -5.00601), utm: (377_486., 6_296_562., 30, 'V'), northern: true },
    // Bergen, Norway
    Known { latlon: (60.38952, 5.320675), utm: (297_264., 6_700_454., 32, 'V'), northern: true },
    // Alkefjellet, Spitsbergen, Svalbard
    Known { latlon: (79.45574, 18.76338), utm: (576_830., 8_823_320., 33, 'X'), northern: true },
    // Latitude 84
    Known { latlon: (84., -5.00601), utm: (476_594., 9_328_501., 30, 'X'), northern: true },
    // East-most point on the Equator
    Known { latlon: (0., 180.), utm: (166_021., 0., 1, 'N'), northern: true },
    // West-most point on the Equator
    Known { latlon: (0., -180.), utm: (166_021., 0., 1, 'N'), northern: true },
];

fn assert_lon_eq(actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tol || (diff - 360.).abs() < tol,
        "longitude {actual} differs from {expected}"
    );
}

#[test]
fn from_latlon_known_values() {
    for known in KNOWN_VALUES {
        let (lat, lon) = known.latlon;
        let (easting, northing, zone_number, zone_letter) = known.utm;

        let coord = from_latlon(lat, lon, None, Designator::Unspecified).unwrap();

        assert_float_eq!(coord.easting(), easting, abs <= 1.);
        assert_float_eq!(coord.northing(), northing, abs <= 1.);
        assert_eq!(coord.zone_number(), zone_number);
        assert_eq!(coord.zone_letter(), Some(zone_letter));
        assert_eq!(coord.is_north(), known.northern);
    }
}

#[test]
fn to_latlon_known_values() {
    for known in KNOWN_VALUES {
        let (lat, lon) = known.latlon;
        let (easting, northing, zone_number, zone_letter) = known.utm;

        let coord = to_latlon(easting, northing, zone_number, Designator::Letter(zone_letter), true).unwrap();
        assert_float_eq!(coord.latitude(), lat, abs <= 1e-4);
        assert_lon_eq(coord.longitude(), lon, 1e-4);

        let coord = to_latlon(easting, northing, zone_number, Designator::Northern(known.northern), true).unwrap();
        assert_float_eq!(coord.latitude(), lat, abs <= 1e-4);
        assert_lon_eq(coord.longitude(), lon, 1e-4);
    }
}

#[test]
fn round_trip_across_the_grid() {
    let mut lat = -79.95;
    while lat <= 84. {
        let mut lon = -179.95;
        while lon <= 180. {
            let coord = from_latlon(lat, lon, None, Designator::Unspecified).unwrap();
            let back = to_latlon(
                coord.easting(),
                coord.northing(),
                coord.zone_number(),
                coord.designator(),
                false,
            )
            .unwrap();

            assert_float_eq!(back.latitude(), lat, abs <= 1e-4);
            assert_lon_eq(back.longitude(), lon, 1e-4);

            lon += 2.9;
        }
        lat += 1.3;
    }
}

#[test]
fn round_trip_within_centimetres_near_the_central_meridian() {
    let origin = LatLon::create(55., 9.5).unwrap();
    let back = origin.to_utm().to_latlon();

    assert!(origin.haversine(&back) < 0.05);
}

#[test]
fn series_agrees_with_reference_projection() {
    // Reference from PROJ: echo 12 55 | cct -d9 +proj=utm +zone=32
    // 12°E is the western edge of zone 33, so zone 32 has to be forced
    let coord = from_latlon(55., 12., Some(32), Designator::Letter('U')).unwrap();

    assert_eq!(coord.zone_number(), 32);
    assert_eq!(coord.zone_letter(), Some('U'));
    assert_float_eq!(coord.easting(), 691_875.632, abs <= 1.);
    assert_float_eq!(coord.northing(), 6_098_907.825, abs <= 1.);
}

#[test]
fn natural_zone_at_zone_edge() {
    let coord = from_latlon(55., 12., None, Designator::Unspecified).unwrap();

    assert_eq!(coord.zone_number(), 33);
    assert_eq!(coord.zone_letter(), Some('U'));
}
