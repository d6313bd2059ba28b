use utm::{from_latlon, Designator, Error, LatLon, ParseCoord, Utm};

#[test]
fn utm_display() {
    let coord = Utm::create(294_409., 5_628_898., 32, Designator::Letter('u')).unwrap();
    assert_eq!(coord.to_string(), "32U 294409 5628898");

    let coord = Utm::create(313_784.5, 5_427_057., 60, Designator::Northern(false)).unwrap();
    assert_eq!(coord.to_string(), "60s 313784.5 5427057");

    let coord = from_latlon(-0.1, 0., Some(31), Designator::Northern(true)).unwrap();
    assert!(coord.to_string().starts_with("31n "));

    let coord = from_latlon(40.71435, -74.00597, Some(19), Designator::Letter('T')).unwrap();
    assert!(coord.to_string().starts_with("19T 77097.0674"));
}

#[test]
fn utm_parse() {
    let coord = Utm::parse_coord("32U 294409 5628898").unwrap();
    assert_eq!(coord.zone_number(), 32);
    assert_eq!(coord.zone_letter(), Some('U'));
    assert!(coord.is_north());
    assert_eq!(coord.easting(), 294_409.);
    assert_eq!(coord.northing(), 5_628_898.);

    // Lower case n/s are hemispheres, not bands
    let coord: Utm = utm::from_str("60s 313784 5427057").unwrap();
    assert_eq!(coord.zone_letter(), None);
    assert!(!coord.is_north());

    let coord: Utm = utm::from_str("6w 466013 7190568").unwrap();
    assert_eq!(coord.zone_letter(), Some('W'));
    assert_eq!(coord.designator(), Designator::Letter('W'));

    let coord = Utm::create(576_830.25, 8_823_320.5, 33, Designator::Letter('X')).unwrap();
    assert_eq!(Utm::parse_coord(&coord.to_string()).unwrap(), coord);
}

#[test]
fn utm_parse_errors() {
    for text in ["", "U 294409 5628898", "123U 294409 5628898", "32 294409 5628898", "32UV 294409 5628898", "32U 294409", "32U abc 5628898", "32U 294409 5628898 1"] {
        let result = Utm::parse_coord(text);
        assert!(matches!(result, Err(Error::InvalidFormat(_))), "{text:?} gave {result:?}");
    }

    assert!(matches!(Utm::parse_coord("61U 294409 5628898"), Err(Error::OutOfRange(_))));
    assert!(matches!(Utm::parse_coord("32I 294409 5628898"), Err(Error::OutOfRange(_))));
    assert!(matches!(Utm::parse_coord("0U 294409 5628898"), Err(Error::OutOfRange(_))));
}

#[test]
fn utm_parse_accepts_forced_zones() {
    // West of zone 19's regular grid
    let coord = from_latlon(40.71435, -74.00597, Some(19), Designator::Letter('T')).unwrap();
    assert!(coord.easting() < 100_000.);
    assert_eq!(Utm::parse_coord(&coord.to_string()).unwrap(), coord);

    // Below the equator while flagged northern
    let coord = from_latlon(-0.1, 0., Some(31), Designator::Northern(true)).unwrap();
    assert!(coord.northing() < 0.);
    assert_eq!(Utm::parse_coord(&coord.to_string()).unwrap(), coord);

    let coord = Utm::parse_coord("32U 0 5628898").unwrap();
    assert_eq!(coord.easting(), 0.);
    assert!(Utm::create(coord.easting(), coord.northing(), 32, coord.designator()).is_err());
}

#[test]
fn latlon_display_and_parse() {
    let coord = LatLon::create(50.77535, 6.08389).unwrap();
    assert_eq!(coord.to_string(), "50.77535 6.08389");
    assert_eq!(LatLon::parse_coord(&coord.to_string()).unwrap(), coord);

    let coord: LatLon = utm::from_str("-41.28646, 174.77624").unwrap();
    assert_eq!(coord.latitude(), -41.28646);
    assert_eq!(coord.longitude(), 174.77624);

    assert!(matches!(LatLon::parse_coord("50.7"), Err(Error::InvalidFormat(_))));
    assert!(matches!(LatLon::parse_coord("north east"), Err(Error::InvalidFormat(_))));
    assert!(matches!(LatLon::parse_coord("85 0"), Err(Error::OutOfRange(_))));
}
