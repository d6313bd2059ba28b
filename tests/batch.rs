use float_eq::assert_float_eq;

use utm::{from_latlon, from_latlon_batch, to_latlon, to_latlon_batch, Designator, Error};

#[test]
fn batch_matches_scalar_results() {
    let lats = [0., 3., 6.];
    let lons = [0., 1., 3.4];

    let batch = from_latlon_batch(&lats, &lons, None, Designator::Unspecified).unwrap();
    assert_eq!(batch.len(), 3);

    for ((lat, lon), point) in lats.iter().zip(&lons).zip(batch.iter()) {
        let scalar = from_latlon(*lat, *lon, None, Designator::Unspecified).unwrap();
        assert_eq!(scalar.easting(), point.easting());
        assert_eq!(scalar.northing(), point.northing());
        assert_eq!(scalar.zone_number(), point.zone_number());
    }

    assert_float_eq!(batch.eastings[0], 166_021.443_179_330_32, abs <= 1e-6);
    assert_float_eq!(batch.eastings[2], 544_268.127_946_23, abs <= 1e-6);
    assert_float_eq!(batch.northings[1], 331_796.291_675_192_42, abs <= 1e-6);

    let points = to_latlon_batch(&batch.eastings, &batch.northings, 31, Designator::Northern(true), true).unwrap();
    for (point, (&easting, &northing)) in points.iter().zip(batch.eastings.iter().zip(&batch.northings)) {
        let scalar = to_latlon(easting, northing, 31, Designator::Northern(true), true).unwrap();
        assert_eq!(*point, scalar);
    }
}

#[test]
fn batch_zone_comes_from_the_first_point() {
    // Second point naturally belongs to zone 32
    let batch = from_latlon_batch(&[40., 40.], &[5., 7.], None, Designator::Unspecified).unwrap();

    assert_eq!(batch.zone_number, 31);
    assert_eq!(batch.zone_letter, Some('T'));
}

#[test]
fn mixed_hemispheres_need_forcing() {
    let lats = [-0.1, 0.1];
    let lons = [0., 0.];

    let result = from_latlon_batch(&lats, &lons, None, Designator::Unspecified);
    match result {
        Err(Error::InvalidUsage(msg)) => assert!(msg.contains("latitudes must all have the same sign")),
        other => panic!("expected a usage error, got {other:?}"),
    }

    for letter in ['N', 'M'] {
        let batch = from_latlon_batch(&lats, &lons, None, Designator::Letter(letter)).unwrap();
        assert_eq!(batch.zone_letter, Some(letter));

        let points = to_latlon_batch(&batch.eastings, &batch.northings, batch.zone_number, Designator::Letter(letter), false).unwrap();
        for (point, lat) in points.iter().zip(lats) {
            assert_float_eq!(point.latitude(), lat, abs <= 0.001);
        }
    }

    for northern in [true, false] {
        let batch = from_latlon_batch(&lats, &lons, None, Designator::Northern(northern)).unwrap();
        assert_eq!(batch.zone_letter, None);
        assert_eq!(batch.northern, northern);

        let points = to_latlon_batch(&batch.eastings, &batch.northings, batch.zone_number, Designator::Northern(northern), false).unwrap();
        for (point, lat) in points.iter().zip(lats) {
            assert_float_eq!(point.latitude(), lat, abs <= 0.001);
        }
    }
}

#[test]
fn batch_checks_every_point() {
    let result = from_latlon_batch(&[10., 84.1], &[0., 0.], None, Designator::Unspecified);
    assert!(matches!(result, Err(Error::OutOfRange(_))));

    let result = from_latlon_batch(&[10., f64::NAN], &[0., 0.], None, Designator::Unspecified);
    assert!(matches!(result, Err(Error::OutOfRange(_))));

    let result = to_latlon_batch(&[500_000., 1_000_000.], &[0., 0.], 31, Designator::Northern(true), true);
    assert!(matches!(result, Err(Error::OutOfRange(_))));

    let result = to_latlon_batch(&[500_000., 1_000_000.], &[0., 0.], 31, Designator::Northern(true), false);
    assert!(result.is_ok());

    let result = to_latlon_batch(&[500_000.], &[0.], 31, Designator::Unspecified, true);
    assert!(matches!(result, Err(Error::InvalidUsage(_))));
}

#[test]
fn batch_shapes_must_agree() {
    let result = from_latlon_batch(&[10., 20.], &[0.], None, Designator::Unspecified);
    assert!(matches!(result, Err(Error::InvalidUsage(_))));

    let result = from_latlon_batch(&[], &[], None, Designator::Unspecified);
    assert!(matches!(result, Err(Error::InvalidUsage(_))));

    let result = to_latlon_batch(&[500_000.], &[0., 1.], 31, Designator::Letter('N'), true);
    assert!(matches!(result, Err(Error::InvalidUsage(_))));
}

#[test]
fn batch_inputs_are_not_modified() {
    let eastings = [387_358.];
    let northings = [8_145_567.];

    to_latlon_batch(&eastings, &northings, 55, Designator::Letter('K'), true).unwrap();

    assert_eq!(eastings, [387_358.]);
    assert_eq!(northings, [8_145_567.]);
}
