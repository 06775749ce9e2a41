use crate::countries::errors::CountryError;
use crate::countries::tests::{fixture_table, three_country_table};
use crate::geodesy::models::{Bearing, LatLng};
use crate::geodesy::{distance_and_bearing, great_circle_distance, measure};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_known_distances() {
    assert_close(
        great_circle_distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 90.0)),
        10018.696,
    );
    assert_close(
        great_circle_distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)),
        111.319,
    );
    // Albania -> Chad.
    assert_close(
        great_circle_distance(LatLng::new(41.0, 20.0), LatLng::new(15.0, 19.0)),
        2895.905,
    );
}

#[test]
fn test_distance_is_symmetric() {
    let table = fixture_table();
    for a in table.names() {
        for b in table.names() {
            let there = distance_and_bearing(&table, a, b).unwrap();
            let back = distance_and_bearing(&table, b, a).unwrap();
            assert!((there.distance_km - back.distance_km).abs() < 1e-9);
        }
    }
}

#[test]
fn test_bearing_is_not_symmetric() {
    let table = three_country_table();

    assert_eq!(
        distance_and_bearing(&table, "A", "B").unwrap().bearing,
        Bearing::East
    );
    assert_eq!(
        distance_and_bearing(&table, "B", "A").unwrap().bearing,
        Bearing::West
    );
}

#[test]
fn test_same_country_is_target_reached() {
    let table = fixture_table();
    for name in table.names() {
        let measurement = distance_and_bearing(&table, name, &name.to_uppercase()).unwrap();
        assert_eq!(measurement.distance_km, 0.0);
        assert_eq!(measurement.bearing, Bearing::TargetReached);
        assert_eq!(measurement.bearing.symbol(), "✓");
    }
}

#[test]
fn test_three_country_scenario() {
    let table = three_country_table();

    let a_to_b = distance_and_bearing(&table, "a", "b").unwrap();
    assert!(a_to_b.distance_km > 0.0);
    assert_eq!(a_to_b.bearing, Bearing::East);

    let a_to_c = distance_and_bearing(&table, "A", "C").unwrap();
    assert_eq!(a_to_c.bearing, Bearing::North);

    let b_to_c = distance_and_bearing(&table, "B", "C").unwrap();
    assert_eq!(b_to_c.bearing, Bearing::NorthWest);
}

#[test]
fn test_unknown_country_is_reported() {
    let table = three_country_table();

    let err = distance_and_bearing(&table, "A", "Atlantis").unwrap_err();
    assert!(matches!(err, CountryError::UnknownCountry(ref name) if name == "Atlantis"));

    let err = distance_and_bearing(&table, "Lemuria", "A").unwrap_err();
    assert!(matches!(err, CountryError::UnknownCountry(ref name) if name == "Lemuria"));
}

#[test]
fn test_exact_compass_angles() {
    let expected = [
        (0.0, Bearing::East),
        (45.0, Bearing::NorthEast),
        (90.0, Bearing::North),
        (135.0, Bearing::NorthWest),
        (180.0, Bearing::West),
        (-180.0, Bearing::West),
        (225.0, Bearing::SouthWest),
        (-135.0, Bearing::SouthWest),
        (270.0, Bearing::South),
        (-90.0, Bearing::South),
        (315.0, Bearing::SouthEast),
        (-45.0, Bearing::SouthEast),
    ];
    for (angle, bearing) in expected {
        assert_eq!(Bearing::from_degrees(angle), bearing, "angle {angle}");
    }
}

#[test]
fn test_half_way_angles_round_to_even_bucket() {
    assert_eq!(Bearing::from_degrees(22.5), Bearing::East);
    assert_eq!(Bearing::from_degrees(-22.5), Bearing::East);
    assert_eq!(Bearing::from_degrees(67.5), Bearing::North);
    assert_eq!(Bearing::from_degrees(112.5), Bearing::North);
    assert_eq!(Bearing::from_degrees(157.5), Bearing::West);
    assert_eq!(Bearing::from_degrees(-67.5), Bearing::South);
    assert_eq!(Bearing::from_degrees(22.6), Bearing::NorthEast);
    assert_eq!(Bearing::from_degrees(22.4), Bearing::East);
}

#[test]
fn test_measure_points_from_origin_to_destination() {
    let origin = LatLng::new(0.0, 0.0);

    assert_eq!(measure(origin, LatLng::new(-1.0, 0.0)).bearing, Bearing::South);
    assert_eq!(measure(origin, LatLng::new(-1.0, -1.0)).bearing, Bearing::SouthWest);
    assert_eq!(measure(origin, LatLng::new(1.0, -1.0)).bearing, Bearing::NorthWest);
    assert_eq!(measure(origin, LatLng::new(0.0, -5.0)).bearing, Bearing::West);
}

#[test]
fn test_bearing_codes_follow_the_buckets() {
    for angle in [0.0, 45.0, 90.0, 135.0, 180.0, -135.0, -90.0, -45.0] {
        let bearing = Bearing::from_degrees(angle);
        assert_eq!(Bearing::from_code(bearing.code()), Some(bearing));
    }
    assert_eq!(Bearing::NorthWest.code(), 3);
    assert_eq!(Bearing::TargetReached.code(), 8);
    assert_eq!(Bearing::from_code(9), None);
}
