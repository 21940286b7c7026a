use approx::assert_relative_eq;
use geokit::polyline;
use geokit::{
    bearing_haversine, distance_haversine, distance_spherical, midpoint, to_coordinate, to_utm,
    Coordinate, EARTH_RADIUS_KM,
};
use proptest::prelude::*;

fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0_f64, -180.0..=180.0_f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn arb_utm_coordinate() -> impl Strategy<Value = Coordinate> {
    (-79.999..83.999_f64, -180.0..180.0_f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

/// Half the circumference, the distance between antipodes.
const ANTIPODAL_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn utm_roundtrip(c in arb_utm_coordinate()) {
        let back = to_coordinate(&to_utm(&c)).unwrap();
        prop_assert!((back.latitude - c.latitude).abs() < 1e-6,
            "lat {} -> {}", c.latitude, back.latitude);
        prop_assert!((back.longitude - c.longitude).abs() < 1e-6,
            "lon {} -> {}", c.longitude, back.longitude);
    }

    #[test]
    fn utm_easting_stays_near_false_easting(c in arb_utm_coordinate()) {
        let loc = to_utm(&c);
        prop_assert!((1..=60).contains(&loc.zone));
        prop_assert!(loc.easting > 160_000.0 && loc.easting < 840_000.0,
            "easting = {}", loc.easting);
        prop_assert!(loc.northing >= 0.0 && loc.northing <= 10_000_000.0,
            "northing = {}", loc.northing);
    }

    #[test]
    fn haversine_symmetric(a in arb_coordinate(), b in arb_coordinate()) {
        assert_relative_eq!(distance_haversine(&a, &b), distance_haversine(&b, &a), epsilon = 1e-9);
    }

    #[test]
    fn spherical_symmetric(a in arb_coordinate(), b in arb_coordinate()) {
        // acos is unreliable for nearly coincident points.
        prop_assume!(distance_haversine(&a, &b) > 1.0);
        assert_relative_eq!(distance_spherical(&a, &b), distance_spherical(&b, &a), epsilon = 1e-9);
    }

    #[test]
    fn haversine_zero_for_same_point(a in arb_coordinate()) {
        prop_assert_eq!(distance_haversine(&a, &a), 0.0);
    }

    #[test]
    fn bearing_in_range(a in arb_coordinate(), b in arb_coordinate()) {
        let d = distance_haversine(&a, &b);
        prop_assume!(d > 1e-3 && d < ANTIPODAL_KM - 1.0);
        let bearing = bearing_haversine(&a, &b);
        prop_assert!((0.0..360.0).contains(&bearing), "bearing = {}", bearing);
    }

    #[test]
    fn midpoint_symmetric(a in arb_coordinate(), b in arb_coordinate()) {
        prop_assume!(distance_haversine(&a, &b) < ANTIPODAL_KM - 1.0);
        // Compare positions on the sphere: the two orders may differ by 360°
        // in longitude, and longitude is meaningless at the poles.
        let m1 = midpoint(&a, &b);
        let m2 = midpoint(&b, &a);
        prop_assert!(distance_haversine(&m1, &m2) < 1e-6, "{} vs {}", m1, m2);
    }

    #[test]
    fn midpoint_is_equidistant(a in arb_coordinate(), b in arb_coordinate()) {
        prop_assume!(distance_haversine(&a, &b) < ANTIPODAL_KM - 1.0);
        let m = midpoint(&a, &b);
        let da = distance_haversine(&a, &m);
        let db = distance_haversine(&b, &m);
        prop_assert!((da - db).abs() < 1e-6, "{} vs {}", da, db);
    }

    #[test]
    fn polyline_decodes_what_it_encodes(
        points in prop::collection::vec(arb_coordinate(), 0..32)
    ) {
        let decoded = polyline::decode(&polyline::encode(&points)).unwrap();
        prop_assert_eq!(decoded.len(), points.len());
        for (got, want) in decoded.iter().zip(&points) {
            prop_assert!((got.latitude - want.latitude).abs() <= 0.5e-5 + 1e-9);
            prop_assert!((got.longitude - want.longitude).abs() <= 0.5e-5 + 1e-9);
        }
    }
}

#[test]
fn canonical_polyline() {
    let coords = geokit::decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
    let expected = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
    assert_eq!(coords.len(), expected.len());
    for (c, &(lat, lon)) in coords.iter().zip(&expected) {
        assert_relative_eq!(c.latitude, lat, epsilon = 1e-5);
        assert_relative_eq!(c.longitude, lon, epsilon = 1e-5);
    }
}

#[test]
fn empty_polyline() {
    assert!(geokit::decode_polyline("").unwrap().is_empty());
}

#[test]
fn lands_end_to_john_o_groats() {
    let d = distance_haversine(
        &Coordinate::new(50.06632, -5.71475),
        &Coordinate::new(58.64402, -3.07009),
    );
    assert!((d - 968.9).abs() < 0.5, "distance = {d}");
}

#[test]
fn stonehenge_utm() {
    let loc = to_utm(&Coordinate::new(51.178889, -1.826111));
    assert_eq!(loc.zone, 30);
    assert!(loc.hemisphere.is_north());
    assert_relative_eq!(loc.easting, 582_052.95, epsilon = 1.0);
    assert_relative_eq!(loc.northing, 5_670_373.25, epsilon = 1.0);
}
