//! Great-circle distance, bearing and midpoint on a spherical Earth.
//!
//! Every formula uses [`EARTH_RADIUS_KM`]. Coincident or antipodal inputs may
//! produce NaN, which is ordinary IEEE behaviour rather than an error.

use crate::coord::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres by the spherical law of cosines.
///
/// Loses precision for points a few metres apart, where the `acos` argument
/// rounds to 1. Prefer [`distance_haversine`] at short range.
pub fn distance_spherical(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();

    let cos_c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();
    cos_c.acos() * EARTH_RADIUS_KM
}

/// Great-circle distance in kilometres by the haversine formula.
pub fn distance_haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `a` towards `b`, in compass degrees [0, 360).
pub fn bearing_haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let d_lon = lon2 - lon1;

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = (degrees + 360.0) % 360.0;
    // Inputs below -360 are still negative after the shift.
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Point halfway along the great circle from `a` to `b`.
///
/// The longitude is `a.longitude` plus an offset and is not wrapped, so pairs
/// straddling the antimeridian can return a value outside [-180, 180].
/// Elevation of the result is zero.
pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let d_lon = lon2 - lon1;

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat_mid = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon_mid = lon1 + by.atan2(lat1.cos() + bx);

    Coordinate::new(lat_mid.to_degrees(), lon_mid.to_degrees())
}
