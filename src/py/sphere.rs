//! PyO3 bindings for spherical distance, bearing and midpoint.
//!
//! Arguments are plain floats in degrees: (lat1, lon1, lat2, lon2).

use pyo3::prelude::*;

use crate::coord::Coordinate;
use crate::sphere;

/// Law-of-cosines great-circle distance in kilometres.
#[pyfunction]
pub fn distance_spherical(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    sphere::distance_spherical(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

/// Haversine great-circle distance in kilometres.
#[pyfunction]
pub fn distance_haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    sphere::distance_haversine(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

/// Initial bearing in degrees, [0, 360).
#[pyfunction]
pub fn bearing_haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    sphere::bearing_haversine(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

/// Great-circle midpoint as (latitude, longitude).
#[pyfunction]
pub fn midpoint(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let m = sphere::midpoint(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2));
    (m.latitude, m.longitude)
}
