use pyo3::prelude::*;

use crate::sphere::EARTH_RADIUS_KM;

mod polyline;
mod sphere;
mod utm;

/// Register all Python-visible functions and constants.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("EARTH_RADIUS_KM", EARTH_RADIUS_KM)?;
    m.add_function(wrap_pyfunction!(polyline::decode_polyline, m)?)?;
    m.add_function(wrap_pyfunction!(polyline::encode_polyline, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::distance_spherical, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::distance_haversine, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::bearing_haversine, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::midpoint, m)?)?;
    m.add_function(wrap_pyfunction!(utm::to_utm, m)?)?;
    m.add_function(wrap_pyfunction!(utm::to_coordinate, m)?)?;
    m.add_function(wrap_pyfunction!(utm::to_utm_points, m)?)?;
    Ok(())
}
