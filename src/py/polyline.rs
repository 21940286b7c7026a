//! PyO3 bindings for the encoded polyline codec.

use ndarray::Array2;
use numpy::{PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::coord::Coordinate;
use crate::polyline;

/// Decode an encoded polyline.
///
/// Args:
///     encoded: The encoded polyline string.
///     precision: Decimal digits the values were scaled by (5, or 6 for polyline6).
///
/// Returns:
///     (N, 2) float64 array of (latitude, longitude) rows in degrees.
#[pyfunction]
#[pyo3(signature = (encoded, precision=5))]
pub fn decode_polyline<'py>(
    py: Python<'py>,
    encoded: &str,
    precision: u32,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let coords = polyline::decode_with_precision(encoded, precision)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let flat: Vec<f64> = coords
        .iter()
        .flat_map(|c| [c.latitude, c.longitude])
        .collect();
    let array = Array2::from_shape_vec((coords.len(), 2), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyArray2::from_owned_array(py, array))
}

/// Encode parallel latitude/longitude arrays (degrees) as a polyline string.
#[pyfunction]
#[pyo3(signature = (lats, lons, precision=5))]
pub fn encode_polyline(
    lats: PyReadonlyArray1<'_, f64>,
    lons: PyReadonlyArray1<'_, f64>,
    precision: u32,
) -> PyResult<String> {
    let lats = lats.as_array();
    let lons = lons.as_array();
    if lats.len() != lons.len() {
        return Err(PyValueError::new_err(format!(
            "lats and lons must have same length, got {} and {}",
            lats.len(),
            lons.len()
        )));
    }

    let coords: Vec<Coordinate> = lats
        .iter()
        .zip(lons.iter())
        .map(|(&lat, &lon)| Coordinate::new(lat, lon))
        .collect();

    Ok(polyline::encode_with_precision(&coords, precision))
}
