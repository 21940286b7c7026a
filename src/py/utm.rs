//! PyO3 bindings for UTM projection, single points and numpy batches.

use ndarray::Array1;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::coord::{Coordinate, Hemisphere, UtmLocation};
use crate::proj::utm;

/// Project a WGS84 point to UTM.
///
/// Returns:
///     Tuple of (easting, northing, zone, is_north).
#[pyfunction]
pub fn to_utm(lat: f64, lon: f64) -> (f64, f64, u8, bool) {
    let loc = utm::to_utm(&Coordinate::new(lat, lon));
    (loc.easting, loc.northing, loc.zone, loc.hemisphere.is_north())
}

/// Inverse-project a UTM point to (latitude, longitude) in degrees.
///
/// Raises ValueError for a zone outside 1..=60.
#[pyfunction]
#[pyo3(signature = (easting, northing, zone, is_north=true))]
pub fn to_coordinate(easting: f64, northing: f64, zone: u8, is_north: bool) -> PyResult<(f64, f64)> {
    let hemisphere = if is_north {
        Hemisphere::North
    } else {
        Hemisphere::South
    };
    let c = utm::to_coordinate(&UtmLocation::new(easting, northing, zone, hemisphere))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((c.latitude, c.longitude))
}

/// Project arrays of WGS84 points, each into its own zone.
///
/// Args:
///     lats: 1D array of latitudes in degrees.
///     lons: 1D array of longitudes in degrees.
///
/// Returns:
///     Tuple of (easting, northing, zone) arrays.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn to_utm_points<'py>(
    py: Python<'py>,
    lats: PyReadonlyArray1<'py, f64>,
    lons: PyReadonlyArray1<'py, f64>,
) -> PyResult<(
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<u8>>,
)> {
    let lat_view = lats.as_array();
    let lon_view = lons.as_array();
    if lat_view.len() != lon_view.len() {
        return Err(PyValueError::new_err(format!(
            "lats and lons must have same length, got {} and {}",
            lat_view.len(),
            lon_view.len()
        )));
    }

    let coords: Vec<Coordinate> = lat_view
        .iter()
        .zip(lon_view.iter())
        .map(|(&lat, &lon)| Coordinate::new(lat, lon))
        .collect();

    let locations = py.allow_threads(move || -> Vec<UtmLocation> {
        coords.iter().map(utm::to_utm).collect()
    });

    let eastings: Array1<f64> = locations.iter().map(|l| l.easting).collect();
    let northings: Array1<f64> = locations.iter().map(|l| l.northing).collect();
    let zones: Array1<u8> = locations.iter().map(|l| l.zone).collect();

    Ok((
        PyArray1::from_owned_array(py, eastings),
        PyArray1::from_owned_array(py, northings),
        PyArray1::from_owned_array(py, zones),
    ))
}
