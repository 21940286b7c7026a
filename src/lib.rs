//! Small geodesy toolkit.
//!
//! - [`polyline`]: encoded polyline codec
//! - [`sphere`]: great-circle distance, bearing and midpoint on a spherical Earth
//! - [`proj`]: WGS84 UTM forward and inverse projection
//! - [`convert`]: flat planar vectors from UTM locations or coordinates
//!
//! Everything is a pure function of its arguments and safe to call from any
//! thread.
//!
//! ```
//! use geokit::{distance_haversine, to_utm, Coordinate};
//!
//! let lands_end = Coordinate::new(50.06632, -5.71475);
//! let john_o_groats = Coordinate::new(58.64402, -3.07009);
//! assert!((distance_haversine(&lands_end, &john_o_groats) - 968.9).abs() < 0.5);
//!
//! let utm = to_utm(&Coordinate::new(51.178889, -1.826111));
//! assert_eq!(utm.zone, 30);
//! ```

pub mod convert;
pub mod coord;
pub mod error;
pub mod polyline;
pub mod proj;
pub mod sphere;

#[cfg(feature = "python")]
mod py;

pub use convert::{to_vec, ToVec};
pub use coord::{Coordinate, Hemisphere, UtmLocation, Vec2};
pub use error::{GeoError, PolylineError, ProjError};
pub use polyline::{decode as decode_polyline, encode as encode_polyline};
pub use proj::utm::{to_coordinate, to_utm};
pub use sphere::{
    bearing_haversine, distance_haversine, distance_spherical, midpoint, EARTH_RADIUS_KM,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python extension module.
#[cfg(feature = "python")]
#[pymodule]
fn geokit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
