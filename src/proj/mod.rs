//! WGS84 Universal Transverse Mercator projection.
//!
//! [`transverse_mercator`] holds the projection math for a single central
//! meridian; [`utm`] layers the zone grid and the geographic <-> UTM
//! conversions on top of it.

pub mod ellipsoid;
pub mod transverse_mercator;
pub mod utm;
