//! Flatten UTM locations and geographic coordinates into planar vectors.
//!
//! Zone and hemisphere are discarded, so vectors from different zones must
//! not be mixed.

use crate::coord::{Coordinate, UtmLocation, Vec2};
use crate::proj::utm::to_utm;

/// Anything with a planar (easting, northing) position in metres.
pub trait ToVec {
    fn to_vec(&self) -> Vec2;
}

impl ToVec for UtmLocation {
    #[inline]
    fn to_vec(&self) -> Vec2 {
        Vec2::new(self.easting, self.northing)
    }
}

/// Goes through [`to_utm`], so the vector is in the coordinate's own zone.
impl ToVec for Coordinate {
    #[inline]
    fn to_vec(&self) -> Vec2 {
        to_utm(self).to_vec()
    }
}

pub fn to_vec<T: ToVec + ?Sized>(value: &T) -> Vec2 {
    value.to_vec()
}
