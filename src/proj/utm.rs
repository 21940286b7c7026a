//! UTM zone grid and the geographic <-> UTM conversions.
//!
//! Zones are plain six-degree longitude bands; the Norway and Svalbard
//! exceptions of the official grid are not applied.

use crate::coord::{Coordinate, Hemisphere, UtmLocation};
use crate::error::ProjError;
use crate::proj::transverse_mercator::TransverseMercator;

pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 60;

/// MGRS latitude bands from 80°S northwards, eight degrees each ('X' spans 12).
const BANDS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// Zone number for a longitude in degrees.
///
/// `floor((lon + 180) / 6) + 1`, clamped into 1..=60 so that 180° lands in
/// zone 60 rather than a nonexistent zone 61.
pub fn zone_number(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / 6.0).floor() as i64 + 1;
    zone.clamp(MIN_ZONE as i64, MAX_ZONE as i64) as u8
}

/// Central meridian of `zone` in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Latitude band letter, or `None` outside the UTM range of -80..=84 degrees.
pub fn latitude_band(latitude: f64) -> Option<char> {
    if !(-80.0..=84.0).contains(&latitude) {
        return None;
    }
    let index = (((latitude + 80.0) / 8.0).floor() as usize).min(BANDS.len() - 1);
    Some(BANDS[index] as char)
}

/// Project a WGS84 coordinate into its UTM zone.
///
/// The zone comes from the longitude and the hemisphere from the sign of the
/// latitude. Accuracy degrades towards the poles but no error is raised.
pub fn to_utm(coordinate: &Coordinate) -> UtmLocation {
    let zone = zone_number(coordinate.longitude);
    let hemisphere = Hemisphere::from_latitude(coordinate.latitude);
    let (lat, lon) = coordinate.to_radians();

    let (easting, northing) = TransverseMercator::utm(zone, hemisphere).project(lon, lat);

    UtmLocation::new(easting, northing, zone, hemisphere)
        .with_elevation(coordinate.elevation)
        .with_band(latitude_band(coordinate.latitude))
}

/// Inverse-project a UTM location back to a WGS84 coordinate.
///
/// Fails only when the zone is outside 1..=60.
pub fn to_coordinate(location: &UtmLocation) -> Result<Coordinate, ProjError> {
    if !(MIN_ZONE..=MAX_ZONE).contains(&location.zone) {
        return Err(ProjError::InvalidZone(location.zone));
    }

    let tm = TransverseMercator::utm(location.zone, location.hemisphere);
    let (lon, lat) = tm.unproject(location.easting, location.northing);

    Ok(Coordinate::with_elevation(
        lat.to_degrees(),
        lon.to_degrees(),
        location.elevation,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stonehenge() {
        let loc = to_utm(&Coordinate::new(51.178889, -1.826111));
        assert_eq!(loc.zone, 30);
        assert_eq!(loc.hemisphere, Hemisphere::North);
        assert_eq!(loc.band(), Some('U'));
        assert_relative_eq!(loc.easting, 582_052.95, epsilon = 1.0);
        assert_relative_eq!(loc.northing, 5_670_373.25, epsilon = 1.0);
    }

    #[test]
    fn test_southern_false_northing() {
        // On the central meridian of zone 31 at 45°S.
        let loc = to_utm(&Coordinate::new(-45.0, 3.0));
        assert_eq!(loc.zone, 31);
        assert_eq!(loc.hemisphere, Hemisphere::South);
        assert_relative_eq!(loc.easting, 500_000.0, epsilon = 1e-6);
        assert_relative_eq!(loc.northing, 5_017_049.600, epsilon = 0.01);
    }

    #[test]
    fn test_roundtrip_keeps_elevation() {
        let c = Coordinate::with_elevation(-33.8568, 151.2153, 42.5);
        let loc = to_utm(&c);
        assert_eq!(loc.elevation, 42.5);
        let back = to_coordinate(&loc).unwrap();
        assert_relative_eq!(back.latitude, c.latitude, epsilon = 1e-9);
        assert_relative_eq!(back.longitude, c.longitude, epsilon = 1e-9);
        assert_eq!(back.elevation, 42.5);
    }

    #[test]
    fn test_roundtrip_zone_edges() {
        for &(lat, lon) in &[(10.0, -180.0), (-10.0, 179.999), (60.0, 6.0), (83.9, -0.001)] {
            let back = to_coordinate(&to_utm(&Coordinate::new(lat, lon))).unwrap();
            assert_relative_eq!(back.latitude, lat, epsilon = 1e-8);
            assert_relative_eq!(back.longitude, lon, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_zone_number() {
        assert_eq!(zone_number(-180.0), 1);
        assert_eq!(zone_number(-174.0), 2);
        assert_eq!(zone_number(-1.826111), 30);
        assert_eq!(zone_number(0.0), 31);
        assert_eq!(zone_number(179.9), 60);
        assert_eq!(zone_number(180.0), 60);
        // No Norway/Svalbard remapping: Bergen is 31, not 32.
        assert_eq!(zone_number(5.32), 31);
        assert_eq!(zone_number(9.0), 32);
    }

    #[test]
    fn test_central_meridian() {
        assert_relative_eq!(central_meridian(1), -177.0);
        assert_relative_eq!(central_meridian(30), -3.0);
        assert_relative_eq!(central_meridian(33), 15.0);
        assert_relative_eq!(central_meridian(60), 177.0);
    }

    #[test]
    fn test_latitude_band() {
        assert_eq!(latitude_band(-80.0), Some('C'));
        assert_eq!(latitude_band(-0.1), Some('M'));
        assert_eq!(latitude_band(0.0), Some('N'));
        assert_eq!(latitude_band(71.9), Some('W'));
        assert_eq!(latitude_band(72.0), Some('X'));
        assert_eq!(latitude_band(84.0), Some('X'));
        assert_eq!(latitude_band(84.1), None);
        assert_eq!(latitude_band(-80.5), None);
        assert_eq!(latitude_band(f64::NAN), None);
    }

    #[test]
    fn test_invalid_zone() {
        let loc = UtmLocation::new(500_000.0, 0.0, 0, Hemisphere::North);
        assert_eq!(to_coordinate(&loc), Err(ProjError::InvalidZone(0)));
        let loc = UtmLocation::new(500_000.0, 0.0, 61, Hemisphere::North);
        assert_eq!(to_coordinate(&loc), Err(ProjError::InvalidZone(61)));
    }

    #[test]
    fn test_caller_built_location_has_no_band() {
        let loc = UtmLocation::new(582_052.95, 5_670_373.25, 30, Hemisphere::North);
        assert_eq!(loc.band(), None);
        let c = to_coordinate(&loc).unwrap();
        assert_relative_eq!(c.latitude, 51.178889, epsilon = 1e-4);
        assert_relative_eq!(c.longitude, -1.826111, epsilon = 1e-4);
    }
}
