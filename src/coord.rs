//! Plain value types shared by every module: geographic coordinates, UTM
//! locations and the planar vector produced by the conversion facade.

/// A geographic point on the WGS84 datum.
///
/// Latitude and longitude are decimal degrees; elevation is in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    #[inline]
    pub const fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// (latitude, longitude) in radians.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Which side of the equator a UTM northing is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// The equator itself belongs to the northern hemisphere.
    #[inline]
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    #[inline]
    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }
}

/// A point in a Universal Transverse Mercator grid.
///
/// Easting and northing only mean something together with the zone and
/// hemisphere that produced them. Never compare or combine locations from
/// different zones without re-projecting first.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmLocation {
    /// Metres, including the 500 km false easting.
    pub easting: f64,
    /// Metres, including the 10 000 km false northing in the south.
    pub northing: f64,
    /// Zone number, 1..=60.
    pub zone: u8,
    pub hemisphere: Hemisphere,
    /// Carried through unchanged from the source coordinate.
    pub elevation: f64,
    band: Option<char>,
}

impl UtmLocation {
    pub fn new(easting: f64, northing: f64, zone: u8, hemisphere: Hemisphere) -> Self {
        Self {
            easting,
            northing,
            zone,
            hemisphere,
            elevation: 0.0,
            band: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub(crate) fn with_band(mut self, band: Option<char>) -> Self {
        self.band = band;
        self
    }

    /// MGRS latitude band letter, known only for locations produced by
    /// [`to_utm`](crate::proj::utm::to_utm) inside the -80..=84 degree band.
    pub fn band(&self) -> Option<char> {
        self.band
    }
}

impl std::fmt::Display for UtmLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let designator = match (self.band, self.hemisphere) {
            (Some(band), _) => band,
            (None, Hemisphere::North) => 'N',
            (None, Hemisphere::South) => 'S',
        };
        write!(
            f,
            "{}{} {:.3}E {:.3}N",
            self.zone, designator, self.easting, self.northing
        )
    }
}

/// A flat planar point in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}
