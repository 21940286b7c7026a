/// Reference ellipsoid given by its semi-major axis and flattening.
///
/// Derived quantities are computed on demand; they are cheap and every caller
/// that needs them in a loop caches them itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Semi-minor axis: a * (1 - f)
    pub const fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// First eccentricity squared: 2f - f^2
    pub const fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// First eccentricity.
    pub fn eccentricity(&self) -> f64 {
        self.e2().sqrt()
    }

    /// Third flattening: f / (2 - f)
    pub const fn n(&self) -> f64 {
        self.f / (2.0 - self.f)
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
