//! Transverse Mercator projection, Krüger n-series to sixth order.
//!
//! Follows Karney (2011): latitude is mapped to conformal latitude through
//! τ' (the conformal tangent), the spherical transverse Mercator is applied,
//! and the α series corrects it to the ellipsoid. The inverse runs the β
//! series and recovers geodetic latitude from τ' by Newton iteration.
//! Truncation error is well under a millimetre within a UTM zone.

use crate::coord::Hemisphere;
use crate::proj::ellipsoid::{Ellipsoid, WGS84};

/// UTM central scale factor.
pub const UTM_SCALE_FACTOR: f64 = 0.9996;
/// Added to every UTM easting so values stay positive across the zone.
pub const UTM_FALSE_EASTING: f64 = 500_000.0;
/// Added to southern-hemisphere northings so they stay positive.
pub const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

// Row k holds the coefficients of n^(k+1) .. n^6 for α_(k+1).
const ALPHA: [&[f64]; 6] = [
    &[
        1.0 / 2.0,
        -2.0 / 3.0,
        5.0 / 16.0,
        41.0 / 180.0,
        -127.0 / 288.0,
        7891.0 / 37800.0,
    ],
    &[
        13.0 / 48.0,
        -3.0 / 5.0,
        557.0 / 1440.0,
        281.0 / 630.0,
        -1983433.0 / 1935360.0,
    ],
    &[
        61.0 / 240.0,
        -103.0 / 140.0,
        15061.0 / 26880.0,
        167603.0 / 181440.0,
    ],
    &[49561.0 / 161280.0, -179.0 / 168.0, 6601661.0 / 7257600.0],
    &[34729.0 / 80640.0, -3418889.0 / 1995840.0],
    &[212378941.0 / 319334400.0],
];

// Same layout for β_(k+1).
const BETA: [&[f64]; 6] = [
    &[
        1.0 / 2.0,
        -2.0 / 3.0,
        37.0 / 96.0,
        -1.0 / 360.0,
        -81.0 / 512.0,
        96199.0 / 604800.0,
    ],
    &[
        1.0 / 48.0,
        1.0 / 15.0,
        -437.0 / 1440.0,
        46.0 / 105.0,
        -1118711.0 / 3870720.0,
    ],
    &[
        17.0 / 480.0,
        -37.0 / 840.0,
        -209.0 / 4480.0,
        5569.0 / 90720.0,
    ],
    &[4397.0 / 161280.0, -11.0 / 504.0, -830251.0 / 7257600.0],
    &[4583.0 / 161280.0, -108847.0 / 3991680.0],
    &[20648693.0 / 638668800.0],
];

/// Evaluate each row of `table` as a polynomial in `n`, scaled by n^(row+1).
fn krueger_coefficients(table: &[&[f64]; 6], n: f64) -> [f64; 6] {
    let mut out = [0.0; 6];
    let mut n_pow = 1.0;
    for (coef, row) in out.iter_mut().zip(table) {
        n_pow *= n;
        let horner = row.iter().rev().fold(0.0, |acc, &c| acc * n + c);
        *coef = n_pow * horner;
    }
    out
}

#[derive(Clone, Debug)]
pub struct TransverseMercator {
    /// Central meridian (radians)
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
    e: f64,
    e2: f64,
    /// k0 times the rectifying radius A.
    scaled_radius: f64,
    alpha: [f64; 6],
    beta: [f64; 6],
}

impl TransverseMercator {
    /// Projection with natural origin on the equator at `lon0` (radians).
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let n = ellipsoid.n();
        let n2 = n * n;
        // A = a/(1+n) * (1 + n²/4 + n⁴/64 + n⁶/256)
        let rectifying_radius =
            ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0 + n2 * n2 * n2 / 256.0);

        Self {
            lon0,
            false_easting,
            false_northing,
            e: ellipsoid.eccentricity(),
            e2: ellipsoid.e2(),
            scaled_radius: k0 * rectifying_radius,
            alpha: krueger_coefficients(&ALPHA, n),
            beta: krueger_coefficients(&BETA, n),
        }
    }

    /// WGS84 projection for one UTM zone. `zone` is not range-checked here.
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> Self {
        let lon0 = super::utm::central_meridian(zone).to_radians();
        let false_northing = match hemisphere {
            Hemisphere::North => 0.0,
            Hemisphere::South => UTM_FALSE_NORTHING_SOUTH,
        };
        Self::new(
            WGS84,
            lon0,
            UTM_SCALE_FACTOR,
            UTM_FALSE_EASTING,
            false_northing,
        )
    }

    /// Central meridian in radians.
    pub fn central_meridian(&self) -> f64 {
        self.lon0
    }

    /// τ = tan φ  ->  τ' = tan χ (conformal latitude).
    fn conformal_tangent(&self, tau: f64) -> f64 {
        let sec = tau.hypot(1.0);
        let sigma = (self.e * (self.e * tau / sec).atanh()).sinh();
        tau * sigma.hypot(1.0) - sigma * sec
    }

    /// τ' -> τ, inverting [`Self::conformal_tangent`] by Newton's method.
    fn geodetic_tangent(&self, tau_prime: f64) -> f64 {
        let one_minus_e2 = 1.0 - self.e2;
        let tol = f64::EPSILON.sqrt() * 0.1;
        let mut tau = tau_prime / one_minus_e2;

        for _ in 0..8 {
            let tau_i = self.conformal_tangent(tau);
            let dtau = (tau_prime - tau_i) / tau_i.hypot(1.0) * (1.0 + one_minus_e2 * tau * tau)
                / (one_minus_e2 * tau.hypot(1.0));
            tau += dtau;
            if dtau.abs() < tol * tau.abs().max(1.0) {
                break;
            }
        }
        tau
    }

    /// (lon, lat) in radians -> (easting, northing) in metres.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (sin_l, cos_l) = (lon - self.lon0).sin_cos();
        let tau_prime = self.conformal_tangent(lat.tan());

        let xi_p = tau_prime.atan2(cos_l);
        let eta_p = (sin_l / tau_prime.hypot(cos_l)).asinh();

        let (mut xi, mut eta) = (xi_p, eta_p);
        for (j, &a) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi += a * (k * xi_p).sin() * (k * eta_p).cosh();
            eta += a * (k * xi_p).cos() * (k * eta_p).sinh();
        }

        (
            self.false_easting + self.scaled_radius * eta,
            self.false_northing + self.scaled_radius * xi,
        )
    }

    /// (easting, northing) in metres -> (lon, lat) in radians.
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let eta = (x - self.false_easting) / self.scaled_radius;
        let xi = (y - self.false_northing) / self.scaled_radius;

        let (mut xi_p, mut eta_p) = (xi, eta);
        for (j, &b) in self.beta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi_p -= b * (k * xi).sin() * (k * eta).cosh();
            eta_p -= b * (k * xi).cos() * (k * eta).sinh();
        }

        let sinh_eta = eta_p.sinh();
        let (sin_xi, cos_xi) = xi_p.sin_cos();
        let tau_prime = sin_xi / sinh_eta.hypot(cos_xi);
        let tau = self.geodetic_tangent(tau_prime);

        (self.lon0 + sinh_eta.atan2(cos_xi), tau.atan())
    }
}
