//! Planar projection math.
//!
//! All distances and movement are computed on an ellipsoidal Mercator plane;
//! geographic coordinates are derived on demand and never stored as the
//! authoritative position.

use std::f64::consts::FRAC_PI_2;

use serde::Deserialize;

const R_MAJOR: f64 = 6378137.0;
const R_MINOR: f64 = 6356752.3142;

fn eccentricity() -> f64 {
    let ratio = R_MINOR / R_MAJOR;
    (1.0 - ratio * ratio).sqrt()
}

/// A point on the projection plane, in projection units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Geographic {
    pub lat: f64,
    pub lon: f64,
}

impl Projected {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Inverse projection. Longitude unscales linearly; latitude starts from
    /// the spherical approximation and refines the correction until it falls
    /// below 1e-7 radians or 15 iterations elapse. Stopping at the iteration
    /// cap without convergence is accepted silently.
    pub fn to_geographic(self) -> Geographic {
        let ecc = eccentricity();
        let half_ecc = 0.5 * ecc;
        let lon = (self.x / R_MAJOR).to_degrees();

        let ts = (-self.y / R_MAJOR).exp();
        let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
        let mut dphi = 1.0_f64;
        let mut i = 0;
        while dphi.abs() > 1e-7 && i < 15 {
            let con = ecc * phi.sin();
            dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_ecc)).atan() - phi;
            phi += dphi;
            i += 1;
        }

        Geographic {
            lat: phi.to_degrees(),
            lon,
        }
    }
}

impl Geographic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Forward projection onto the ellipsoidal Mercator plane.
    pub fn to_projected(self) -> Projected {
        let ecc = eccentricity();
        let phi = self.lat.to_radians();
        let con = ecc * phi.sin();
        let ts = (0.5 * (FRAC_PI_2 - phi)).tan() / ((1.0 - con) / (1.0 + con)).powf(0.5 * ecc);
        Projected {
            x: R_MAJOR * self.lon.to_radians(),
            y: -R_MAJOR * ts.ln(),
        }
    }
}
