//! Classical precession between a historical equinox and J2000.0.
//!
//! Historical catalogs (the 1930 IAU constellation boundaries among them) are
//! referred to the mean equator and equinox of a Besselian epoch such as
//! B1875.0. Bringing them to J2000.0 is a single rotation of the equatorial
//! frame, parameterized by the three IAU 1976 (Lieske) equatorial precession
//! angles zeta, z and theta.
//!
//! # Pipeline
//!
//! ```text
//! Besselian epoch ──► Julian Date ──► T (centuries from J2000.0)
//!                                      │
//!                                      ▼
//!                     zeta(T), z(T), theta(T)  (cubic series, degrees)
//!                                      │
//!                                      ▼
//!             P = Rz(-z) · Ry(theta) · Rz(-zeta)   (J2000.0 → epoch)
//!                                      │
//!                                      ▼
//!                   s = Pᵀ · v(α, δ)   (epoch → J2000.0)
//! ```
//!
//! # Example
//!
//! ```
//! use celestial_core::precession::{precess_to_j2000, Precession};
//!
//! // A B1875.0 position at 1h, +10°
//! let (ra, dec) = precess_to_j2000(1.0, 10.0, 1875.0);
//! assert!((ra - 1.109036).abs() < 1e-5);
//! assert!((dec - 10.669738).abs() < 1e-5);
//!
//! // Build once, apply to many points
//! let engine = Precession::from_besselian_epoch(1875.0);
//! assert_eq!(engine.to_j2000(1.0, 10.0), (ra, dec));
//! ```
//!
//! # Accuracy
//!
//! The Lieske series is adequate to well under an arcsecond over a few
//! centuries around J2000.0, which is far finer than the 1e-5 hour / degree
//! resolution of boundary catalogs.

pub mod lieske;

pub use lieske::PrecessionAngles;

use crate::angle::{clamp_dec_degrees, wrap_hours};
use crate::constants::{DEG_TO_RAD, HOURS_TO_RAD, RAD_TO_DEG, RAD_TO_HOURS};
use crate::matrix::{RotationMatrix3, Vector3};

/// Precession between a fixed Besselian epoch and J2000.0.
///
/// Holds the rotation matrix for one epoch so a whole catalog can be
/// transformed without recomputing the angle series per point. The value is
/// immutable, `Copy`, and safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precession {
    epoch: f64,
    /// Mean equator and equinox of J2000.0 → mean equator and equinox of `epoch`.
    matrix: RotationMatrix3,
}

impl Precession {
    /// Builds the precession for a Besselian epoch such as `1875.0`.
    pub fn from_besselian_epoch(epoch: f64) -> Self {
        let angles = PrecessionAngles::from_besselian_epoch(epoch);
        Self {
            epoch,
            matrix: angles.matrix(),
        }
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Rotation from J2000.0 to the source epoch.
    pub fn matrix(&self) -> &RotationMatrix3 {
        &self.matrix
    }

    /// Precesses `(ra hours, dec degrees)` from the source epoch to J2000.0.
    ///
    /// Returns right ascension in [0, 24) hours and declination in [-90, 90]
    /// degrees.
    pub fn to_j2000(&self, ra_hours: f64, dec_deg: f64) -> (f64, f64) {
        rotate_equatorial(&self.matrix.transpose(), ra_hours, dec_deg)
    }

    /// Precesses `(ra hours, dec degrees)` from J2000.0 back to the source epoch.
    pub fn from_j2000(&self, ra_hours: f64, dec_deg: f64) -> (f64, f64) {
        rotate_equatorial(&self.matrix, ra_hours, dec_deg)
    }
}

/// Precesses a single position from Besselian `start_epoch` to J2000.0.
pub fn precess_to_j2000(ra_hours: f64, dec_deg: f64, start_epoch: f64) -> (f64, f64) {
    Precession::from_besselian_epoch(start_epoch).to_j2000(ra_hours, dec_deg)
}

/// Precesses a single J2000.0 position back to Besselian `epoch`.
pub fn precess_from_j2000(ra_hours: f64, dec_deg: f64, epoch: f64) -> (f64, f64) {
    Precession::from_besselian_epoch(epoch).from_j2000(ra_hours, dec_deg)
}

fn rotate_equatorial(matrix: &RotationMatrix3, ra_hours: f64, dec_deg: f64) -> (f64, f64) {
    let v = Vector3::from_spherical(ra_hours * HOURS_TO_RAD, dec_deg * DEG_TO_RAD);
    let s = matrix * v;

    let ra = wrap_hours(libm::atan2(s.y, s.x) * RAD_TO_HOURS);
    // |s.z| can exceed 1 by an ulp after the rotation
    let dec = clamp_dec_degrees(libm::asin(s.z.clamp(-1.0, 1.0)) * RAD_TO_DEG);

    (ra, dec)
}
