//! IAU 1976 (Lieske) equatorial precession angles.
//!
//! The three angles describe the rotation from the mean equator and equinox of
//! J2000.0 to that of another date, as cubic series in Julian centuries `T`
//! from J2000.0 (Lieske et al. 1977, A&A 58, 1-16):
//!
//! ```text
//! zeta  = 0.6406161° T + 0.0000839° T² + 0.0000050° T³
//! z     = 0.6406161° T + 0.0003041° T² + 0.0000051° T³
//! theta = 0.5567530° T - 0.0001185° T² - 0.0000116° T³
//! ```
//!
//! These are the arcsecond coefficients (2306.2181", 0.30188", ...) divided
//! by 3600.

use crate::constants::DEG_TO_RAD;
use crate::math::cubic_no_constant;
use crate::matrix::RotationMatrix3;
use crate::utils::besselian_epoch_to_centuries;

const ZETA_DEG: [f64; 3] = [0.640_616_1, 0.000_083_9, 0.000_005_0];
const Z_DEG: [f64; 3] = [0.640_616_1, 0.000_304_1, 0.000_005_1];
const THETA_DEG: [f64; 3] = [0.556_753_0, -0.000_118_5, -0.000_011_6];

/// Equatorial precession angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

impl PrecessionAngles {
    /// Evaluates the series at `t` Julian centuries from J2000.0.
    pub fn iau1976(t: f64) -> Self {
        let series = |c: [f64; 3]| cubic_no_constant(t, c[0], c[1], c[2]) * DEG_TO_RAD;
        Self {
            zeta: series(ZETA_DEG),
            z: series(Z_DEG),
            theta: series(THETA_DEG),
        }
    }

    /// Angles for a Besselian epoch such as `1875.0`.
    pub fn from_besselian_epoch(epoch: f64) -> Self {
        Self::iau1976(besselian_epoch_to_centuries(epoch))
    }

    /// Precession matrix `P = Rz(-z) · Ry(theta) · Rz(-zeta)`, J2000.0 → date.
    ///
    /// Written out element by element; [`Self::matrix_from_rotations`] builds
    /// the same matrix from elementary rotations.
    pub fn matrix(&self) -> RotationMatrix3 {
        let (sx, cx) = libm::sincos(self.zeta);
        let (sz, cz) = libm::sincos(self.z);
        let (st, ct) = libm::sincos(self.theta);

        RotationMatrix3::from_array([
            [
                cx * ct * cz - sx * sz,
                -sx * ct * cz - cx * sz,
                -st * cz,
            ],
            [
                cx * ct * sz + sx * cz,
                -sx * ct * sz + cx * cz,
                -st * sz,
            ],
            [cx * st, -sx * st, ct],
        ])
    }

    pub fn matrix_from_rotations(&self) -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(-self.zeta);
        m.rotate_y(self.theta);
        m.rotate_z(-self.z);
        m
    }
}
