//! Unit direction vectors in rectangular equatorial coordinates.
//!
//! `x` points at the equinox, `y` 90° east along the equator, `z` at the
//! north celestial pole.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// `(cos δ cos α, cos δ sin α, sin δ)` for `ra` = α and `dec` = δ in
    /// radians.
    ///
    /// ```
    /// use celestial_core::Vector3;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let v = Vector3::from_spherical(FRAC_PI_4, 0.0);
    /// assert!((v.x - v.y).abs() < 1e-15);
    /// assert!((v.magnitude() - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_spherical(ra: f64, dec: f64) -> Self {
        let (sin_ra, cos_ra) = libm::sincos(ra);
        let (sin_dec, cos_dec) = libm::sincos(dec);
        Self::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
