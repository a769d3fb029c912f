#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Cubic polynomial `c1*t + c2*t^2 + c3*t^3` in Horner form (no constant term).
#[inline]
pub fn cubic_no_constant(t: f64, c1: f64, c2: f64, c3: f64) -> f64 {
    t * (c1 + t * (c2 + t * c3))
}
