//! Angle normalization for equatorial coordinates.
//!
//! Catalog coordinates come in mixed units, so each quantity gets its own range:
//!
//! | Quantity | Unit | Range | Function |
//! |----------|------|-------|----------|
//! | Right Ascension | hours | [0, 24) | [`wrap_hours`] |
//! | Declination | degrees | [-90, +90] | [`clamp_dec_degrees`] |
//!
//! # Wrapping vs Clamping
//!
//! **Wrapping** preserves the direction on the sphere. An RA of 25h is the same
//! hour circle as 1h, so `wrap_hours(25.0)` returns 1.0.
//!
//! **Clamping** enforces physical limits. Declination cannot exceed +/-90 degrees
//! because you cannot go "past" the pole; values that land outside only through
//! floating-point rounding (e.g. `asin` of 1.0000000000000002) saturate instead.
//!
//! # Algorithm Notes
//!
//! [`wrap_hours`] uses `libm::fmod` (via [`crate::math::fmod`]). Like `%`,
//! it keeps the sign of the dividend, so a negative remainder is shifted up by
//! one full turn afterwards.
//!
//! ```
//! use celestial_core::angle::{wrap_hours, clamp_dec_degrees};
//!
//! assert_eq!(wrap_hours(-0.5), 23.5);
//! assert_eq!(wrap_hours(24.0), 0.0);
//! assert_eq!(clamp_dec_degrees(90.0000001), 90.0);
//! ```

use crate::constants::HOURS_PER_DAY;
use crate::math::fmod;

/// Wraps a right ascension in hours to [0, 24).
///
/// A tiny negative input such as `-1e-17` shifts to a value that rounds to
/// exactly 24.0; that case is folded back to 0.0 so the upper bound stays open.
/// Negative zero comes back as positive zero so it never prints as `-0.00000`.
///
/// # Examples
///
/// ```
/// use celestial_core::angle::wrap_hours;
///
/// assert_eq!(wrap_hours(25.0), 1.0);
/// assert_eq!(wrap_hours(-1.0), 23.0);
/// assert_eq!(wrap_hours(-1e-17), 0.0);
/// ```
#[inline]
pub fn wrap_hours(hours: f64) -> f64 {
    let w = fmod(hours, HOURS_PER_DAY);
    let w = if w < 0.0 { w + HOURS_PER_DAY } else { w };
    if w >= HOURS_PER_DAY {
        0.0
    } else {
        // -0.0 + 0.0 == +0.0
        w + 0.0
    }
}

/// Clamps a declination in degrees to [-90, +90].
#[inline]
pub fn clamp_dec_degrees(deg: f64) -> f64 {
    deg.clamp(-90.0, 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hours_in_range_unchanged() {
        assert_eq!(wrap_hours(0.0), 0.0);
        assert_eq!(wrap_hours(12.5), 12.5);
        assert_eq!(wrap_hours(23.99999), 23.99999);
    }

    #[test]
    fn test_wrap_hours_overflow_and_negative() {
        assert_eq!(wrap_hours(24.0), 0.0);
        assert!((wrap_hours(24.1) - 0.1).abs() < 1e-12);
        assert!((wrap_hours(-0.1) - 23.9).abs() < 1e-12);
        assert!((wrap_hours(-48.5) - 23.5).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_hours_never_returns_24() {
        for x in [-1e-17, -1e-300, -f64::MIN_POSITIVE, -0.0] {
            let w = wrap_hours(x);
            assert!((0.0..24.0).contains(&w), "wrap_hours({}) = {}", x, w);
            assert!(w.is_sign_positive(), "wrap_hours({}) = {}", x, w);
        }
    }

    #[test]
    fn test_clamp_dec_degrees() {
        assert_eq!(clamp_dec_degrees(45.0), 45.0);
        assert_eq!(clamp_dec_degrees(90.000000000001), 90.0);
        assert_eq!(clamp_dec_degrees(-90.5), -90.0);
    }
}
