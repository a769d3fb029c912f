//! Epoch and date conversions.
//!
//! Historical catalogs quote their equinox as a Besselian epoch (B1875.0,
//! B1950.0), while modern precession series are expanded in Julian centuries
//! from J2000.0. These helpers bridge the two scales.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`besselian_epoch_to_jd`] | Besselian year | Julian Date |
//! | [`jd_to_centuries`] | two-part Julian Date | Julian centuries from J2000.0 |
//! | [`besselian_epoch_to_centuries`] | Besselian year | Julian centuries from J2000.0 |

use crate::constants::{
    B1900_EPOCH, B1900_JD, DAYS_PER_JULIAN_CENTURY, DAYS_PER_TROPICAL_YEAR, J2000_JD,
};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// The two-part split preserves precision. Typically:
/// - `jd1 = 2451545.0` (J2000.0 epoch)
/// - `jd2` = days from that epoch
///
/// ```
/// use celestial_core::utils::jd_to_centuries;
/// use celestial_core::constants::J2000_JD;
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, celestial_core::constants::DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Converts a Besselian epoch (e.g. `1875.0`) to a Julian Date.
///
/// Uses `JD = (B - 1900) * 365.242198781 + 2415020.31352`.
///
/// ```
/// use celestial_core::utils::besselian_epoch_to_jd;
///
/// assert!((besselian_epoch_to_jd(1900.0) - 2415020.31352).abs() < 1e-9);
/// ```
#[inline]
pub fn besselian_epoch_to_jd(epoch: f64) -> f64 {
    (epoch - B1900_EPOCH) * DAYS_PER_TROPICAL_YEAR + B1900_JD
}

/// Julian centuries elapsed from J2000.0 to the given Besselian epoch.
///
/// Negative for epochs before J2000.0.
#[inline]
pub fn besselian_epoch_to_centuries(epoch: f64) -> f64 {
    jd_to_centuries(besselian_epoch_to_jd(epoch), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b1950_matches_standard_jd() {
        // B1950.0 = JD 2433282.4235
        assert!((besselian_epoch_to_jd(1950.0) - 2433282.4235).abs() < 1e-3);
    }

    #[test]
    fn test_b1875_julian_date() {
        let jd = besselian_epoch_to_jd(1875.0);
        assert!((jd - (2415020.31352 - 25.0 * 365.242198781)).abs() < 1e-9);
    }

    #[test]
    fn test_b1875_centuries_before_j2000() {
        let t = besselian_epoch_to_centuries(1875.0);
        assert!(t < 0.0);
        assert!((t + 1.25).abs() < 1e-3, "t = {}", t);
    }

    #[test]
    fn test_jd_to_centuries_split() {
        let a = jd_to_centuries(J2000_JD + 36525.0, 0.0);
        let b = jd_to_centuries(J2000_JD, 36525.0);
        assert_eq!(a, 1.0);
        assert_eq!(b, 1.0);
    }
}
