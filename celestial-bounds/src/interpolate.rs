//! Segment subdivision.
//!
//! Each unique segment is sampled at evenly spaced steps in (RA, Dec) and
//! every sample is precessed to J2000.0. The step count follows an
//! approximate length that deliberately is not a great-circle distance: the
//! RA span is scaled by a blend of `cos(mean dec)` so segments near the poles
//! get fewer points without collapsing to none.
//!
//! ```text
//! ra_len = |Δra| × (cos(avg_dec) × (1 − blend) + blend) × ra_scale
//! length = √(ra_len² + Δdec²)
//! n      = max(1, ⌈length × density⌉)
//! ```
//!
//! With the default `blend = 0.5` the factor reduces to `cos/2 + 0.5`.

use crate::point::{BoundaryPoint, PointKind};
use crate::segment::BoundarySegment;
use celestial_core::angle::wrap_hours;
use celestial_core::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, HALF_DAY_HOURS, HOURS_PER_DAY};
use celestial_core::Precession;

/// Upper bound on the subdivisions of a single segment.
pub const MAX_SEGMENT_POINTS: usize = 1_000_000;

/// Empirical constants of the sampling-length estimate.
///
/// They only steer how many points a segment gets; the geometry of every
/// sample is unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityModel {
    /// Degree-equivalents per hour of RA.
    pub ra_scale: f64,
    /// Floor of the declination compression factor, in [0, 1]. `1.0` disables
    /// compression, `0.0` is a pure cosine.
    pub pole_blend: f64,
}

impl Default for DensityModel {
    fn default() -> Self {
        Self {
            ra_scale: DEGREES_PER_HOUR,
            pole_blend: 0.5,
        }
    }
}

impl DensityModel {
    /// RA compression factor at declination `dec_deg`.
    pub fn compression(&self, dec_deg: f64) -> f64 {
        libm::cos(dec_deg * DEG_TO_RAD) * (1.0 - self.pole_blend) + self.pole_blend
    }

    /// Longest length any segment between valid catalog vertices can have:
    /// a 12h RA span with no compression against a pole-to-pole Dec span.
    pub fn max_segment_length(&self) -> f64 {
        let ra_len = HALF_DAY_HOURS * self.ra_scale;
        libm::sqrt(ra_len * ra_len + 180.0 * 180.0)
    }
}

/// Signed RA difference `from → to` in hours, taking the short way around
/// the 0/24h seam.
///
/// ```
/// use celestial_bounds::interpolate::ra_delta;
///
/// assert!((ra_delta(23.9, 0.1) - 0.2).abs() < 1e-12);
/// assert!((ra_delta(0.1, 23.9) + 0.2).abs() < 1e-12);
/// assert_eq!(ra_delta(1.0, 1.5), 0.5);
/// ```
pub fn ra_delta(from: f64, to: f64) -> f64 {
    let raw = (from - to).abs();
    let magnitude = if raw > HALF_DAY_HOURS {
        HOURS_PER_DAY - raw
    } else {
        raw
    };

    let decreasing = (to < from && from - to < HALF_DAY_HOURS)
        || (to > from && to - from > HALF_DAY_HOURS);
    if decreasing {
        -magnitude
    } else {
        magnitude
    }
}

/// Approximate length of a segment in degree-like units.
pub fn segment_length(segment: &BoundarySegment, model: &DensityModel) -> f64 {
    let (p1, p2) = (segment.p1(), segment.p2());
    let avg_dec = (p1.dec() + p2.dec()) / 2.0;
    let ra_len = ra_delta(p1.ra(), p2.ra()).abs() * model.compression(avg_dec) * model.ra_scale;
    let dec_len = p1.dec() - p2.dec();
    libm::sqrt(ra_len * ra_len + dec_len * dec_len)
}

/// Number of subdivisions for a segment of `length`: at least one, at most
/// [`MAX_SEGMENT_POINTS`], and one for a non-finite length.
pub fn point_count(length: f64, density: f64) -> usize {
    let n = libm::ceil(length * density);
    if n.is_finite() && n >= 1.0 {
        n.min(MAX_SEGMENT_POINTS as f64) as usize
    } else {
        1
    }
}

/// Subdivides `segment` into `n + 1` evenly spaced points, each precessed
/// once through `precession`.
///
/// The first sample sits on `p1` and carries no constellation tags; every
/// later sample takes the tags of `p2`. Only the two endpoints are
/// [`PointKind::Original`]. The last sample uses `p2`'s coordinates verbatim,
/// so both endpoints come out identical to precessing the catalog vertices
/// directly.
pub fn interpolate(
    segment: &BoundarySegment,
    density: f64,
    model: &DensityModel,
    precession: &Precession,
) -> Vec<BoundaryPoint> {
    let (p1, p2) = (segment.p1(), segment.p2());
    let length = segment_length(segment, model);
    let n = point_count(length, density);

    if segment.is_degenerate() {
        tracing::warn!(
            ra = p1.ra(),
            dec = p1.dec(),
            "zero-length boundary segment; emitting endpoints only"
        );
    }

    let step_ra = ra_delta(p1.ra(), p2.ra()) / n as f64;
    let step_dec = (p2.dec() - p1.dec()) / n as f64;

    tracing::debug!(
        from_ra = p1.ra(),
        from_dec = p1.dec(),
        to_ra = p2.ra(),
        to_dec = p2.dec(),
        length,
        points = n + 1,
        "interpolating segment"
    );

    (0..=n)
        .map(|i| {
            let (ra, dec) = if i == n {
                (p2.ra(), p2.dec())
            } else {
                (
                    wrap_hours(p1.ra() + i as f64 * step_ra),
                    p1.dec() + i as f64 * step_dec,
                )
            };
            let (primary, secondary) = if i > 0 {
                (
                    p2.primary().map(str::to_string),
                    p2.secondary().map(str::to_string),
                )
            } else {
                (None, None)
            };
            let kind = if i == 0 || i == n {
                PointKind::Original
            } else {
                PointKind::Interpolated
            };

            let (ra, dec) = precession.to_j2000(ra, dec);
            BoundaryPoint::sample(ra, dec, primary, secondary, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::B1875_EPOCH;

    fn segment(p1: (f64, f64), p2: (f64, f64)) -> BoundarySegment {
        BoundarySegment::new(
            BoundaryPoint::original(p1.0, p1.1, "AND", None),
            BoundaryPoint::original(p2.0, p2.1, "AND", Some("PER")),
        )
    }

    fn b1875() -> Precession {
        Precession::from_besselian_epoch(B1875_EPOCH)
    }

    #[test]
    fn test_ra_delta_across_seam() {
        assert!((ra_delta(23.9, 0.1) - 0.2).abs() < 1e-12);
        assert!((ra_delta(0.1, 23.9) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_ra_delta_without_seam() {
        assert_eq!(ra_delta(1.0, 1.5), 0.5);
        assert_eq!(ra_delta(1.5, 1.0), -0.5);
        assert_eq!(ra_delta(3.0, 3.0), 0.0);
        assert_eq!(ra_delta(0.0, 12.0), 12.0);
    }

    #[test]
    fn test_segment_length_pure_declination() {
        let s = segment((5.0, 10.0), (5.0, 13.0));
        let len = segment_length(&s, &DensityModel::default());
        assert!((len - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_length_equator_and_pole_compression() {
        let model = DensityModel::default();
        let equator = segment_length(&segment((1.0, 0.0), (2.0, 0.0)), &model);
        assert!((equator - 15.0).abs() < 1e-12);

        // cos(90°)/2 + 0.5 = 0.5
        let pole = segment_length(&segment((1.0, 90.0), (2.0, 90.0)), &model);
        assert!((pole - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_segment_length_at_plus_twenty() {
        // 0.5h at +20°: 0.5 × (cos 20°/2 + 0.5) × 15
        let len = segment_length(&segment((1.0, 20.0), (1.5, 20.0)), &DensityModel::default());
        let expected = 0.5 * (libm::cos(20.0 * DEG_TO_RAD) / 2.0 + 0.5) * 15.0;
        assert!((len - expected).abs() < 1e-12);
        assert_eq!(point_count(len, 1.0), 8);
    }

    #[test]
    fn test_custom_density_model() {
        let model = DensityModel {
            ra_scale: 10.0,
            pole_blend: 1.0,
        };
        let len = segment_length(&segment((1.0, 60.0), (2.0, 60.0)), &model);
        assert!((len - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_count() {
        assert_eq!(point_count(0.6, 1.0), 1);
        assert_eq!(point_count(3.2, 1.0), 4);
        assert_eq!(point_count(3.2, 2.0), 7);
        assert_eq!(point_count(0.0, 1.0), 1);
        assert_eq!(point_count(f64::NAN, 1.0), 1);
        assert_eq!(point_count(f64::INFINITY, 1.0), 1);
    }

    #[test]
    fn test_point_count_is_capped() {
        assert_eq!(point_count(7.27, 1e300), MAX_SEGMENT_POINTS);
        assert_eq!(point_count(f64::MAX, 2.0), 1);
    }

    #[test]
    fn test_max_segment_length_bounds_real_segments() {
        let model = DensityModel::default();
        let max = model.max_segment_length();
        assert!((max - libm::sqrt(2.0) * 180.0).abs() < 1e-9);

        let widest = segment((0.0, -90.0), (12.0, 90.0));
        assert!(segment_length(&widest, &model) <= max);
    }

    #[test]
    fn test_endpoints_match_precessed_vertices() {
        let s = segment((1.0, 20.0), (1.5, 20.0));
        let p = b1875();
        let out = interpolate(&s, 1.0, &DensityModel::default(), &p);

        let n = point_count(segment_length(&s, &DensityModel::default()), 1.0);
        assert_eq!(out.len(), n + 1);

        let (ra0, dec0) = p.to_j2000(1.0, 20.0);
        let (ra1, dec1) = p.to_j2000(1.5, 20.0);
        assert_eq!((out[0].ra(), out[0].dec()), (ra0, dec0));
        let last = &out[out.len() - 1];
        assert_eq!((last.ra(), last.dec()), (ra1, dec1));
    }

    #[test]
    fn test_tags_and_kinds() {
        let s = segment((1.0, 20.0), (1.5, 20.0));
        let out = interpolate(&s, 1.0, &DensityModel::default(), &b1875());

        assert_eq!(out[0].primary(), None);
        assert_eq!(out[0].secondary(), None);
        assert!(out[0].is_original());

        for p in &out[1..out.len() - 1] {
            assert_eq!(p.primary(), Some("AND"));
            assert_eq!(p.secondary(), Some("PER"));
            assert_eq!(p.kind(), PointKind::Interpolated);
        }

        let last = &out[out.len() - 1];
        assert!(last.is_original());
        assert_eq!(last.secondary(), Some("PER"));
    }

    #[test]
    fn test_short_segment_yields_two_originals() {
        let s = segment((1.0, 20.0), (1.0, 20.5));
        let p = b1875();
        let out = interpolate(&s, 1.0, &DensityModel::default(), &p);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(BoundaryPoint::is_original));
        assert_eq!((out[0].ra(), out[0].dec()), p.to_j2000(1.0, 20.0));
        assert_eq!((out[1].ra(), out[1].dec()), p.to_j2000(1.0, 20.5));
    }

    #[test]
    fn test_degenerate_segment() {
        let s = segment((4.0, -30.0), (4.0, -30.0));
        let out = interpolate(&s, 1.0, &DensityModel::default(), &b1875());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(BoundaryPoint::is_original));
        assert_eq!(out[0].ra(), out[1].ra());
        assert_eq!(out[0].dec(), out[1].dec());
    }

    #[test]
    fn test_seam_crossing_is_continuous() {
        let s = segment((23.9, 10.0), (0.1, 10.0));
        // B2000.0 is a few hours from J2000.0, so the rotation is tiny
        let near_j2000 = Precession::from_besselian_epoch(2000.0);
        let out = interpolate(&s, 10.0, &DensityModel::default(), &near_j2000);
        assert!(out.len() > 3);

        for pair in out.windows(2) {
            let step = ra_delta(pair[0].ra(), pair[1].ra());
            assert!(step > 0.0 && step < 0.05, "jump {}", step);
            assert!(pair[1].ra() >= 0.0 && pair[1].ra() < 24.0);
        }
    }

    #[test]
    fn test_decreasing_ra_walks_backwards() {
        let s = segment((2.0, 0.0), (1.0, 0.0));
        let near_j2000 = Precession::from_besselian_epoch(2000.0);
        let out = interpolate(&s, 1.0, &DensityModel::default(), &near_j2000);
        assert_eq!(out.len(), 16);
        for pair in out.windows(2) {
            assert!(pair[1].ra() < pair[0].ra());
        }
    }
}
