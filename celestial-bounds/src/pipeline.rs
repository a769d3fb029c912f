//! End-to-end regeneration: vertices in, precessed point groups out.
//!
//! ```
//! use celestial_bounds::parse::parse_catalog;
//! use celestial_bounds::pipeline::{regenerate, RegenerateConfig};
//! use celestial_bounds::format::format_catalog;
//!
//! let points = parse_catalog(concat!(
//!     " 1.00000 +20.00000 AND\n",
//!     " 1.50000 +20.00000 AND  PER\n",
//! ))?;
//! let out = regenerate(&points, &RegenerateConfig::default())?;
//!
//! assert_eq!(out.groups.len(), 1);
//! assert_eq!(format_catalog(&out.groups).len(), out.total_points());
//! # Ok::<(), celestial_bounds::BoundsError>(())
//! ```

use crate::errors::{BoundsError, BoundsResult};
use crate::interpolate::{interpolate, DensityModel, MAX_SEGMENT_POINTS};
use crate::point::BoundaryPoint;
use crate::segment::{build_segments, BoundarySegment, BuildStats};
use celestial_core::constants::B1875_EPOCH;
use celestial_core::Precession;
use rayon::prelude::*;

/// Parameters of a regeneration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegenerateConfig {
    /// Subdivisions per unit of segment length.
    pub density: f64,
    /// Besselian epoch of the source catalog.
    pub start_epoch: f64,
    pub model: DensityModel,
}

impl Default for RegenerateConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            start_epoch: B1875_EPOCH,
            model: DensityModel::default(),
        }
    }
}

impl RegenerateConfig {
    pub fn validate(&self) -> BoundsResult<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(BoundsError::invalid_config(&format!(
                "density must be a positive number, got {}",
                self.density
            )));
        }
        if !self.start_epoch.is_finite() {
            return Err(BoundsError::invalid_config(&format!(
                "start epoch must be finite, got {}",
                self.start_epoch
            )));
        }
        if !self.model.ra_scale.is_finite() || self.model.ra_scale <= 0.0 {
            return Err(BoundsError::invalid_config(&format!(
                "RA scale must be a positive number, got {}",
                self.model.ra_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.model.pole_blend) {
            return Err(BoundsError::invalid_config(&format!(
                "pole blend must lie in [0, 1], got {}",
                self.model.pole_blend
            )));
        }
        let worst = self.model.max_segment_length() * self.density;
        if worst > MAX_SEGMENT_POINTS as f64 {
            return Err(BoundsError::invalid_config(&format!(
                "density {} allows up to {:e} points on one segment, limit is {}",
                self.density, worst, MAX_SEGMENT_POINTS
            )));
        }
        Ok(())
    }
}

/// Output of [`regenerate`].
#[derive(Debug, Clone)]
pub struct Regenerated {
    /// One group per unique segment, in discovery order.
    pub groups: Vec<Vec<BoundaryPoint>>,
    pub stats: BuildStats,
}

impl Regenerated {
    pub fn total_points(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn original_points(&self) -> usize {
        self.groups
            .iter()
            .flatten()
            .filter(|p| p.is_original())
            .count()
    }

    pub fn interpolated_points(&self) -> usize {
        self.total_points() - self.original_points()
    }
}

/// Interpolates and precesses every segment in parallel.
///
/// Group order follows `segments`. `on_done` runs once per finished segment,
/// from worker threads.
pub fn interpolate_segments<F>(
    segments: &[BoundarySegment],
    config: &RegenerateConfig,
    on_done: F,
) -> Vec<Vec<BoundaryPoint>>
where
    F: Fn() + Sync,
{
    let precession = Precession::from_besselian_epoch(config.start_epoch);

    segments
        .par_iter()
        .map(|segment| {
            let points = interpolate(segment, config.density, &config.model, &precession);
            on_done();
            points
        })
        .collect()
}

/// Builds unique segments from `points`, then interpolates and precesses
/// them.
pub fn regenerate(points: &[BoundaryPoint], config: &RegenerateConfig) -> BoundsResult<Regenerated> {
    regenerate_with_progress(points, config, || {})
}

/// [`regenerate`] with a per-segment completion callback.
pub fn regenerate_with_progress<F>(
    points: &[BoundaryPoint],
    config: &RegenerateConfig,
    on_done: F,
) -> BoundsResult<Regenerated>
where
    F: Fn() + Sync,
{
    config.validate()?;

    let set = build_segments(points);
    let stats = set.stats();
    let groups = interpolate_segments(set.segments(), config, on_done);

    tracing::info!(
        segments = groups.len(),
        points = groups.iter().map(Vec::len).sum::<usize>(),
        epoch = config.start_epoch,
        "regenerated boundary catalog"
    );

    Ok(Regenerated { groups, stats })
}
