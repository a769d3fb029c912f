//! Summary statistics for a parsed catalog.
//!
//! Used to sanity-check a catalog before or after regeneration: how many
//! records it holds, how often vertices recur (each shared corner appears
//! once per bordering constellation), and the original/interpolated split of
//! a densified catalog.

use crate::point::{BoundaryPoint, VertexKey};
use serde::Serialize;
use std::collections::HashSet;

/// Bounding box of a point set, RA in hours and Dec in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub ra_min: f64,
    pub ra_max: f64,
    pub dec_min: f64,
    pub dec_max: f64,
}

impl Extent {
    fn of(point: &BoundaryPoint) -> Self {
        Self {
            ra_min: point.ra(),
            ra_max: point.ra(),
            dec_min: point.dec(),
            dec_max: point.dec(),
        }
    }

    fn include(&mut self, point: &BoundaryPoint) {
        self.ra_min = self.ra_min.min(point.ra());
        self.ra_max = self.ra_max.max(point.ra());
        self.dec_min = self.dec_min.min(point.dec());
        self.dec_max = self.dec_max.max(point.dec());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub points: usize,
    /// Points at a vertex not seen earlier in the catalog.
    pub new_vertices: usize,
    /// Points at a vertex already seen.
    pub repeated_vertices: usize,
    pub original: usize,
    pub interpolated: usize,
    /// `None` for an empty catalog.
    pub extent: Option<Extent>,
}

pub fn analyze(points: &[BoundaryPoint]) -> AnalysisReport {
    let mut seen: HashSet<VertexKey> = HashSet::with_capacity(points.len());
    let mut new_vertices = 0;
    let mut original = 0;
    let mut extent: Option<Extent> = None;

    for point in points {
        if seen.insert(point.key()) {
            new_vertices += 1;
        }
        if point.is_original() {
            original += 1;
        }
        extent = Some(match extent {
            Some(mut e) => {
                e.include(point);
                e
            }
            None => Extent::of(point),
        });
    }

    AnalysisReport {
        points: points.len(),
        new_vertices,
        repeated_vertices: points.len() - new_vertices,
        original,
        interpolated: points.len() - original,
        extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PointKind;

    #[test]
    fn test_analyze_counts_repeats() {
        let points = vec![
            BoundaryPoint::original(1.0, 20.0, "AND", None),
            BoundaryPoint::original(1.5, 20.0, "AND", Some("PER")),
            BoundaryPoint::original(1.5, 20.0, "PER", None),
            BoundaryPoint::original(1.0, 20.0, "PER", Some("AND")),
            BoundaryPoint::original(1.0, 25.0, "PER", Some("CAS")),
        ];
        let report = analyze(&points);
        assert_eq!(report.points, 5);
        assert_eq!(report.new_vertices, 3);
        assert_eq!(report.repeated_vertices, 2);
        assert_eq!(report.original, 5);
        assert_eq!(report.interpolated, 0);
    }

    #[test]
    fn test_analyze_kinds_and_extent() {
        let points = vec![
            BoundaryPoint::sample(0.5, -10.0, Some("ORI".into()), None, PointKind::Original),
            BoundaryPoint::sample(0.6, -9.0, Some("ORI".into()), None, PointKind::Interpolated),
            BoundaryPoint::sample(23.9, 4.0, Some("ORI".into()), None, PointKind::Original),
        ];
        let report = analyze(&points);
        assert_eq!(report.original, 2);
        assert_eq!(report.interpolated, 1);
        assert_eq!(
            report.extent,
            Some(Extent {
                ra_min: 0.5,
                ra_max: 23.9,
                dec_min: -10.0,
                dec_max: 4.0,
            })
        );
    }

    #[test]
    fn test_analyze_empty() {
        let report = analyze(&[]);
        assert_eq!(report.points, 0);
        assert_eq!(report.extent, None);
    }

    #[test]
    fn test_report_serializes() {
        let report = analyze(&[BoundaryPoint::original(2.0, 3.0, "LEO", None)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["points"], 1);
        assert_eq!(json["new_vertices"], 1);
        assert_eq!(json["extent"]["ra_max"], 2.0);
    }
}
