//! Boundary vertices and their identity.
//!
//! A [`BoundaryPoint`] is an equatorial position (RA in hours, Dec in degrees)
//! plus the constellations it borders and whether it came from the source
//! catalog or from interpolation. Points are immutable: precession produces a
//! new point via [`BoundaryPoint::with_position`] instead of editing one that
//! may already be keyed into a set.
//!
//! Vertex identity ([`VertexKey`]) is exact equality of the parsed `ra` and
//! `dec` values. It is used only for deduplication, never as a proximity test.

use serde::Serialize;

/// Where a point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Taken from the source catalog, or a segment endpoint.
    Original,
    /// Produced between two endpoints by the interpolator.
    Interpolated,
}

/// Hashable identity of a vertex: the bit patterns of its coordinates.
///
/// `-0.0` and `+0.0` are folded together so a declination written as
/// `-00.00000` names the same vertex as `+00.00000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    ra_bits: u64,
    dec_bits: u64,
}

impl VertexKey {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self {
            ra_bits: (ra + 0.0).to_bits(),
            dec_bits: (dec + 0.0).to_bits(),
        }
    }
}

/// A constellation-boundary vertex.
///
/// `PartialEq` compares every field; use [`key`](Self::key) or
/// [`same_vertex`](Self::same_vertex) for vertex identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryPoint {
    ra: f64,
    dec: f64,
    primary: Option<String>,
    secondary: Option<String>,
    kind: PointKind,
}

impl BoundaryPoint {
    /// A vertex read from the source catalog.
    pub fn original(ra: f64, dec: f64, primary: &str, secondary: Option<&str>) -> Self {
        Self {
            ra,
            dec,
            primary: Some(primary.to_string()),
            secondary: secondary.map(str::to_string),
            kind: PointKind::Original,
        }
    }

    /// A point produced by the interpolator, with whatever tags it inherits.
    pub fn sample(
        ra: f64,
        dec: f64,
        primary: Option<String>,
        secondary: Option<String>,
        kind: PointKind,
    ) -> Self {
        Self {
            ra,
            dec,
            primary,
            secondary,
            kind,
        }
    }

    /// Right ascension in hours.
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Declination in degrees.
    pub fn dec(&self) -> f64 {
        self.dec
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Second bordering constellation. Absent on the vertex that starts a new
    /// constellation traversal in the source catalog.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }

    pub fn is_original(&self) -> bool {
        self.kind == PointKind::Original
    }

    pub fn key(&self) -> VertexKey {
        VertexKey::new(self.ra, self.dec)
    }

    pub fn same_vertex(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Returns a copy of this point moved to `(ra, dec)`, keeping tags and kind.
    pub fn with_position(&self, ra: f64, dec: f64) -> Self {
        Self {
            ra,
            dec,
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_point_tags() {
        let p = BoundaryPoint::original(1.0, 20.0, "AND", Some("PER"));
        assert_eq!(p.primary(), Some("AND"));
        assert_eq!(p.secondary(), Some("PER"));
        assert!(p.is_original());

        let q = BoundaryPoint::original(1.5, 20.0, "PER", None);
        assert_eq!(q.secondary(), None);
    }

    #[test]
    fn test_same_vertex_ignores_tags() {
        let a = BoundaryPoint::original(1.0, 20.0, "AND", Some("PER"));
        let b = BoundaryPoint::original(1.0, 20.0, "PER", None);
        assert!(a.same_vertex(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_vertex_is_exact() {
        let a = BoundaryPoint::original(1.0, 20.0, "AND", None);
        let b = BoundaryPoint::original(1.0 + f64::EPSILON, 20.0, "AND", None);
        assert!(!a.same_vertex(&b));
    }

    #[test]
    fn test_signed_zero_is_one_vertex() {
        assert_eq!(VertexKey::new(3.0, -0.0), VertexKey::new(3.0, 0.0));
    }

    #[test]
    fn test_with_position_keeps_metadata() {
        let p = BoundaryPoint::sample(
            1.0,
            2.0,
            Some("ORI".into()),
            Some("TAU".into()),
            PointKind::Interpolated,
        );
        let moved = p.with_position(1.1, 2.5);
        assert_eq!(moved.ra(), 1.1);
        assert_eq!(moved.dec(), 2.5);
        assert_eq!(moved.primary(), Some("ORI"));
        assert_eq!(moved.secondary(), Some("TAU"));
        assert_eq!(moved.kind(), PointKind::Interpolated);
        assert_eq!(p.ra(), 1.0);
    }
}
