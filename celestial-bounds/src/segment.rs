//! Reconstruction of boundary edges from the ordered vertex list.
//!
//! The source catalog walks each constellation's outline in turn. Consecutive
//! vertices form an edge, except where the second vertex has no secondary
//! constellation: that vertex opens the next traversal, so the pair straddles
//! a gap rather than a border.
//!
//! Every border between two constellations is walked twice, once from each
//! side and usually in opposite directions. Edges are therefore compared as
//! unordered pairs, and the second sighting is counted as a repeat and dropped.
//!
//! ```
//! use celestial_bounds::point::BoundaryPoint;
//! use celestial_bounds::segment::build_segments;
//!
//! let points = vec![
//!     BoundaryPoint::original(1.0, 20.0, "AND", None),
//!     BoundaryPoint::original(1.5, 20.0, "AND", Some("PER")),
//!     BoundaryPoint::original(1.5, 20.0, "PER", None),
//!     BoundaryPoint::original(1.0, 20.0, "PER", Some("AND")),
//! ];
//!
//! let set = build_segments(&points);
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.stats().new, 1);
//! assert_eq!(set.stats().repeats, 1);
//! ```

use crate::point::{BoundaryPoint, VertexKey};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// An undirected edge between two catalog vertices.
///
/// `p1` and `p2` keep the order in which the edge was first walked, since
/// interpolation runs from `p1` to `p2` and takes its tags from `p2`.
/// Equality and hashing ignore that order.
#[derive(Debug, Clone)]
pub struct BoundarySegment {
    p1: BoundaryPoint,
    p2: BoundaryPoint,
}

/// Order-independent identity of a segment: its two vertex keys, sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey(VertexKey, VertexKey);

impl BoundarySegment {
    pub fn new(p1: BoundaryPoint, p2: BoundaryPoint) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> &BoundaryPoint {
        &self.p1
    }

    pub fn p2(&self) -> &BoundaryPoint {
        &self.p2
    }

    pub fn key(&self) -> SegmentKey {
        let (a, b) = (self.p1.key(), self.p2.key());
        if a <= b {
            SegmentKey(a, b)
        } else {
            SegmentKey(b, a)
        }
    }

    /// Both endpoints are the same vertex.
    pub fn is_degenerate(&self) -> bool {
        self.p1.same_vertex(&self.p2)
    }
}

impl PartialEq for BoundarySegment {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BoundarySegment {}

impl Hash for BoundarySegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Diagnostic counts from [`build_segments`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Edges seen for the first time.
    pub new: usize,
    /// Edges already present (the same border walked from the other side).
    pub repeats: usize,
    /// Consecutive pairs skipped because they straddle a traversal gap.
    pub gaps: usize,
}

/// Unique segments in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SegmentSet {
    segments: Vec<BoundarySegment>,
    seen: HashSet<SegmentKey>,
    stats: BuildStats,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `segment` unless an equal one is already present. Returns `true`
    /// if it was new.
    pub fn insert(&mut self, segment: BoundarySegment) -> bool {
        if self.seen.insert(segment.key()) {
            self.segments.push(segment);
            self.stats.new += 1;
            true
        } else {
            self.stats.repeats += 1;
            false
        }
    }

    pub fn contains(&self, segment: &BoundarySegment) -> bool {
        self.seen.contains(&segment.key())
    }

    pub fn segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<BoundarySegment> {
        self.segments
    }
}

/// Builds the set of unique boundary segments from the ordered vertex list.
pub fn build_segments(points: &[BoundaryPoint]) -> SegmentSet {
    let mut set = SegmentSet::new();

    for pair in points.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if second.secondary().is_none() {
            set.stats.gaps += 1;
            continue;
        }
        set.insert(BoundarySegment::new(first.clone(), second.clone()));
    }

    let stats = set.stats();
    tracing::info!(
        new = stats.new,
        repeats = stats.repeats,
        gaps = stats.gaps,
        "built boundary segments"
    );
    set
}
