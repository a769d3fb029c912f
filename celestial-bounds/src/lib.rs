//! Constellation boundary catalog regeneration.
//!
//! Takes the 1930 IAU boundary vertices (B1875.0), rebuilds the border edges
//! between them, densifies each edge, precesses every point to J2000.0, and
//! writes a fixed-width catalog.
//!
//! ```text
//! catalog text ─► parse ─► segment ─► interpolate (+ precess) ─► format ─► catalog text
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`point`] | [`BoundaryPoint`] and vertex identity |
//! | [`parse`] | Raw and annotated catalog readers |
//! | [`segment`] | Edge reconstruction and symmetric deduplication |
//! | [`interpolate`] | RA wraparound, length estimate, subdivision |
//! | [`format`] | Fixed-width writer |
//! | [`pipeline`] | [`RegenerateConfig`] and the parallel driver |
//! | [`analyze`] | Catalog statistics |
//! | [`lines`] | GeoJSON stick-figure conversion |

pub mod analyze;
pub mod errors;
pub mod format;
pub mod interpolate;
pub mod lines;
pub mod parse;
pub mod pipeline;
pub mod point;
pub mod segment;

pub use errors::{BoundsError, BoundsResult};
pub use interpolate::DensityModel;
pub use pipeline::{regenerate, RegenerateConfig, Regenerated};
pub use point::{BoundaryPoint, PointKind};
pub use segment::{build_segments, BoundarySegment, SegmentSet};
