//! Angle handling for equatorial coordinates in hours and degrees.
//!
//! Only normalization lives here; catalogs store plain `f64` hours and degrees
//! and convert to radians at the point of use.

pub mod normalize;

pub use normalize::{clamp_dec_degrees, wrap_hours};
