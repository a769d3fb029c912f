//! Numeric building blocks for regenerating historical star-atlas catalogs.
//!
//! `celestial-core` holds the small amount of spherical astronomy the boundary
//! pipeline needs: angle normalization in hours and degrees, 3×3 rotation
//! matrices, Besselian epoch conversion, and classical (IAU 1976) precession
//! to J2000.0. Everything is pure Rust with no runtime state.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | RA wrapping to [0, 24h), declination clamping |
//! | [`matrix`] | 3×3 rotation matrices and 3D vectors |
//! | [`precession`] | Lieske precession angles, [`Precession`](precession::Precession) engine |
//! | [`utils`] | Besselian epoch ↔ Julian Date ↔ Julian centuries |
//! | [`constants`] | Epoch and unit-conversion constants |
//!
//! # Units
//!
//! Public coordinate functions take right ascension in **hours** and
//! declination in **degrees**, the units boundary catalogs are written in.
//! Radians appear only inside the matrix code.

pub mod angle;
pub mod constants;
pub mod math;
pub mod matrix;
pub mod precession;
pub mod utils;

pub use matrix::{RotationMatrix3, Vector3};
pub use precession::{precess_from_j2000, precess_to_j2000, Precession};
