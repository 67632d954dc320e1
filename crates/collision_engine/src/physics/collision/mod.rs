//! Bounding-volume collision detection
//!
//! # Module Organization
//!
//! - [`primitives`] - Axis-aligned boxes and spheres with their own queries
//! - [`pairwise`] - Stateless predicates over two explicit volumes, plus the
//!   [`Volume`] dispatcher
//!
//! All queries are pure and O(1); none mutate their inputs.

pub mod primitives;
pub mod pairwise;

// Re-export commonly used types
pub use primitives::{BoundingBox, BoundingSphere};
pub use pairwise::Volume;
