//! Physics module for collision detection and response
//!
//! Narrow-phase tests between boxes, spheres and points, and the
//! single-axis velocity inversion used as contact response. There is no
//! broad phase: callers pick the pairs they want tested.

pub mod collision;
pub mod response;

pub use collision::{BoundingBox, BoundingSphere, Volume};
pub use response::{box_contact_axis_signs, contact_axis, ContactAxis};
