//! Core data structures and traits for linecrate
//!
//! This crate provides the fundamental types for polyline simplification:
//! 2D/3D points, the [`Mappable`] coordinate capability, polylines,
//! distance primitives and the shared error type.

pub mod point;
pub mod polyline;
pub mod traits;
pub mod distance;
pub mod error;

pub use point::*;
pub use polyline::*;
pub use traits::*;
pub use distance::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3};
