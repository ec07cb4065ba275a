//! Polyline simplification algorithms
//!
//! This crate reduces the number of points in 2D or 3D polylines while
//! keeping their shape within a tolerance:
//! - Radial distance filtering
//! - Douglas-Peucker refinement
//! - The two-stage combination of both, with a high quality switch
//!
//! All algorithms select a subsequence of the input and never copy or
//! modify points.

pub mod radial;
pub mod douglas_peucker;
pub mod simplifier;

pub use radial::*;
pub use douglas_peucker::*;
pub use simplifier::*;

use linecrate_core::{Mappable, Result};

/// Reduce a polyline to a subsequence of its points
pub trait PolylineSimplifier {
    /// Positions of the retained points, in input order
    fn simplify_indices<P: Mappable>(&self, points: &[P]) -> Result<Vec<usize>>;

    /// Retained points, borrowed from the input
    fn simplify<'a, P: Mappable>(&self, points: &'a [P]) -> Result<Vec<&'a P>> {
        let kept = self.simplify_indices(points)?;
        Ok(kept.into_iter().map(|i| &points[i]).collect())
    }
}
