//! Radial distance filter
//!
//! Single O(n) pass that drops every point lying closer than the tolerance
//! to the last point that was kept. Used as a cheap bulk reduction before
//! Douglas-Peucker refinement.

use crate::PolylineSimplifier;
use linecrate_core::{square_distance, validate_tolerance, Mappable, Result};

/// Indices of the points kept by the radial distance filter.
///
/// `sq_tolerance` is the squared linear tolerance. Inputs with two points
/// or fewer are returned unchanged. The last input point is always kept,
/// even when it lies within tolerance of its predecessor.
pub fn simplify_radial_distance_indices<P: Mappable>(points: &[P], sq_tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    let mut previous = 0;

    for (index, point) in points.iter().enumerate().skip(1) {
        if square_distance(point, &points[previous]) < sq_tolerance {
            continue;
        }
        kept.push(index);
        previous = index;
    }

    // The trailing point is identified by position, not by value
    if previous != n - 1 {
        kept.push(n - 1);
    }

    kept
}

/// Radial distance filter returning references into `points`.
pub fn simplify_radial_distance<P: Mappable>(points: &[P], sq_tolerance: f64) -> Vec<&P> {
    simplify_radial_distance_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| &points[i])
        .collect()
}

/// Radial distance filter on its own, with a linear tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDistanceSimplifier {
    /// Minimum distance between consecutive kept points
    pub tolerance: f64,
}

impl Default for RadialDistanceSimplifier {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl RadialDistanceSimplifier {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl PolylineSimplifier for RadialDistanceSimplifier {
    fn simplify_indices<P: Mappable>(&self, points: &[P]) -> Result<Vec<usize>> {
        if points.len() <= 2 {
            return Ok((0..points.len()).collect());
        }
        let tolerance = validate_tolerance(self.tolerance)?;
        Ok(simplify_radial_distance_indices(points, tolerance * tolerance))
    }
}
