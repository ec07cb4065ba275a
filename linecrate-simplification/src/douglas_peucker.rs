//! Douglas-Peucker refinement
//!
//! Keeps only the points whose deviation from the current chord exceeds the
//! tolerance, splitting the polyline at the farthest point and refining both
//! halves. The divide-and-conquer runs on an explicit work stack so that
//! pathological inputs (zig-zags where every point is kept) cannot exhaust
//! the call stack.

use crate::PolylineSimplifier;
use itertools::Itertools;
use linecrate_core::{segment_square_distance, validate_tolerance, Mappable, Result};
use tracing::trace;

/// Farthest interior point of `points[first..=last]` from the chord.
///
/// Ties resolve to the later index. Returns `(first, 0.0)` when no
/// interior point produced a comparable distance.
fn farthest_from_chord<P: Mappable>(points: &[P], first: usize, last: usize) -> (usize, f64) {
    let mut found = first;
    let mut best = 0.0;

    for index in first + 1..last {
        let distance = segment_square_distance(&points[index], &points[first], &points[last]);
        if distance >= best {
            best = distance;
            found = index;
        }
    }

    (found, best)
}

/// Indices of the points kept by Douglas-Peucker refinement.
///
/// `sq_tolerance` is the squared linear tolerance. Inputs with two points
/// or fewer are returned unchanged; otherwise the first and last points are
/// always kept and a point splits its chord only when its squared distance
/// is strictly greater than `sq_tolerance`.
pub fn simplify_douglas_peucker_indices<P: Mappable>(points: &[P], sq_tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((first, last)) = stack.pop() {
        // A chord with no interior points is already final
        if last - first < 2 {
            continue;
        }

        let (found, best) = farthest_from_chord(points, first, last);
        if best > sq_tolerance && found > first {
            trace!(first, last, split = found, sq_distance = best, "splitting chord");
            keep[found] = true;
            stack.push((found, last));
            stack.push((first, found));
        }
    }

    keep.iter().positions(|&k| k).collect()
}

/// Douglas-Peucker refinement returning references into `points`.
pub fn simplify_douglas_peucker<P: Mappable>(points: &[P], sq_tolerance: f64) -> Vec<&P> {
    simplify_douglas_peucker_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| &points[i])
        .collect()
}

/// Douglas-Peucker refinement on the full input, with a linear tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DouglasPeuckerSimplifier {
    /// Maximum allowed deviation from the simplified path
    pub tolerance: f64,
}

impl Default for DouglasPeuckerSimplifier {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl DouglasPeuckerSimplifier {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl PolylineSimplifier for DouglasPeuckerSimplifier {
    fn simplify_indices<P: Mappable>(&self, points: &[P]) -> Result<Vec<usize>> {
        if points.len() <= 2 {
            return Ok((0..points.len()).collect());
        }
        let tolerance = validate_tolerance(self.tolerance)?;
        Ok(simplify_douglas_peucker_indices(points, tolerance * tolerance))
    }
}
