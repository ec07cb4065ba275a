//! Two-stage polyline simplification
//!
//! The entry point squares the caller's linear tolerance once and then
//! either runs Douglas-Peucker on the full input (high quality) or first
//! thins the input with the radial distance filter.

use crate::douglas_peucker::simplify_douglas_peucker_indices;
use crate::radial::simplify_radial_distance_indices;
use crate::PolylineSimplifier;
use linecrate_core::{validate_tolerance, Mappable, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Simplify `points` within `tolerance`, returning indices of the kept points.
///
/// Inputs with two points or fewer are returned unchanged without looking
/// at the tolerance. Otherwise a negative or NaN tolerance is rejected.
pub fn simplify_indices<P: Mappable>(
    points: &[P],
    tolerance: f64,
    high_quality: bool,
) -> Result<Vec<usize>> {
    let n = points.len();
    if n <= 2 {
        return Ok((0..n).collect());
    }

    let tolerance = validate_tolerance(tolerance)?;
    let sq_tolerance = tolerance * tolerance;

    let kept = if high_quality {
        simplify_douglas_peucker_indices(points, sq_tolerance)
    } else {
        let radial = simplify_radial_distance_indices(points, sq_tolerance);
        let thinned: Vec<&P> = radial.iter().map(|&i| &points[i]).collect();
        simplify_douglas_peucker_indices(&thinned, sq_tolerance)
            .into_iter()
            .map(|k| radial[k])
            .collect()
    };

    debug!(
        input = n,
        output = kept.len(),
        high_quality,
        tolerance,
        "simplified polyline"
    );

    Ok(kept)
}

/// Simplify `points` within `tolerance`.
///
/// The result borrows from `points` and preserves their order; the first
/// and last input points are always part of it.
pub fn simplify<P: Mappable>(points: &[P], tolerance: f64, high_quality: bool) -> Result<Vec<&P>> {
    let kept = simplify_indices(points, tolerance, high_quality)?;
    Ok(kept.into_iter().map(|i| &points[i]).collect())
}

/// Settings for [`Simplifier`] and [`simplify_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Maximum allowed deviation, in the same units as the coordinates
    pub tolerance: f64,
    /// Skip the radial prefilter and run Douglas-Peucker on the full input
    #[serde(alias = "highQuality")]
    pub high_quality: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            high_quality: false,
        }
    }
}

impl SimplifyConfig {
    pub fn new(tolerance: f64, high_quality: bool) -> Self {
        Self {
            tolerance,
            high_quality,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_high_quality(mut self, high_quality: bool) -> Self {
        self.high_quality = high_quality;
        self
    }

    /// Reject tolerances that cannot be squared into a threshold
    pub fn validate(&self) -> Result<()> {
        validate_tolerance(self.tolerance).map(|_| ())
    }
}

/// Radial prefilter followed by Douglas-Peucker, or Douglas-Peucker alone
/// when `high_quality` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Simplifier {
    pub config: SimplifyConfig,
}

impl Simplifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimplifyConfig) -> Self {
        Self { config }
    }
}

impl PolylineSimplifier for Simplifier {
    fn simplify_indices<P: Mappable>(&self, points: &[P]) -> Result<Vec<usize>> {
        simplify_indices(points, self.config.tolerance, self.config.high_quality)
    }
}

/// Simplify many independent polylines in parallel.
///
/// The configuration is validated once up front, so an invalid tolerance
/// fails the batch before any polyline is touched.
pub fn simplify_batch<'a, P, L>(polylines: &'a [L], config: &SimplifyConfig) -> Result<Vec<Vec<&'a P>>>
where
    P: Mappable + Sync + 'a,
    L: AsRef<[P]> + Sync,
{
    config.validate()?;

    polylines
        .par_iter()
        .map(|line| simplify(line.as_ref(), config.tolerance, config.high_quality))
        .collect()
}
