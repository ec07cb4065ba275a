//! Error types for linecrate

use thiserror::Error;

/// Main error type for linecrate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid tolerance: {0} (expected a non-negative number)")]
    InvalidTolerance(f64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for linecrate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Check that a linear tolerance can be squared into a meaningful threshold.
///
/// Negative and NaN tolerances are rejected; `+inf` is accepted and makes
/// every interior point redundant.
pub fn validate_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(Error::InvalidTolerance(tolerance));
    }
    Ok(tolerance)
}
