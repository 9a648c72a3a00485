//! Series generator error types
//!
//! The generator is pure arithmetic, so the failures are asking for a metric
//! that does not exist, asking for a bad length, or anchoring a series where
//! its timestamps fall outside the representable date range.

use thiserror::Error;

/// Errors that can occur while generating a series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Identifier is not one of the known metrics (or `home`)
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Length override is non-positive or not an integer
    #[error("Invalid length: {0} (must be a positive integer)")]
    InvalidLength(String),

    /// Anchor time leaves no room for the series inside the date range
    #[error("Anchor time out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;
