//! Error types for statfit-stats

use thiserror::Error;

/// Errors raised by the statistics engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The sample is too small or has no spread for the requested operation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// An argument is outside its valid range (bin count, degrees of freedom, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The likelihood optimizer failed to run
    #[error("Optimization failed: {0}")]
    Optimization(String),
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
