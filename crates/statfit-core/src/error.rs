//! Error types for statfit-core
//!
//! Wraps the engine and I/O errors so a front end handles one type:
//! - Malformed input files (`Io`)
//! - Degenerate samples and fit failures (`Stats`)
//! - Bad configuration (`InvalidConfig`)

use statfit_io::IoError;
use statfit_stats::StatsError;
use thiserror::Error;

/// Main error type for statfit operations
#[derive(Error, Debug)]
pub enum StatfitError {
    /// Loading or decoding the sample failed
    #[error("Failed to load sample: {0}")]
    Io(#[from] IoError),

    /// The statistics engine rejected the sample or failed to fit
    #[error("Analysis failed: {0}")]
    Stats(#[from] StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for statfit operations
pub type StatfitResult<T> = Result<T, StatfitError>;
