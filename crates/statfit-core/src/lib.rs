//! statfit-core - Analysis facade for statfit
//!
//! The presentation layer (CLI, web front end, notebook) calls one function
//! per user action and renders the returned report:
//!
//! - [`analyze`]: sample + bin count -> [`AnalysisReport`]
//! - [`Analyzer`]: the same, bundled with a loaded [`StatfitConfig`]
//!
//! Every call recomputes the histogram, cumulative curve, fits and scores
//! from scratch. Nothing is cached between calls.

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::*;
pub use config::*;
pub use error::*;
pub use report::*;

pub use statfit_stats::{DistributionFamily, FittedDistribution, Sample};
