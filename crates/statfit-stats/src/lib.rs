//! statfit-stats - Statistics engine for statfit
//!
//! This crate turns a raw numeric sample into everything needed to judge
//! which parametric distribution describes it:
//!
//! - **Histogram**: equal-width bins normalized to unit area
//! - **Cumulative curve**: step polyline built from the histogram
//! - **Bin heuristic**: default bin count from sample size and spread
//! - **Fitting**: maximum-likelihood fits for Normal, Log-Normal, Weibull,
//!   Gamma and Logistic families
//! - **Goodness-of-fit**: chi-squared, Kolmogorov-Smirnov and the WMS
//!   sum of squared CDF residuals
//!
//! # Design Philosophy
//!
//! Every operation is a pure function of its inputs. Fitting returns a new
//! immutable [`FittedDistribution`] instead of mutating shared parameter
//! state, so the same sample always yields the same parameters.

pub mod bins;
pub mod cumulative;
pub mod distribution;
pub mod ecdf;
pub mod error;
pub mod fit;
pub mod goodness;
pub mod histogram;
pub mod sample;
pub mod summary;

pub use bins::*;
pub use cumulative::*;
pub use distribution::*;
pub use ecdf::*;
pub use error::*;
pub use fit::*;
pub use goodness::*;
pub use histogram::*;
pub use sample::*;
pub use summary::*;
