//! Configuration for statfit
//!
//! Centralized settings for binning limits, the fitted families, optimizer
//! limits, chi-squared degrees of freedom and curve resolution. Every field
//! has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! [binning]
//! limit_policy = "double_default"
//!
//! [fitting]
//! families = ["normal", "gamma"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use statfit_stats::{DistributionFamily, FitOptions};

use crate::error::{StatfitError, StatfitResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatfitConfig {
    pub binning: BinningConfig,
    pub fitting: FittingConfig,
    pub goodness: GoodnessConfig,
    pub curves: CurveConfig,
}

/// Upper bound offered for the bin-count control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinLimitPolicy {
    /// `n / 3`
    #[default]
    ThirdOfSample,
    /// `2 * default_bins`
    DoubleDefault,
}

impl BinLimitPolicy {
    /// Largest bin count to offer; never below `default_bins` or 1
    pub fn max_bins(&self, sample_size: usize, default_bins: usize) -> usize {
        let limit = match self {
            BinLimitPolicy::ThirdOfSample => sample_size / 3,
            BinLimitPolicy::DoubleDefault => 2 * default_bins,
        };
        limit.max(default_bins).max(1)
    }
}

/// Histogram binning settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    pub limit_policy: BinLimitPolicy,
}

/// Distribution fitting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FittingConfig {
    /// Families to fit, in report order
    pub families: Vec<DistributionFamily>,
    /// Nelder-Mead iteration limit
    pub max_iters: u64,
    /// Nelder-Mead convergence tolerance on simplex costs
    pub sd_tolerance: f64,
}

impl Default for FittingConfig {
    fn default() -> Self {
        let options = FitOptions::default();
        Self {
            families: DistributionFamily::ALL.to_vec(),
            max_iters: options.max_iters,
            sd_tolerance: options.sd_tolerance,
        }
    }
}

impl FittingConfig {
    pub fn options(&self) -> FitOptions {
        FitOptions {
            max_iters: self.max_iters,
            sd_tolerance: self.sd_tolerance,
        }
    }
}

/// Goodness-of-fit settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoodnessConfig {
    /// Subtract the number of fitted parameters from the chi-squared
    /// degrees of freedom (`k - 1 - p` instead of `k - 1`)
    pub subtract_fitted_params: bool,
}

impl GoodnessConfig {
    /// Degrees-of-freedom adjustment for `family`
    pub fn ddof(&self, family: DistributionFamily) -> usize {
        if self.subtract_fitted_params {
            family.num_params()
        } else {
            0
        }
    }
}

/// Fitted curve sampling settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Points per pdf/cdf curve; `None` uses the sample size
    pub points: Option<usize>,
}

impl CurveConfig {
    pub fn points_for(&self, sample_size: usize) -> usize {
        self.points.unwrap_or(sample_size)
    }
}

impl StatfitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read, parse and validate a TOML (or `.json`) configuration file
    pub fn load(path: impl AsRef<Path>) -> StatfitResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| StatfitError::InvalidConfig(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&content).map_err(|e| StatfitError::InvalidConfig(e.to_string()))?
        } else {
            Self::from_toml(&content).map_err(|e| StatfitError::InvalidConfig(e.to_string()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fitting.families.is_empty() {
            return Err(ConfigError::MissingField("fitting.families".to_string()));
        }

        let mut seen = HashSet::new();
        for family in &self.fitting.families {
            if !seen.insert(family) {
                return Err(ConfigError::Duplicate(family.name().to_string()));
            }
        }

        if self.fitting.max_iters == 0 {
            return Err(ConfigError::OutOfRange(
                "fitting.max_iters must be positive".to_string(),
            ));
        }

        let tolerance = self.fitting.sd_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::OutOfRange(
                "fitting.sd_tolerance must be a positive number".to_string(),
            ));
        }

        if matches!(self.curves.points, Some(points) if points < 2) {
            return Err(ConfigError::OutOfRange(
                "curves.points must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),
    /// A family is listed more than once
    #[error("Duplicate family: {0}")]
    Duplicate(String),
}

impl From<ConfigError> for StatfitError {
    fn from(err: ConfigError) -> Self {
        StatfitError::InvalidConfig(err.to_string())
    }
}
