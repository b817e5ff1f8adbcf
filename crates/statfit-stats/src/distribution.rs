//! Parametric distribution families and fitted distributions
//!
//! # Supported Families
//!
//! | Family | Parameters | Standardized form |
//! |---|---|---|
//! | [`DistributionFamily::Normal`] | loc, scale | N(loc, scale²) |
//! | [`DistributionFamily::LogNormal`] | s, loc, scale | ln((x−loc)/scale) ~ N(0, s²) |
//! | [`DistributionFamily::Weibull`] | c, loc, scale | z = (x−loc)/scale, f = c·z^(c−1)·e^(−z^c)/scale |
//! | [`DistributionFamily::Gamma`] | a, loc, scale | x−loc ~ Gamma(shape a, rate 1/scale) |
//! | [`DistributionFamily::Logistic`] | loc, scale | F = 1/(1+e^(−(x−loc)/scale)) |
//!
//! A [`FittedDistribution`] whose parameters cannot describe a valid
//! distribution (NaN from a failed fit, non-positive scale) still exists:
//! its `pdf` and `cdf` return NaN so the caller sees the failure instead of
//! a silently substituted value.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Gamma, LogNormal, Normal, Weibull};
use std::fmt;

use crate::error::{StatsError, StatsResult};

/// A named parametric family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionFamily {
    Normal,
    LogNormal,
    Weibull,
    Gamma,
    Logistic,
}

impl DistributionFamily {
    /// Every supported family, in report order
    pub const ALL: [DistributionFamily; 5] = [
        DistributionFamily::Normal,
        DistributionFamily::LogNormal,
        DistributionFamily::Weibull,
        DistributionFamily::Gamma,
        DistributionFamily::Logistic,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            DistributionFamily::Normal => "Normal",
            DistributionFamily::LogNormal => "Log-Normal",
            DistributionFamily::Weibull => "Weibull",
            DistributionFamily::Gamma => "Gamma",
            DistributionFamily::Logistic => "Logistic",
        }
    }

    /// Parameter names in the order they are stored
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            DistributionFamily::Normal | DistributionFamily::Logistic => &["loc", "scale"],
            DistributionFamily::LogNormal => &["s", "loc", "scale"],
            DistributionFamily::Weibull => &["c", "loc", "scale"],
            DistributionFamily::Gamma => &["a", "loc", "scale"],
        }
    }

    pub fn num_params(&self) -> usize {
        self.param_names().len()
    }

    /// Families with a shape parameter and support bounded below by `loc`
    pub fn has_shape(&self) -> bool {
        self.num_params() == 3
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluated form of a parameter set
#[derive(Debug, Clone, PartialEq)]
enum Model {
    Normal(Normal),
    LogNormal { loc: f64, inner: LogNormal },
    Weibull { loc: f64, inner: Weibull },
    Gamma { loc: f64, inner: Gamma },
    Logistic { loc: f64, scale: f64 },
}

impl Model {
    fn build(family: DistributionFamily, params: &[f64]) -> Option<Self> {
        if params.iter().any(|p| !p.is_finite()) {
            return None;
        }
        match family {
            DistributionFamily::Normal => Normal::new(params[0], params[1]).ok().map(Model::Normal),
            DistributionFamily::LogNormal => {
                let (s, loc, scale) = (params[0], params[1], params[2]);
                if scale <= 0.0 {
                    return None;
                }
                let inner = LogNormal::new(scale.ln(), s).ok()?;
                Some(Model::LogNormal { loc, inner })
            }
            DistributionFamily::Weibull => {
                let inner = Weibull::new(params[0], params[2]).ok()?;
                Some(Model::Weibull { loc: params[1], inner })
            }
            DistributionFamily::Gamma => {
                let (a, loc, scale) = (params[0], params[1], params[2]);
                if scale <= 0.0 {
                    return None;
                }
                let inner = Gamma::new(a, 1.0 / scale).ok()?;
                Some(Model::Gamma { loc, inner })
            }
            DistributionFamily::Logistic => {
                let (loc, scale) = (params[0], params[1]);
                (scale > 0.0).then_some(Model::Logistic { loc, scale })
            }
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        match self {
            Model::Normal(d) => d.pdf(x),
            Model::LogNormal { loc, inner } => inner.pdf(x - loc),
            Model::Weibull { loc, inner } => {
                if x < *loc {
                    0.0
                } else {
                    inner.pdf(x - loc)
                }
            }
            Model::Gamma { loc, inner } => {
                if x <= *loc {
                    0.0
                } else {
                    inner.pdf(x - loc)
                }
            }
            Model::Logistic { loc, scale } => {
                let e = (-((x - loc) / scale).abs()).exp();
                e / (scale * (1.0 + e).powi(2))
            }
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        match self {
            Model::Normal(d) => d.ln_pdf(x),
            Model::LogNormal { loc, inner } => inner.ln_pdf(x - loc),
            Model::Weibull { loc, inner } => {
                if x <= *loc {
                    f64::NEG_INFINITY
                } else {
                    inner.ln_pdf(x - loc)
                }
            }
            Model::Gamma { loc, inner } => {
                if x <= *loc {
                    f64::NEG_INFINITY
                } else {
                    inner.ln_pdf(x - loc)
                }
            }
            Model::Logistic { loc, scale } => {
                let z = ((x - loc) / scale).abs();
                -z - scale.ln() - 2.0 * (-z).exp().ln_1p()
            }
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self {
            Model::Normal(d) => d.cdf(x),
            Model::LogNormal { loc, inner } => inner.cdf(x - loc),
            Model::Weibull { loc, inner } => {
                if x <= *loc {
                    0.0
                } else {
                    inner.cdf(x - loc)
                }
            }
            Model::Gamma { loc, inner } => {
                if x <= *loc {
                    0.0
                } else {
                    inner.cdf(x - loc)
                }
            }
            Model::Logistic { loc, scale } => 1.0 / (1.0 + (-(x - loc) / scale).exp()),
        }
    }
}

/// A distribution family with concrete parameter values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedDistribution {
    family: DistributionFamily,
    params: Vec<f64>,
    #[serde(skip)]
    model: Option<Model>,
}

impl FittedDistribution {
    /// Create a distribution from parameters in [`DistributionFamily::param_names`] order
    ///
    /// Only the parameter count is checked; values that do not form a valid
    /// distribution yield NaN from `pdf`/`cdf`.
    pub fn new(family: DistributionFamily, params: Vec<f64>) -> StatsResult<Self> {
        if params.len() != family.num_params() {
            return Err(StatsError::InvalidArgument(format!(
                "{} takes {} parameters, got {}",
                family.name(),
                family.num_params(),
                params.len()
            )));
        }
        let model = Model::build(family, &params);
        Ok(Self {
            family,
            params,
            model,
        })
    }

    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn name(&self) -> &'static str {
        self.family.name()
    }

    /// Parameter values in [`DistributionFamily::param_names`] order
    pub fn param_values(&self) -> &[f64] {
        &self.params
    }

    /// `(name, value)` pairs
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        self.family
            .param_names()
            .iter()
            .copied()
            .zip(self.params.iter().copied())
            .collect()
    }

    /// Look up a parameter by name
    pub fn param(&self, name: &str) -> Option<f64> {
        self.family
            .param_names()
            .iter()
            .position(|p| *p == name)
            .map(|i| self.params[i])
    }

    /// Whether the parameters describe a usable distribution
    pub fn is_valid(&self) -> bool {
        self.model.is_some()
    }

    pub fn pdf(&self, x: f64) -> f64 {
        self.model.as_ref().map_or(f64::NAN, |m| m.pdf(x))
    }

    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.model.as_ref().map_or(f64::NAN, |m| m.ln_pdf(x))
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.model.as_ref().map_or(f64::NAN, |m| m.cdf(x))
    }

    pub fn pdf_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    pub fn cdf_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Sum of log-densities over `data`
    pub fn log_likelihood(&self, data: &[f64]) -> f64 {
        data.iter().map(|&x| self.ln_pdf(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_family_metadata() {
        assert_eq!(DistributionFamily::ALL.len(), 5);
        assert_eq!(DistributionFamily::LogNormal.name(), "Log-Normal");
        assert_eq!(DistributionFamily::Weibull.param_names(), &["c", "loc", "scale"]);
        assert_eq!(DistributionFamily::Logistic.num_params(), 2);
        assert!(DistributionFamily::Gamma.has_shape());
        assert!(!DistributionFamily::Normal.has_shape());
    }

    #[test]
    fn test_wrong_param_count() {
        assert!(FittedDistribution::new(DistributionFamily::Normal, vec![0.0]).is_err());
    }

    #[test]
    fn test_normal_values() {
        let d = FittedDistribution::new(DistributionFamily::Normal, vec![0.0, 1.0]).unwrap();
        assert_close(d.cdf(0.0), 0.5, 1e-12);
        assert_close(d.pdf(0.0), 0.398_942_280_401_432_7, 1e-12);
        assert_close(d.cdf(1.96), 0.975_002_104_851_780_1, 1e-9);
        assert_eq!(d.param("scale"), Some(1.0));
    }

    #[test]
    fn test_lognormal_shifted() {
        // s = 1, loc = 2, scale = 1: cdf at loc + 1 is the lognormal median, 0.5
        let d =
            FittedDistribution::new(DistributionFamily::LogNormal, vec![1.0, 2.0, 1.0]).unwrap();
        assert_close(d.cdf(3.0), 0.5, 1e-12);
        assert_eq!(d.cdf(1.5), 0.0);
        assert_eq!(d.pdf(1.5), 0.0);
    }

    #[test]
    fn test_weibull_exponential_case() {
        // c = 1 reduces to an exponential with mean `scale`
        let d =
            FittedDistribution::new(DistributionFamily::Weibull, vec![1.0, 0.0, 2.0]).unwrap();
        assert_close(d.cdf(2.0), 1.0 - (-1.0f64).exp(), 1e-12);
        assert_close(d.pdf(0.5), 0.5 * (-0.25f64).exp(), 1e-12);
    }

    #[test]
    fn test_gamma_scale() {
        // a = 1 is exponential with mean `scale`
        let d = FittedDistribution::new(DistributionFamily::Gamma, vec![1.0, 1.0, 3.0]).unwrap();
        assert_close(d.cdf(4.0), 1.0 - (-1.0f64).exp(), 1e-10);
        assert_eq!(d.cdf(0.5), 0.0);
    }

    #[test]
    fn test_logistic_values() {
        let d = FittedDistribution::new(DistributionFamily::Logistic, vec![5.0, 2.0]).unwrap();
        assert_close(d.cdf(5.0), 0.5, 1e-12);
        assert_close(d.pdf(5.0), 0.125, 1e-12);
        assert_close(d.ln_pdf(7.0), d.pdf(7.0).ln(), 1e-12);
    }

    #[test]
    fn test_invalid_params_give_nan() {
        let d = FittedDistribution::new(DistributionFamily::Normal, vec![f64::NAN, 1.0]).unwrap();
        assert!(!d.is_valid());
        assert!(d.cdf(0.0).is_nan());
        assert!(d.pdf_batch(&[0.0, 1.0]).iter().all(|v| v.is_nan()));

        let d = FittedDistribution::new(DistributionFamily::Gamma, vec![2.0, 0.0, -1.0]).unwrap();
        assert!(d.cdf(1.0).is_nan());
    }

    #[test]
    fn test_batch_matches_scalar() {
        let d = FittedDistribution::new(DistributionFamily::Normal, vec![1.0, 2.0]).unwrap();
        let xs = [-1.0, 0.0, 3.5];
        let cdfs = d.cdf_batch(&xs);
        for (x, c) in xs.iter().zip(cdfs) {
            assert_eq!(d.cdf(*x), c);
        }
    }
}
