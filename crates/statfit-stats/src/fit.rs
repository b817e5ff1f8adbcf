//! Maximum-likelihood fitting
//!
//! Normal fits use the closed-form estimates (mean, population standard
//! deviation). The other families minimize the negative log-likelihood with
//! Nelder-Mead over an unconstrained reparameterization:
//!
//! - positive quantities (shape, scale) are optimized on a log scale
//! - the location of the shifted families is `min(sample) - exp(u)`, which
//!   keeps every observation inside the support
//!
//! Non-convergence is not an error: the best simplex vertex after
//! `max_iters` iterations is returned as-is, which may be a poor or
//! degenerate fit.

use argmin::core::{CostFunction, Error as ArgminError, Executor, State};
use argmin::solver::neldermead::NelderMead;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distribution::{DistributionFamily, FittedDistribution};
use crate::error::{StatsError, StatsResult};
use crate::sample::Sample;
use crate::summary::SummaryStats;

/// Euler-Mascheroni constant, used for the Weibull starting scale
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Simplex step for log-scale coordinates
const LOG_STEP: f64 = 0.1;

/// Optimizer limits for iterative fits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Maximum Nelder-Mead iterations
    pub max_iters: u64,
    /// Stop once the standard deviation of simplex costs falls below this
    pub sd_tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iters: 5000,
            sd_tolerance: 1e-10,
        }
    }
}

/// Fit `family` to `sample` with default optimizer limits
pub fn fit(family: DistributionFamily, sample: &Sample) -> StatsResult<FittedDistribution> {
    fit_with_options(family, sample, &FitOptions::default())
}

/// Fit `family` to `sample` by maximum likelihood
///
/// Requires at least two observations with non-zero spread. The support of
/// the data is not checked against the family; whatever the optimizer
/// reaches is returned, including NaN parameters.
pub fn fit_with_options(
    family: DistributionFamily,
    sample: &Sample,
    options: &FitOptions,
) -> StatsResult<FittedDistribution> {
    sample.require_spread()?;
    let data = sample.values();
    let stats = SummaryStats::from_data(data);

    let params = match family {
        DistributionFamily::Normal => vec![stats.mean, stats.std_dev],
        DistributionFamily::Logistic => fit_logistic(data, &stats, options)?,
        DistributionFamily::LogNormal | DistributionFamily::Weibull | DistributionFamily::Gamma => {
            fit_shifted(family, data, &stats, options)?
        }
    };

    let fitted = FittedDistribution::new(family, params)?;
    if fitted.is_valid() {
        debug!(family = family.name(), params = ?fitted.params(), "fitted distribution");
    } else {
        warn!(family = family.name(), params = ?fitted.params(), "fit produced unusable parameters");
    }
    Ok(fitted)
}

/// Fit every family in `families`, in order
pub fn fit_all(
    families: &[DistributionFamily],
    sample: &Sample,
    options: &FitOptions,
) -> StatsResult<Vec<FittedDistribution>> {
    families
        .iter()
        .map(|&family| fit_with_options(family, sample, options))
        .collect()
}

fn fit_logistic(data: &[f64], stats: &SummaryStats, options: &FitOptions) -> StatsResult<Vec<f64>> {
    // Moment match: variance of the logistic is scale² π² / 3
    let scale0 = stats.std_dev * 3f64.sqrt() / std::f64::consts::PI;
    let start = vec![stats.mean, scale0.ln()];
    let steps = [0.1 * scale0, LOG_STEP];

    let problem = NegLogLikelihood {
        family: DistributionFamily::Logistic,
        data,
        min: stats.min,
    };
    let best = minimize(problem, start, &steps, options)?;
    Ok(vec![best[0], best[1].exp()])
}

fn fit_shifted(
    family: DistributionFamily,
    data: &[f64],
    stats: &SummaryStats,
    options: &FitOptions,
) -> StatsResult<Vec<f64>> {
    let gap = (0.5 * stats.std_dev).max(f64::EPSILON * stats.min.abs().max(1.0));
    let loc0 = stats.min - gap;
    let shifted: Vec<f64> = data.iter().map(|x| x - loc0).collect();
    let (shape0, scale0) = starting_shape_scale(family, &shifted);

    let start = vec![shape0.ln(), gap.ln(), scale0.ln()];
    let problem = NegLogLikelihood {
        family,
        data,
        min: stats.min,
    };
    let best = minimize(problem, start, &[LOG_STEP; 3], options)?;
    Ok(NegLogLikelihood::natural_params(family, stats.min, &best))
}

/// Shape and scale guesses from data already shifted to positive values
fn starting_shape_scale(family: DistributionFamily, shifted: &[f64]) -> (f64, f64) {
    match family {
        DistributionFamily::Gamma => {
            let stats = SummaryStats::from_data(shifted);
            let shape = stats.mean.powi(2) / stats.variance;
            (shape, stats.variance / stats.mean)
        }
        DistributionFamily::Weibull => {
            let logs: Vec<f64> = shifted.iter().map(|x| x.ln()).collect();
            let stats = SummaryStats::from_data(&logs);
            // ln of a Weibull variate has standard deviation π / (c √6)
            let shape = std::f64::consts::PI / (stats.std_dev * 6f64.sqrt());
            (shape, (stats.mean + EULER_GAMMA / shape).exp())
        }
        _ => {
            let logs: Vec<f64> = shifted.iter().map(|x| x.ln()).collect();
            let stats = SummaryStats::from_data(&logs);
            (stats.std_dev, stats.mean.exp())
        }
    }
}

/// Negative log-likelihood over the unconstrained parameterization
struct NegLogLikelihood<'a> {
    family: DistributionFamily,
    data: &'a [f64],
    min: f64,
}

impl NegLogLikelihood<'_> {
    /// Map optimizer coordinates back to `param_names` order
    fn natural_params(family: DistributionFamily, min: f64, theta: &[f64]) -> Vec<f64> {
        if family.has_shape() {
            vec![theta[0].exp(), min - theta[1].exp(), theta[2].exp()]
        } else {
            vec![theta[0], theta[1].exp()]
        }
    }
}

impl CostFunction for NegLogLikelihood<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, ArgminError> {
        let params = Self::natural_params(self.family, self.min, theta);
        let nll = match FittedDistribution::new(self.family, params) {
            Ok(candidate) if candidate.is_valid() => -candidate.log_likelihood(self.data),
            _ => f64::INFINITY,
        };
        Ok(if nll.is_nan() { f64::INFINITY } else { nll })
    }
}

fn minimize(
    problem: NegLogLikelihood<'_>,
    start: Vec<f64>,
    steps: &[f64],
    options: &FitOptions,
) -> StatsResult<Vec<f64>> {
    let family = problem.family;
    let simplex = initial_simplex(&start, steps);

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(options.sd_tolerance)
        .map_err(|e| StatsError::Optimization(e.to_string()))?;

    let result = Executor::new(problem, solver)
        .configure(|state| state.max_iters(options.max_iters))
        .run()
        .map_err(|e| StatsError::Optimization(e.to_string()))?;

    let state = result.state();
    debug!(
        family = family.name(),
        iterations = state.get_iter(),
        cost = state.get_best_cost(),
        "nelder-mead finished"
    );

    state
        .get_best_param()
        .cloned()
        .ok_or_else(|| StatsError::Optimization(format!("{} fit found no parameters", family)))
}

/// `start` plus one vertex per coordinate, displaced by that coordinate's step
fn initial_simplex(start: &[f64], steps: &[f64]) -> Vec<Vec<f64>> {
    let mut simplex = vec![start.to_vec(); start.len() + 1];
    for (i, vertex) in simplex.iter_mut().skip(1).enumerate() {
        vertex[i] += steps[i];
    }
    simplex
}
