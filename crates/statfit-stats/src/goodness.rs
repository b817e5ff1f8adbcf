//! Goodness-of-fit scores
//!
//! Three independent scores compare a sample with a fitted CDF:
//!
//! - **Chi-squared**: observed vs expected histogram counts (p-value)
//! - **Kolmogorov-Smirnov**: largest ECDF gap (p-value)
//! - **WMS**: sum of squared differences between the fitted CDF and the
//!   histogram's cumulative curve. This is an ad hoc distance rather than a
//!   textbook test: smaller is better and there is no p-value.
//!
//! Scores are plain functions of their inputs and are recomputed from
//! scratch on every call.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::cumulative::CumulativeCurve;
use crate::distribution::FittedDistribution;
use crate::ecdf::Ecdf;
use crate::error::{StatsError, StatsResult};
use crate::histogram::Histogram;

/// Terms of the Kolmogorov series to sum before giving up on convergence
const KOLMOGOROV_TERMS: usize = 100;

/// Pearson chi-squared test outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquaredTest {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

/// Kolmogorov-Smirnov test outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsTest {
    /// Largest absolute ECDF gap
    pub statistic: f64,
    pub p_value: f64,
}

/// The three scores reported for one fitted distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodnessOfFit {
    pub chi_squared_p: f64,
    pub ks_p: f64,
    pub wms: f64,
}

/// Pearson chi-squared test of `data` binned into `num_bins` bins
///
/// `observed_i = relative_frequency_i * width * n` and
/// `expected_i = (cdf(right_i) - cdf(left_i)) * n`. The p-value uses
/// `num_bins - 1 - ddof` degrees of freedom; fewer than one degree of
/// freedom is an error.
pub fn chi_squared<F>(data: &[f64], cdf: F, num_bins: usize, ddof: usize) -> StatsResult<ChiSquaredTest>
where
    F: Fn(f64) -> f64,
{
    let histogram = Histogram::from_data(data, num_bins)?;
    let k = histogram.num_bins();
    if k < 2 + ddof {
        return Err(StatsError::InvalidArgument(format!(
            "chi-squared test needs at least one degree of freedom ({k} bins, ddof {ddof})"
        )));
    }
    let degrees_of_freedom = k - 1 - ddof;

    let n = data.len() as f64;
    let edge_cdf: Vec<f64> = histogram.edges().iter().map(|&e| cdf(e)).collect();

    let statistic: f64 = histogram
        .bins()
        .iter()
        .zip(edge_cdf.windows(2))
        .map(|(bin, cdf_pair)| {
            let observed = bin.relative_frequency * (bin.right - bin.left) * n;
            let expected = (cdf_pair[1] - cdf_pair[0]) * n;
            (observed - expected).powi(2) / expected
        })
        .sum();

    Ok(ChiSquaredTest {
        statistic,
        degrees_of_freedom,
        p_value: chi_squared_sf(statistic, degrees_of_freedom),
    })
}

fn chi_squared_sf(statistic: f64, degrees_of_freedom: usize) -> f64 {
    if statistic.is_nan() {
        return f64::NAN;
    }
    if statistic == f64::INFINITY {
        return 0.0;
    }
    ChiSquared::new(degrees_of_freedom as f64).map_or(f64::NAN, |dist| dist.sf(statistic))
}

/// One-sample two-sided Kolmogorov-Smirnov test of `data` against `cdf`
///
/// The p-value comes from the asymptotic Kolmogorov distribution with
/// Stephens' small-sample correction
/// `lambda = (sqrt(n) + 0.12 + 0.11 / sqrt(n)) * D`.
pub fn kolmogorov_smirnov<F>(data: &[f64], cdf: F) -> StatsResult<KsTest>
where
    F: Fn(f64) -> f64,
{
    let ecdf = Ecdf::from_data(data);
    if ecdf.is_empty() {
        return Err(StatsError::InsufficientData(
            "Kolmogorov-Smirnov test needs at least one finite observation".to_string(),
        ));
    }

    let statistic = ecdf.max_distance(cdf);
    let root_n = (ecdf.len() as f64).sqrt();
    let lambda = (root_n + 0.12 + 0.11 / root_n) * statistic;

    Ok(KsTest {
        statistic,
        p_value: kolmogorov_sf(lambda),
    })
}

/// Survival function of the Kolmogorov distribution,
/// `Q(λ) = 2 Σ (-1)^(j-1) exp(-2 j² λ²)`
pub fn kolmogorov_sf(lambda: f64) -> f64 {
    if lambda.is_nan() {
        return f64::NAN;
    }
    if lambda < 1e-3 {
        return 1.0;
    }

    let a2 = -2.0 * lambda * lambda;
    let mut sign = 2.0;
    let mut sum = 0.0;
    let mut previous_term = 0.0_f64;

    for j in 1..=KOLMOGOROV_TERMS {
        let term = sign * (a2 * (j * j) as f64).exp();
        sum += term;
        if term.abs() <= 1e-3 * previous_term.abs() || term.abs() <= 1e-10 * sum.abs() {
            return sum.clamp(0.0, 1.0);
        }
        sign = -sign;
        previous_term = term;
    }

    // Series failed to converge: only happens for tiny λ, where Q -> 1
    1.0
}

/// WMS distance: `sum((cdf(x_i) - y_i)^2)` over the cumulative curve points
pub fn wms<F>(curve: &CumulativeCurve, cdf: F) -> f64
where
    F: Fn(f64) -> f64,
{
    curve
        .x
        .iter()
        .zip(&curve.y)
        .map(|(&x, &y)| (cdf(x) - y).powi(2))
        .sum()
}

/// Compute all three scores for a fitted distribution
///
/// `ddof` is passed through to [`chi_squared`]; the chi-squared p-value is
/// NaN when there are too few bins for a degree of freedom.
pub fn score(
    data: &[f64],
    curve: &CumulativeCurve,
    fitted: &FittedDistribution,
    num_bins: usize,
    ddof: usize,
) -> StatsResult<GoodnessOfFit> {
    let cdf = |x: f64| fitted.cdf(x);

    let chi_squared_p = match chi_squared(data, cdf, num_bins, ddof) {
        Ok(test) => test.p_value,
        Err(StatsError::InvalidArgument(reason)) => {
            tracing::warn!(family = fitted.name(), %reason, "chi-squared score skipped");
            f64::NAN
        }
        Err(other) => return Err(other),
    };

    Ok(GoodnessOfFit {
        chi_squared_p,
        ks_p: kolmogorov_smirnov(data, cdf)?.p_value,
        wms: wms(curve, cdf),
    })
}
