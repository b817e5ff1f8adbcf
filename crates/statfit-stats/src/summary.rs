//! Summary statistics for a sample
//!
//! Location and spread figures shown next to the fit table. The standard
//! deviation here is the population one (divide by n), which is what the
//! bin-count heuristic and the Normal maximum-likelihood fit both use.

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN or infinite values that were ignored
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub median: f64,
    /// Median Absolute Deviation
    pub mad: f64,
}

impl SummaryStats {
    /// Compute summary statistics, ignoring non-finite values
    pub fn from_data(data: &[f64]) -> Self {
        let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        finite.sort_by(f64::total_cmp);
        let median = median_of_sorted(&finite);

        let mut deviations: Vec<f64> = finite.iter().map(|x| (x - median).abs()).collect();
        deviations.sort_by(f64::total_cmp);

        Self {
            count,
            missing,
            min: finite[0],
            max: finite[count - 1],
            mean,
            variance,
            std_dev: variance.sqrt(),
            median,
            mad: median_of_sorted(&deviations),
        }
    }

    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
            mad: f64::NAN,
        }
    }

    /// max - min
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
