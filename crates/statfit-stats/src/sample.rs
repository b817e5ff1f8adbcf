//! The observed sample
//!
//! A [`Sample`] is the ordered list of observations loaded from a file or
//! upload. It is immutable; a new upload replaces it wholesale.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::summary::SummaryStats;

/// Ordered, immutable sequence of observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Wrap observed values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Observations in load order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest observation, `None` for an empty sample
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest observation, `None` for an empty sample
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Summary statistics of the finite observations
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::from_data(&self.values)
    }

    /// Check that the sample supports fitting: at least two values and
    /// non-zero spread
    pub fn require_spread(&self) -> StatsResult<()> {
        if self.values.len() < 2 {
            return Err(StatsError::InsufficientData(format!(
                "need at least 2 observations, got {}",
                self.values.len()
            )));
        }
        let (min, max) = (self.min(), self.max());
        if min == max {
            return Err(StatsError::InsufficientData(
                "all observations are identical".to_string(),
            ));
        }
        Ok(())
    }

    /// `count` evenly spaced points from the sample minimum to its maximum
    pub fn linspace(&self, count: usize) -> Vec<f64> {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => linspace(min, max, count),
            _ => Vec::new(),
        }
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Evenly spaced points over `[start, stop]`, both ends included
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_min_max() {
        let sample = Sample::new(vec![3.0, -1.0, 7.5, 2.0]);
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.min(), Some(-1.0));
        assert_eq!(sample.max(), Some(7.5));
    }

    #[test]
    fn test_sample_empty() {
        let sample = Sample::new(Vec::new());
        assert!(sample.is_empty());
        assert!(sample.min().is_none());
        assert!(sample.linspace(5).is_empty());
    }

    #[test]
    fn test_require_spread() {
        assert!(Sample::new(vec![1.0]).require_spread().is_err());
        assert!(Sample::new(vec![2.0, 2.0, 2.0]).require_spread().is_err());
        assert!(Sample::new(vec![1.0, 2.0]).require_spread().is_ok());
    }

    #[test]
    fn test_linspace_endpoints() {
        let points = linspace(0.0, 1.0, 5);
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
