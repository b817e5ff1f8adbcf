//! Empirical Cumulative Distribution Function (ECDF)
//!
//! For a sample of n values, ECDF(x) = (number of values <= x) / n.
//! The Kolmogorov-Smirnov test measures the largest gap between this step
//! function and a fitted CDF.

use serde::{Deserialize, Serialize};

/// Empirical Cumulative Distribution Function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted finite values
    values: Vec<f64>,
}

impl Ecdf {
    /// Build an ECDF from data, dropping non-finite values
    ///
    /// Time complexity: O(n log n) for sorting
    pub fn from_data(data: &[f64]) -> Self {
        let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    /// Evaluate the ECDF at a point
    ///
    /// Time complexity: O(log n)
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let below_or_equal = self.values.partition_point(|&v| v <= x);
        below_or_equal as f64 / self.values.len() as f64
    }

    /// Largest absolute gap between the ECDF and `cdf`
    ///
    /// Checks both sides of every step: `i/n - F(x_i)` just after the jump
    /// and `F(x_i) - (i-1)/n` just before it. A NaN from `cdf` makes the
    /// result NaN.
    pub fn max_distance<F>(&self, cdf: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let n = self.values.len() as f64;
        let mut d_max = 0.0_f64;

        for (i, &x) in self.values.iter().enumerate() {
            let fitted = cdf(x);
            if fitted.is_nan() {
                return f64::NAN;
            }
            let above = (i + 1) as f64 / n - fitted;
            let below = fitted - i as f64 / n;
            d_max = d_max.max(above).max(below);
        }

        d_max
    }

    /// Number of finite samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecdf_basic() {
        let ecdf = Ecdf::from_data(&[3.0, 1.0, 5.0, 2.0, 4.0]);

        assert_eq!(ecdf.len(), 5);
        assert_eq!(ecdf.evaluate(0.0), 0.0);
        assert_eq!(ecdf.evaluate(1.0), 0.2);
        assert_eq!(ecdf.evaluate(3.0), 0.6);
        assert_eq!(ecdf.evaluate(5.0), 1.0);
        assert_eq!(ecdf.evaluate(6.0), 1.0);
    }

    #[test]
    fn test_ecdf_duplicates() {
        let ecdf = Ecdf::from_data(&[1.0, 1.0, 2.0, 2.0, 2.0, 3.0]);

        assert!((ecdf.evaluate(1.0) - 2.0 / 6.0).abs() < 1e-10);
        assert!((ecdf.evaluate(2.0) - 5.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_ecdf_empty() {
        let ecdf = Ecdf::from_data(&[]);
        assert!(ecdf.is_empty());
        assert_eq!(ecdf.evaluate(0.0), 0.0);
        assert_eq!(ecdf.max_distance(|_| 0.5), 0.0);
    }

    #[test]
    fn test_max_distance_uniform() {
        // Points at 0.1, 0.3, 0.5, 0.7, 0.9 against U(0, 1): every gap is 0.1
        let ecdf = Ecdf::from_data(&[0.1, 0.3, 0.5, 0.7, 0.9]);
        let d = ecdf.max_distance(|x| x.clamp(0.0, 1.0));
        assert!((d - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_max_distance_shifted() {
        // All mass below the model's support start
        let ecdf = Ecdf::from_data(&[0.1, 0.2]);
        let d = ecdf.max_distance(|x| if x < 1.0 { 0.0 } else { 1.0 });
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_distance_nan() {
        let ecdf = Ecdf::from_data(&[1.0, 2.0]);
        assert!(ecdf.max_distance(|_| f64::NAN).is_nan());
    }
}
