//! Cumulative step curve derived from a histogram
//!
//! With `c_i` the cumulative probability after bin `i`, the polyline rises
//! vertically at each left edge and then holds a segment at `c_i` across
//! bin `i`. Every edge but the last appears twice in `x`, `2k + 1` points
//! in total:
//!
//! ```text
//! x: e0  e0  e1  e1  e2 ... e(k-1)  e(k-1)  ek
//! y: 0   c0  c0  c1  c1 ... c(k-2)  c(k-1)  c(k-1)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::histogram::Histogram;

/// Step polyline approximating the empirical CDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CumulativeCurve {
    /// Build the curve from bin densities and the `densities.len() + 1` edges
    pub fn build(densities: &[f64], edges: &[f64]) -> StatsResult<Self> {
        if densities.is_empty() {
            return Err(StatsError::InsufficientData(
                "cumulative curve needs at least one bin".to_string(),
            ));
        }
        if edges.len() != densities.len() + 1 {
            return Err(StatsError::InvalidArgument(format!(
                "expected {} edges for {} bins, got {}",
                densities.len() + 1,
                densities.len(),
                edges.len()
            )));
        }

        Ok(step_curve(densities, edges))
    }

    /// Build the curve for a histogram
    pub fn from_histogram(histogram: &Histogram) -> Self {
        step_curve(histogram.densities(), histogram.edges())
    }

    /// Number of points on the polyline
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs for line plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Final cumulative value, 1 up to rounding
    pub fn total(&self) -> f64 {
        self.y.last().copied().unwrap_or(0.0)
    }
}

/// Expects `edges.len() == densities.len() + 1` and at least one bin
fn step_curve(densities: &[f64], edges: &[f64]) -> CumulativeCurve {
    let cumulative: Vec<f64> = densities
        .iter()
        .zip(edges.windows(2))
        .scan(0.0, |total, (density, edge)| {
            *total += density * (edge[1] - edge[0]);
            Some(*total)
        })
        .collect();

    let points = 2 * densities.len() + 1;
    let x = (0..points).map(|j| edges[j / 2]).collect();
    let y = (0..points)
        .map(|j| if j == 0 { 0.0 } else { cumulative[(j - 1) / 2] })
        .collect();

    CumulativeCurve { x, y }
}
