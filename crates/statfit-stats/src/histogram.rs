//! Equal-width histogram normalized to unit area
//!
//! Bin `i` covers `[edges[i], edges[i + 1])`; the last bin is closed on the
//! right so the sample maximum is counted. Each bin's relative frequency is
//! a density: `count / (n * width)`, so `sum(frequency * width) == 1`.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::sample::linspace;

/// Half-width of the single bin used for a sample without spread
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Largest bin count accepted by [`Histogram::from_data`]
pub const MAX_BINS: usize = 1 << 20;

/// One histogram bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    /// Density of the bin (integrates to 1 over all bins)
    pub relative_frequency: f64,
}

/// Histogram of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<f64>,
    densities: Vec<f64>,
    counts: Vec<usize>,
    sample_size: usize,
}

impl Histogram {
    /// Bin `data` into `num_bins` equal-width intervals over its range
    ///
    /// A sample whose values are all equal gets one bin spanning
    /// `[v - 0.5, v + 0.5]` regardless of `num_bins`.
    pub fn from_data(data: &[f64], num_bins: usize) -> StatsResult<Self> {
        if num_bins == 0 {
            return Err(StatsError::InvalidArgument(
                "num_bins must be at least 1".to_string(),
            ));
        }
        if num_bins > MAX_BINS {
            return Err(StatsError::InvalidArgument(format!(
                "num_bins must be at most {MAX_BINS}, got {num_bins}"
            )));
        }
        if data.is_empty() {
            return Err(StatsError::InsufficientData(
                "cannot build a histogram of an empty sample".to_string(),
            ));
        }
        if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
            return Err(StatsError::InvalidArgument(format!(
                "sample contains a non-finite value: {bad}"
            )));
        }

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            let edges = vec![min - DEGENERATE_HALF_WIDTH, max + DEGENERATE_HALF_WIDTH];
            let width = edges[1] - edges[0];
            return Ok(Self {
                edges,
                densities: vec![1.0 / width],
                counts: vec![data.len()],
                sample_size: data.len(),
            });
        }

        let edges = linspace(min, max, num_bins + 1);
        let mut counts = vec![0usize; num_bins];
        for &x in data {
            counts[bin_index(&edges, min, max, x)] += 1;
        }

        let n = data.len() as f64;
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&count, edge)| count as f64 / (n * (edge[1] - edge[0])))
            .collect();

        Ok(Self {
            edges,
            densities,
            counts,
            sample_size: data.len(),
        })
    }

    pub fn num_bins(&self) -> usize {
        self.densities.len()
    }

    /// `num_bins + 1` bin edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Relative frequency (density) per bin
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Raw observation count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Width of the first bin; all bins share it up to rounding
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// `(left, right, relative_frequency)` for each bin
    pub fn bins(&self) -> Vec<HistogramBin> {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(edge, &relative_frequency)| HistogramBin {
                left: edge[0],
                right: edge[1],
                relative_frequency,
            })
            .collect()
    }

    /// `sum(frequency * width)`, 1 up to rounding
    pub fn total_area(&self) -> f64 {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(edge, density)| density * (edge[1] - edge[0]))
            .sum()
    }
}

/// Index of the bin holding `x`, correcting for rounding in the division
/// so the result always agrees with the stored edges
fn bin_index(edges: &[f64], min: f64, max: f64, x: f64) -> usize {
    let num_bins = edges.len() - 1;
    if x >= max {
        return num_bins - 1;
    }

    let mut index = (((x - min) / (max - min)) * num_bins as f64) as usize;
    index = index.min(num_bins - 1);

    if x < edges[index] && index > 0 {
        index -= 1;
    } else if index + 1 < num_bins && x >= edges[index + 1] {
        index += 1;
    }
    index
}
