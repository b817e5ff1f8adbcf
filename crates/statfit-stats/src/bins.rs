//! Default bin count for a freshly loaded sample
//!
//! | Sample size | Bins |
//! |---|---|
//! | n <= 30 | round(2 * sqrt(n)) |
//! | 30 < n <= 100 | round(sqrt(n)) |
//! | n > 100 | round(max(ln(n) + 1, 3.5 * std / n^(1/3))) |
//!
//! The large-sample branch takes the larger of the Sturges count and the
//! Scott width term as written; `std` is the population standard deviation.

use crate::error::{StatsError, StatsResult};
use crate::summary::SummaryStats;

/// Largest sample size that uses the `2 * sqrt(n)` rule
pub const SMALL_SAMPLE_LIMIT: usize = 30;

/// Largest sample size that uses the `sqrt(n)` rule
pub const MEDIUM_SAMPLE_LIMIT: usize = 100;

/// Suggest a histogram bin count for `data` (always at least 1)
pub fn suggest_num_bins(data: &[f64]) -> StatsResult<usize> {
    let n = data.len();
    if n == 0 {
        return Err(StatsError::InsufficientData(
            "cannot choose a bin count for an empty sample".to_string(),
        ));
    }

    let size = n as f64;
    let raw = if n <= SMALL_SAMPLE_LIMIT {
        2.0 * size.sqrt()
    } else if n <= MEDIUM_SAMPLE_LIMIT {
        size.sqrt()
    } else {
        let sturges = size.ln() + 1.0;
        let scott = 3.5 * SummaryStats::from_data(data).std_dev / size.cbrt();
        sturges.max(scott)
    };

    Ok((raw.round() as usize).max(1))
}
