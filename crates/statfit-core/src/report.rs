//! Analysis report handed to the presentation layer
//!
//! Everything a front end draws or tabulates after one analysis call:
//! histogram bars, the cumulative polyline, one pdf/cdf curve per fitted
//! family and the goodness-of-fit table.

use serde::Serialize;
use std::fmt;

use statfit_stats::{
    CumulativeCurve, DistributionFamily, FittedDistribution, GoodnessOfFit, HistogramBin,
    SummaryStats,
};

/// A fitted parameter with its conventional name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedParam {
    pub name: String,
    pub value: f64,
}

/// A fitted family sampled over the data range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedCurve {
    /// Display name ("Log-Normal", ...)
    pub name: String,
    pub family: DistributionFamily,
    pub params: Vec<NamedParam>,
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

impl FittedCurve {
    /// Sample `fitted` at `x`
    pub fn sample(fitted: &FittedDistribution, x: Vec<f64>) -> Self {
        Self {
            name: fitted.name().to_string(),
            family: fitted.family(),
            params: fitted
                .params()
                .into_iter()
                .map(|(name, value)| NamedParam {
                    name: name.to_string(),
                    value,
                })
                .collect(),
            pdf: fitted.pdf_batch(&x),
            cdf: fitted.cdf_batch(&x),
            x,
        }
    }
}

/// One row of the goodness-of-fit table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub name: String,
    pub family: DistributionFamily,
    /// NaN when the test had too few degrees of freedom
    pub chi_squared_p: f64,
    pub ks_p: f64,
    pub wms: f64,
}

impl ScoreRow {
    pub fn new(family: DistributionFamily, scores: GoodnessOfFit) -> Self {
        Self {
            name: family.name().to_string(),
            family,
            chi_squared_p: scores.chi_squared_p,
            ks_p: scores.ks_p,
            wms: scores.wms,
        }
    }
}

/// Result of one analysis call
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Bin count used for the histogram and the chi-squared test
    pub num_bins: usize,
    /// Heuristic bin count for this sample
    pub default_bins: usize,
    /// Upper bound for the bin-count control
    pub max_bins: usize,
    pub histogram: Vec<HistogramBin>,
    pub cumulative: CumulativeCurve,
    /// In configured family order
    pub curves: Vec<FittedCurve>,
    /// Same order as `curves`
    pub table: Vec<ScoreRow>,
    pub summary: SummaryStats,
}

impl AnalysisReport {
    /// Find the curve for `family`
    pub fn curve(&self, family: DistributionFamily) -> Option<&FittedCurve> {
        self.curves.iter().find(|c| c.family == family)
    }

    /// Find the table row for `family`
    pub fn row(&self, family: DistributionFamily) -> Option<&ScoreRow> {
        self.table.iter().find(|r| r.family == family)
    }

    /// Row with the highest KS p-value
    pub fn best_by_ks(&self) -> Option<&ScoreRow> {
        self.table
            .iter()
            .filter(|r| r.ks_p.is_finite())
            .max_by(|a, b| a.ks_p.total_cmp(&b.ks_p))
    }

    /// Serialize to pretty JSON; NaN scores become `null`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render the goodness-of-fit table as aligned text
    pub fn to_table(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "n = {}, bins = {} (default {}, max {})",
            self.summary.count, self.num_bins, self.default_bins, self.max_bins
        )?;
        writeln!(
            f,
            "{:<14} {:>14} {:>14} {:>14}  Parameters",
            "Distribution", "Chi-squared p", "KS p", "WMS"
        )?;

        for (row, curve) in self.table.iter().zip(&self.curves) {
            let params = curve
                .params
                .iter()
                .map(|p| format!("{}={}", p.name, format_value(p.value)))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{:<14} {:>14} {:>14} {:>14}  {}",
                row.name,
                format_value(row.chi_squared_p),
                format_value(row.ks_p),
                format_value(row.wms),
                params
            )?;
        }
        Ok(())
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value != 0.0 && (value.abs() < 1e-3 || value.abs() >= 1e5) {
        format!("{value:.4e}")
    } else {
        format!("{value:.4}")
    }
}
