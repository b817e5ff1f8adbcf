//! The analysis pipeline
//!
//! sample -> bin count -> histogram -> cumulative curve -> fits -> scores

use std::path::Path;

use statfit_io::{decode_upload, read_sample, ColumnSelector, CsvSampleReader};
use statfit_stats::{
    fit_with_options, score, suggest_num_bins, CumulativeCurve, Histogram, Sample, StatsError,
};
use tracing::{debug, info};

use crate::config::StatfitConfig;
use crate::error::StatfitResult;
use crate::report::{AnalysisReport, FittedCurve, ScoreRow};

/// Run the full analysis on `sample`
///
/// `num_bins` of `None` uses the heuristic bin count; a requested count
/// above the configured bin limit is `InvalidArgument`. Every call
/// recomputes everything from the sample; nothing is kept between calls.
pub fn analyze(
    sample: &Sample,
    num_bins: Option<usize>,
    config: &StatfitConfig,
) -> StatfitResult<AnalysisReport> {
    let data = sample.values();

    let default_bins = suggest_num_bins(data)?;
    let max_bins = config
        .binning
        .limit_policy
        .max_bins(sample.len(), default_bins);
    let num_bins = num_bins.unwrap_or(default_bins);
    if num_bins > max_bins {
        return Err(StatsError::InvalidArgument(format!(
            "{num_bins} bins requested, at most {max_bins} allowed for {} observations",
            sample.len()
        ))
        .into());
    }
    debug!(n = sample.len(), num_bins, default_bins, max_bins, "binning");

    let histogram = Histogram::from_data(data, num_bins)?;
    let cumulative = CumulativeCurve::from_histogram(&histogram);

    let options = config.fitting.options();
    let x = sample.linspace(config.curves.points_for(sample.len()));

    let mut curves = Vec::with_capacity(config.fitting.families.len());
    let mut table = Vec::with_capacity(config.fitting.families.len());

    for &family in &config.fitting.families {
        let fitted = fit_with_options(family, sample, &options)?;
        let scores = score(
            data,
            &cumulative,
            &fitted,
            num_bins,
            config.goodness.ddof(family),
        )?;
        debug!(family = family.name(), ?scores, "scored");

        curves.push(FittedCurve::sample(&fitted, x.clone()));
        table.push(ScoreRow::new(family, scores));
    }

    Ok(AnalysisReport {
        num_bins,
        default_bins,
        max_bins,
        histogram: histogram.bins(),
        cumulative,
        curves,
        table,
        summary: sample.summary(),
    })
}

/// Holds a configuration and the current sample for a front end
///
/// Loading replaces the sample wholesale; every [`Analyzer::analyze`] or
/// [`Analyzer::rebin`] call recomputes the report.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: StatfitConfig,
    sample: Option<Sample>,
}

impl Analyzer {
    /// Create an analyzer with a validated configuration
    pub fn new(config: StatfitConfig) -> StatfitResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sample: None,
        })
    }

    pub fn config(&self) -> &StatfitConfig {
        &self.config
    }

    pub fn sample(&self) -> Option<&Sample> {
        self.sample.as_ref()
    }

    /// Replace the current sample
    pub fn set_sample(&mut self, sample: Sample) -> &Sample {
        info!(n = sample.len(), "sample loaded");
        self.sample.insert(sample)
    }

    /// Load a sample from a file, picking the reader by extension
    pub fn load(&mut self, path: impl AsRef<Path>) -> StatfitResult<&Sample> {
        let values = read_sample(path)?;
        Ok(self.set_sample(Sample::new(values)))
    }

    /// Load one named column of a CSV/TSV file
    pub fn load_column(&mut self, path: impl AsRef<Path>, column: &str) -> StatfitResult<&Sample> {
        let path = path.as_ref();
        let is_tsv = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("tsv"));

        let mut reader = CsvSampleReader::new().column(ColumnSelector::Name(column.to_string()));
        if is_tsv {
            reader = reader.delimiter(b'\t');
        }
        let values = reader.read_path(path)?;
        Ok(self.set_sample(Sample::new(values)))
    }

    /// Load a sample from data-URL upload content
    pub fn load_upload(&mut self, content: &str) -> StatfitResult<&Sample> {
        let values = decode_upload(content)?;
        Ok(self.set_sample(Sample::new(values)))
    }

    /// Analyze the current sample with the heuristic bin count
    ///
    /// Returns `None` until a sample has been loaded.
    pub fn analyze(&self) -> Option<StatfitResult<AnalysisReport>> {
        self.rebin(None)
    }

    /// Analyze the current sample with an explicit bin count
    pub fn rebin(&self, num_bins: Option<usize>) -> Option<StatfitResult<AnalysisReport>> {
        self.sample
            .as_ref()
            .map(|sample| analyze(sample, num_bins, &self.config))
    }
}
