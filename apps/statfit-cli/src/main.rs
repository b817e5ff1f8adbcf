//! statfit - fit distributions to a numeric sample
//!
//! Loads a sample, runs the analysis and prints the goodness-of-fit table
//! (or the full report as JSON). Set `RUST_LOG=debug` to see the chosen
//! bin count and fitted parameters.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use statfit_core::{Analyzer, StatfitConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "statfit")]
#[command(version, about = "Fit parametric distributions to a sample and report goodness of fit")]
struct Args {
    /// Sample file: whitespace-delimited text, or CSV/TSV
    file: PathBuf,

    /// Number of histogram bins (default: heuristic for the sample size)
    #[arg(short, long)]
    bins: Option<usize>,

    /// CSV/TSV column to read by header name (default: first column)
    #[arg(short, long)]
    column: Option<String>,

    /// FILE holds data-URL upload content instead of plain text
    #[arg(long, conflicts_with = "column")]
    upload: bool,

    /// TOML or JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => StatfitConfig::load(path)?,
        None => StatfitConfig::default(),
    };
    let mut analyzer = Analyzer::new(config)?;

    let n = if args.upload {
        let content = fs::read_to_string(&args.file)?;
        analyzer.load_upload(&content)?.len()
    } else if let Some(column) = &args.column {
        analyzer.load_column(&args.file, column)?.len()
    } else {
        analyzer.load(&args.file)?.len()
    };
    tracing::info!(file = %args.file.display(), n, "loaded sample");

    let report = analyzer
        .rebin(args.bins)
        .ok_or("no sample loaded")??;

    Ok(match args.format {
        Format::Table => report.to_table(),
        Format::Json => report.to_json()? + "\n",
    })
}
