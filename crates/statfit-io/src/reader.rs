//! Error type and format dispatch
//!
//! `read_sample` picks a reader from the file extension so callers do not
//! need to know which formats are compiled in.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a sample
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    /// A token that is not a real number
    #[error("Invalid number {token:?} at line {line}")]
    DataFormat { line: usize, token: String },

    /// Content that is not valid base64, UTF-8 or CSV
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Input formats understood by [`read_sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// Whitespace-delimited numbers
    Text,
    /// Delimited table; the first column is read
    #[cfg(feature = "csv")]
    Csv,
    /// Tab-delimited table; the first column is read
    #[cfg(feature = "csv")]
    Tsv,
}

impl SampleFormat {
    /// Choose a format from a path's extension, defaulting to text
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            #[cfg(feature = "csv")]
            "csv" => SampleFormat::Csv,
            #[cfg(feature = "csv")]
            "tsv" => SampleFormat::Tsv,
            _ => SampleFormat::Text,
        }
    }
}

/// Load a sample from `path`, choosing the reader by extension
pub fn read_sample(path: impl AsRef<Path>) -> IoResult<Vec<f64>> {
    let path = path.as_ref();
    let format = SampleFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "reading sample");

    match format {
        SampleFormat::Text => crate::text_reader::read_text_file(path),
        #[cfg(feature = "csv")]
        SampleFormat::Csv => crate::csv_reader::CsvSampleReader::new().read_path(path),
        #[cfg(feature = "csv")]
        SampleFormat::Tsv => crate::csv_reader::CsvSampleReader::new()
            .delimiter(b'\t')
            .read_path(path),
    }
}

/// List file extensions with a dedicated reader
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = vec!["txt", "dat"];

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
    }

    extensions
}
