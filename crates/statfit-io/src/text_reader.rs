//! Whitespace-delimited numeric text
//!
//! Numbers may be separated by any mix of spaces, tabs and newlines. Blank
//! lines are ignored and `#` starts a comment that runs to the end of the
//! line. Every remaining token must parse as a real number.

use std::fs;
use std::path::Path;

use crate::reader::{IoError, IoResult};

/// Parse all numbers in `text`, in reading order
pub fn parse_text(text: &str) -> IoResult<Vec<f64>> {
    let mut values = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| IoError::DataFormat {
                line: index + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Read and parse a text file
pub fn read_text_file(path: impl AsRef<Path>) -> IoResult<Vec<f64>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| IoError::InvalidEncoding(format!("{}: {}", path.display(), e)))?;
    parse_text(&text)
}
