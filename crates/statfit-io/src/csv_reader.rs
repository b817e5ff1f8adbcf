//! Numeric column from a CSV/TSV file

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::reader::{IoError, IoResult};

/// Which column to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelector {
    /// Zero-based column index
    Index(usize),
    /// Header name; requires a header row
    Name(String),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::Index(0)
    }
}

/// Whether the first row holds column names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRow {
    /// Header if the selected cell of the first row is not a number
    #[default]
    Detect,
    Present,
    Absent,
}

/// Reads one numeric column of a delimited file
#[derive(Debug, Clone)]
pub struct CsvSampleReader {
    delimiter: u8,
    header: HeaderRow,
    column: ColumnSelector,
}

impl Default for CsvSampleReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: HeaderRow::default(),
            column: ColumnSelector::default(),
        }
    }
}

impl CsvSampleReader {
    /// Comma-delimited, header detected, first column
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.header = if has_headers {
            HeaderRow::Present
        } else {
            HeaderRow::Absent
        };
        self
    }

    pub fn header_row(mut self, header: HeaderRow) -> Self {
        self.header = header;
        self
    }

    pub fn column(mut self, column: ColumnSelector) -> Self {
        self.column = column;
        self
    }

    /// Read the selected column from a file
    pub fn read_path(&self, path: impl AsRef<Path>) -> IoResult<Vec<f64>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        self.read(BufReader::new(file))
    }

    /// Read the selected column from any byte source
    ///
    /// Empty cells are skipped; a non-numeric cell is an error. Rows must
    /// all have the same number of fields.
    pub fn read<R: Read>(&self, source: R) -> IoResult<Vec<f64>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(source);
        let mut records = reader.records();

        let first = match records.next() {
            Some(result) => result.map_err(|e| IoError::InvalidEncoding(e.to_string()))?,
            None => return Ok(Vec::new()),
        };
        let (index, first_is_header) = self.resolve_column(&first)?;
        tracing::debug!(index, first_is_header, "csv column resolved");

        let mut values = Vec::new();
        if !first_is_header {
            push_cell(&first, index, &mut values)?;
        }
        for result in records {
            let record = result.map_err(|e| IoError::InvalidEncoding(e.to_string()))?;
            push_cell(&record, index, &mut values)?;
        }

        Ok(values)
    }

    /// Column index, and whether `first` is a header row
    fn resolve_column(&self, first: &csv::StringRecord) -> IoResult<(usize, bool)> {
        match &self.column {
            ColumnSelector::Index(index) => {
                let cell = first.get(*index).ok_or_else(|| {
                    IoError::ColumnNotFound(format!(
                        "column {index} (rows have {} fields)",
                        first.len()
                    ))
                })?;
                let is_header = match self.header {
                    HeaderRow::Present => true,
                    HeaderRow::Absent => false,
                    HeaderRow::Detect => !cell.is_empty() && cell.parse::<f64>().is_err(),
                };
                Ok((*index, is_header))
            }
            ColumnSelector::Name(name) => {
                if self.header == HeaderRow::Absent {
                    return Err(IoError::ColumnNotFound(format!(
                        "{name} (file has no header row)"
                    )));
                }
                first
                    .iter()
                    .position(|h| h == name)
                    .map(|index| (index, true))
                    .ok_or_else(|| IoError::ColumnNotFound(name.clone()))
            }
        }
    }
}

fn push_cell(record: &csv::StringRecord, index: usize, values: &mut Vec<f64>) -> IoResult<()> {
    let cell = record.get(index).unwrap_or("");
    if cell.is_empty() {
        return Ok(());
    }
    let value = cell.parse::<f64>().map_err(|_| IoError::DataFormat {
        line: record.position().map_or(0, |p| p.line() as usize),
        token: cell.to_string(),
    })?;
    values.push(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLE: &str = "id,diameter,weight\n1,300.2,12\n2,299.8,\n3,300.5,14\n";

    #[test]
    fn test_read_first_column() {
        let values = CsvSampleReader::new().read(TABLE.as_bytes()).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_named_column() {
        let reader = CsvSampleReader::new().column(ColumnSelector::Name("diameter".to_string()));
        let values = reader.read(TABLE.as_bytes()).unwrap();
        assert_eq!(values, vec![300.2, 299.8, 300.5]);
    }

    #[test]
    fn test_empty_cells_skipped() {
        let reader = CsvSampleReader::new().column(ColumnSelector::Index(2));
        let values = reader.read(TABLE.as_bytes()).unwrap();
        assert_eq!(values, vec![12.0, 14.0]);
    }

    #[test]
    fn test_missing_column() {
        let reader = CsvSampleReader::new().column(ColumnSelector::Name("height".to_string()));
        let err = reader.read(TABLE.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ColumnNotFound(_)));
    }

    #[test]
    fn test_non_numeric_cell() {
        let reader = CsvSampleReader::new().has_headers(false);
        let err = reader.read("1.0\nabc\n".as_bytes()).unwrap_err();
        match err {
            IoError::DataFormat { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_headerless_numbers_keep_first_value() {
        let values = CsvSampleReader::new().read("1.5\n2.5\n3.5\n".as_bytes()).unwrap();
        assert_eq!(values, vec![1.5, 2.5, 3.5]);

        let values = CsvSampleReader::new()
            .header_row(HeaderRow::Present)
            .read("1.5\n2.5\n3.5\n".as_bytes())
            .unwrap();
        assert_eq!(values, vec![2.5, 3.5]);
    }

    #[test]
    fn test_headerless_csv_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "1.5\n2.5\n3.5\n").unwrap();

        let values = crate::reader::read_sample(file.path()).unwrap();
        assert_eq!(values, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_index_out_of_range() {
        let reader = CsvSampleReader::new().column(ColumnSelector::Index(5));
        let err = reader.read(TABLE.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ColumnNotFound(_)));

        let reader = CsvSampleReader::new()
            .has_headers(false)
            .column(ColumnSelector::Index(1));
        let err = reader.read("1.0\n2.0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ColumnNotFound(_)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = CsvSampleReader::new()
            .read("a,b\n1,2\n3\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, IoError::InvalidEncoding(_)));
    }

    #[test]
    fn test_tsv_file() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        write!(file, "x\ty\n1.5\t2\n2.5\t3\n").unwrap();

        let values = CsvSampleReader::new()
            .delimiter(b'\t')
            .column(ColumnSelector::Name("y".to_string()))
            .read_path(file.path())
            .unwrap();
        assert_eq!(values, vec![2.0, 3.0]);

        let via_dispatch = crate::reader::read_sample(file.path()).unwrap();
        assert_eq!(via_dispatch, vec![1.5, 2.5]);
    }
}
