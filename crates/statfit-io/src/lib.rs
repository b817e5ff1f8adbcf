//! statfit-io - Sample I/O for statfit
//!
//! This crate turns user-supplied files into a numeric sample:
//!
//! - **Text**: whitespace/newline-delimited numbers with `#` comments
//! - **CSV**: one numeric column of a CSV or TSV file
//! - **Upload**: base64 data-URL content as sent by a browser file picker
//!
//! # Design
//!
//! Every reader returns a plain `Vec<f64>` in file order. Any token that
//! is not a number is reported with its position instead of being skipped.

pub mod reader;
pub mod text_reader;
pub mod upload;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use reader::*;
pub use text_reader::*;
pub use upload::*;

#[cfg(feature = "csv")]
pub use csv_reader::*;
