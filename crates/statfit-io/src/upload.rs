//! Browser upload decoding
//!
//! File pickers hand over content as a data URL,
//! `data:text/plain;base64,MTIuNQoxMy4w...`. The prefix up to the first
//! comma is dropped, the rest is base64-decoded and parsed as numeric text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::reader::{IoError, IoResult};
use crate::text_reader::parse_text;

/// Decode data-URL (or bare base64) content into a sample
pub fn decode_upload(content: &str) -> IoResult<Vec<f64>> {
    let payload = match content.split_once(',') {
        Some((_prefix, payload)) => payload,
        None => content,
    };
    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| IoError::InvalidEncoding(format!("base64: {e}")))?;
    let text =
        String::from_utf8(bytes).map_err(|e| IoError::InvalidEncoding(format!("utf-8: {e}")))?;

    tracing::debug!(bytes = text.len(), "decoded upload");
    parse_text(&text)
}

/// Encode text as a `data:text/plain;base64,` URL
pub fn encode_upload(text: &str) -> String {
    format!("data:text/plain;base64,{}", STANDARD.encode(text.as_bytes()))
}
