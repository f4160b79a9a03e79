//! HTML parsing adapter.
//!
//! Wraps `scraper`'s html5ever-based parser. Malformed markup never fails:
//! the parser recovers what it can and returns a possibly sparse tree. The
//! only hard failure is a payload that is not text at all.

use scraper::Html;
use thiserror::Error;

/// The payload could not be treated as HTML text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("response body is not UTF-8 text (invalid byte at offset {offset})")]
    NotUtf8 { offset: usize },
    #[error("response body looks binary (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Decode a response body as UTF-8 text, dropping a leading byte-order mark.
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::NotUtf8 {
        offset: e.valid_up_to(),
    })?;
    if let Some(offset) = text.find('\0') {
        return Err(ParseError::Binary { offset });
    }
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Parse a response body into a document tree.
pub fn parse(bytes: &[u8]) -> Result<Html, ParseError> {
    decode(bytes).map(Html::parse_document)
}
