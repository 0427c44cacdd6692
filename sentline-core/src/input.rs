//! Source text loading

use crate::error::{ReformatError, Result};
use std::fs;
use std::path::Path;

/// Text decoded from raw file bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded UTF-8 text
    pub text: String,
    /// True when invalid sequences were replaced with U+FFFD
    pub lossy: bool,
}

/// Decode bytes as UTF-8, replacing invalid sequences
pub fn decode_text(bytes: Vec<u8>) -> DecodedText {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedText { text, lossy: false },
        Err(err) => {
            let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
            DecodedText { text, lossy: true }
        }
    }
}

/// Read the whole file at `path` and decode it
pub fn read_source(path: &Path) -> Result<DecodedText> {
    let bytes = fs::read(path).map_err(|source| ReformatError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_text(bytes))
}
