//! Sentence-per-line reformatting
//!
//! Splits a text file on periods, trims every segment and writes the
//! segments back to the same file, one per line:
//!
//! ```
//! assert_eq!(sentline_core::reformat_text("a. b .c"), "a.\nb.\nc");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod reformatter;
pub mod segment;

use std::path::PathBuf;

// Re-export key types
pub use config::{ReformatConfig, DEFAULT_PATH};
pub use error::{ReformatError, Result};
pub use input::{decode_text, DecodedText};
pub use reformatter::{ReformatReport, Reformatter, RenderedText};
pub use segment::{
    join_segments, reformat_text, split_segments, trim_segment, DELIMITER, SEPARATOR,
};

/// Reformat the file at `path` in place
pub fn reformat_file(path: impl Into<PathBuf>) -> Result<ReformatReport> {
    Reformatter::new(ReformatConfig::new(path)).reformat()
}
