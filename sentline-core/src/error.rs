//! Reformat error types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reformatting a file
///
/// Every failure is an I/O failure; the variant records which phase failed
/// so a read error is never mistaken for a half-written file.
#[derive(Error, Debug)]
pub enum ReformatError {
    /// The source file could not be read. Nothing was written.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The reformatted text could not be written back.
    /// The file may be truncated or partially written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ReformatError {
    /// Path of the file the failed operation targeted
    pub fn path(&self) -> &Path {
        match self {
            ReformatError::Read { path, .. } | ReformatError::Write { path, .. } => {
                path.as_path()
            }
        }
    }

    /// Kind of the underlying I/O error
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            ReformatError::Read { source, .. } | ReformatError::Write { source, .. } => {
                source.kind()
            }
        }
    }
}

/// Result type for reformat operations
pub type Result<T> = std::result::Result<T, ReformatError>;
