//! Reformat configuration

use std::path::{Path, PathBuf};

/// File reformatted when no other path is configured
pub const DEFAULT_PATH: &str = "foo.txt";

/// Configuration for a [`Reformatter`](crate::Reformatter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ReformatConfig {
    /// File that is read and then overwritten in place
    pub path: PathBuf,
}

impl Default for ReformatConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl ReformatConfig {
    /// Create a configuration targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Replace the target path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
