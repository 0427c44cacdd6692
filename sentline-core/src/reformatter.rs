//! In-place file reformatting

use crate::config::ReformatConfig;
use crate::error::{ReformatError, Result};
use crate::input::read_source;
use crate::segment::{join_segments, split_segments, trim_segment};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Summary of a completed reformat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatReport {
    /// File that was rewritten
    pub path: PathBuf,
    /// Number of segments written (delimiter count + 1)
    pub segments: usize,
    /// Size of the decoded source text
    pub bytes_read: usize,
    /// Size of the rewritten file
    pub bytes_written: usize,
    /// Invalid UTF-8 in the source was replaced with U+FFFD
    pub lossy: bool,
}

/// Reformatted text of a file that has not been written back yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    /// Trimmed segments joined by `".\n"`
    pub text: String,
    /// Number of segments (delimiter count + 1)
    pub segments: usize,
    /// Size of the decoded source text
    pub source_len: usize,
    /// Invalid UTF-8 in the source was replaced with U+FFFD
    pub lossy: bool,
}

/// Rewrites a file with one trimmed segment per line
///
/// A run reads the whole file, splits it on `.`, trims each segment and
/// writes the segments back joined by `".\n"`. The write truncates the file
/// first; a failed write can leave it partially written.
#[derive(Debug, Clone, Default)]
pub struct Reformatter {
    config: ReformatConfig,
}

impl Reformatter {
    /// Create a reformatter for the given configuration
    pub fn new(config: ReformatConfig) -> Self {
        Self { config }
    }

    /// Configuration this reformatter runs with
    pub fn config(&self) -> &ReformatConfig {
        &self.config
    }

    /// Read the configured file and return its reformatted text.
    ///
    /// The file is left untouched.
    pub fn render(&self) -> Result<RenderedText> {
        let path = self.config.path();
        log::debug!("reading {}", path.display());

        let source = read_source(path)?;
        if source.lossy {
            log::warn!(
                "{} is not valid UTF-8; invalid sequences were replaced",
                path.display()
            );
        }

        let segments: Vec<&str> = split_segments(&source.text)
            .into_iter()
            .map(trim_segment)
            .collect();
        log::debug!("split {} into {} segments", path.display(), segments.len());

        let text = join_segments(&segments);
        log::trace!("reformatted text: {text:?}");

        Ok(RenderedText {
            segments: segments.len(),
            source_len: source.text.len(),
            lossy: source.lossy,
            text,
        })
    }

    /// Reformat the configured file in place
    pub fn reformat(&self) -> Result<ReformatReport> {
        self.reformat_with(|path, bytes| fs::write(path, bytes))
    }

    fn reformat_with<F>(&self, write: F) -> Result<ReformatReport>
    where
        F: FnOnce(&Path, &[u8]) -> io::Result<()>,
    {
        let rendered = self.render()?;
        let path = self.config.path();

        write(path, rendered.text.as_bytes()).map_err(|source| ReformatError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", rendered.text.len(), path.display());

        Ok(ReformatReport {
            path: path.to_path_buf(),
            segments: rendered.segments,
            bytes_read: rendered.source_len,
            bytes_written: rendered.text.len(),
            lossy: rendered.lossy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("foo.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reformat_rewrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "a. b .c");

        let report = Reformatter::new(ReformatConfig::new(&path))
            .reformat()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a.\nb.\nc");
        assert_eq!(report.segments, 3);
        assert_eq!(report.bytes_read, 7);
        assert_eq!(report.bytes_written, 7);
        assert_eq!(report.bytes_written, fs::read(&path).unwrap().len());
        assert!(!report.lossy);
        assert_eq!(report.path, path);
    }

    #[test]
    fn test_reformat_truncates_longer_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "   lots of padding      .     ");

        Reformatter::new(ReformatConfig::new(&path))
            .reformat()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "lots of padding.\n");
    }

    #[test]
    fn test_reformat_empty_file_stays_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "");

        let report = Reformatter::new(ReformatConfig::new(&path))
            .reformat()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(report.segments, 1);
        assert_eq!(report.bytes_written, 0);
    }

    #[test]
    fn test_reformat_missing_file_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("foo.txt");

        let err = Reformatter::new(ReformatConfig::new(&path))
            .reformat()
            .unwrap_err();

        assert!(matches!(err, ReformatError::Read { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_reformat_lossy_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("foo.txt");
        fs::write(&path, b"caf\xe9. ok").unwrap();

        let report = Reformatter::new(ReformatConfig::new(&path))
            .reformat()
            .unwrap();

        assert!(report.lossy);
        assert_eq!(fs::read_to_string(&path).unwrap(), "caf\u{fffd}.\nok");
    }

    #[test]
    fn test_render_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "One. Two ");

        let rendered = Reformatter::new(ReformatConfig::new(&path))
            .render()
            .unwrap();

        assert_eq!(rendered.text, "One.\nTwo");
        assert_eq!(rendered.segments, 2);
        assert_eq!(rendered.source_len, 9);
        assert!(!rendered.lossy);
        assert_eq!(fs::read_to_string(&path).unwrap(), "One. Two ");
    }

    #[test]
    fn test_write_failure_is_reported_as_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "x. y");

        let err = Reformatter::new(ReformatConfig::new(&path))
            .reformat_with(|_, _| {
                Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "Permission denied",
                ))
            })
            .unwrap_err();

        assert!(matches!(err, ReformatError::Write { .. }));
        assert_eq!(err.path(), path.as_path());
        assert_eq!(err.io_kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().starts_with("failed to write"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x. y");
    }

    #[test]
    fn test_write_receives_rendered_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "a. b .c");
        let mut written = Vec::new();

        let report = Reformatter::new(ReformatConfig::new(&path))
            .reformat_with(|target, bytes| {
                assert_eq!(target, path.as_path());
                written.extend_from_slice(bytes);
                Ok(())
            })
            .unwrap();

        assert_eq!(written, b"a.\nb.\nc");
        assert_eq!(report.bytes_written, written.len());
    }

    #[test]
    fn test_read_failure_skips_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let mut called = false;

        let err = Reformatter::new(ReformatConfig::new(&path))
            .reformat_with(|_, _| {
                called = true;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, ReformatError::Read { .. }));
        assert!(!called);
    }
}
