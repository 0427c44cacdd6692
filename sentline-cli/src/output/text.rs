//! Plain text preview output

use anyhow::Result;
use std::io::{self, Write};

/// Writes reformatted text verbatim, one segment per line
pub struct TextOutput<W: Write> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    /// Create a new text output
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the reformatted text exactly as it would land in the file
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl TextOutput<io::Stdout> {
    /// Create an output that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
