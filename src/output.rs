//! Output management module
//!
//! Writes cleansed lines to the destination file with buffering. Lines are
//! written with their original terminators, so no newline is added here.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encoding::Line;
use crate::error::{CleanseError, Result};

/// Default buffer size for file writing (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create (or truncate) the output file
    pub fn new(path: PathBuf, buffer_size: usize) -> Result<Self> {
        ensure_parent_dir(&path)?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| CleanseError::write(&path, e))?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a line followed by its own terminator
    pub fn write_line(&mut self, line: &Line) -> Result<()> {
        self.write(&line.text)?;
        self.write(line.terminator)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write raw text
    pub fn write(&mut self, data: &str) -> Result<()> {
        self.writer
            .write_all(data.as_bytes())
            .map_err(|e| CleanseError::write(&self.path, e))?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    /// Write every line in order
    pub fn write_all_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a Line>) -> Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CleanseError::write(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Create the parent directory of an output file if needed
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|e| CleanseError::write(parent, e))
        }
        _ => Ok(()),
    }
}
