//! Error types for the cleanser library
//!
//! The binary wraps these in `anyhow` and prints the full cause chain.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a cleanse run
#[derive(Error, Debug)]
pub enum CleanseError {
    #[error("Failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid mask character {0:?}: line terminators cannot be used as a mask")]
    InvalidMask(char),
}

pub type Result<T> = std::result::Result<T, CleanseError>;

impl CleanseError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}
