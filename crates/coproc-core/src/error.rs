//! Error types for Coproc Core.
//!
//! Registry operations are total and never produce these errors; they come
//! from the host metrics probes, which touch the filesystem and the OS.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the coproc crates.
#[derive(Debug, Error)]
pub enum CoprocError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Metrics errors
    #[error("Invalid PID file {path}: {message}")]
    InvalidPidFile { path: PathBuf, message: String },

    #[error("Process not found: {pid}")]
    ProcessNotFound { pid: u32 },

    #[error("No disk found for path: {0}")]
    DiskNotFound(PathBuf),
}

/// Result type alias for coproc operations.
pub type Result<T> = std::result::Result<T, CoprocError>;

impl CoprocError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CoprocError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}
