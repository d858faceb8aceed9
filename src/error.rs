//! Error types for HashMill
//!
//! This module defines all error types used throughout the application,
//! providing detailed error information for debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for HashMill operations
#[derive(Error, Debug)]
pub enum HashMillError {
    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output destination could not be opened for appending at startup
    #[error("Cannot open output '{path}' for append: {source}")]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output destination became unwritable mid-run
    #[error("Write to output '{path}' failed: {source}")]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sink lock poisoned by a panicking writer
    #[error("Output sink lock poisoned")]
    SinkPoisoned,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Thread pool error
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),

    /// Summary serialization error
    #[error("Summary serialization error: {0}")]
    SerializationError(String),
}

impl HashMillError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a sink-open error with path context
    pub fn sink_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a sink-write error with path context
    pub fn sink_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if this error is a destination failure (fatal for the whole run)
    pub fn is_sink_failure(&self) -> bool {
        matches!(
            self,
            Self::SinkOpen { .. } | Self::SinkWrite { .. } | Self::SinkPoisoned
        )
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. }
            | Self::SinkOpen { path, .. }
            | Self::SinkWrite { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for HashMill operations
pub type Result<T> = std::result::Result<T, HashMillError>;

impl From<std::io::Error> for HashMillError {
    fn from(err: std::io::Error) -> Self {
        HashMillError::Io {
            path: std::path::PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for HashMillError {
    fn from(err: serde_json::Error) -> Self {
        HashMillError::SerializationError(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| HashMillError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HashMillError::io("/test/path", io_err);
        assert!(err.path().is_some());
        assert_eq!(err.path().unwrap(), &PathBuf::from("/test/path"));
    }

    #[test]
    fn test_sink_failure_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "device full");
        let fatal = HashMillError::sink_write("/out/hashes", io_err);
        assert!(fatal.is_sink_failure());

        let benign = HashMillError::config("batch size must be positive");
        assert!(!benign.is_sink_failure());
    }

    #[test]
    fn test_error_display_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HashMillError::sink_open("/var/log/out.txt", io_err);
        assert!(err.to_string().contains("/var/log/out.txt"));
    }
}
