//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// File read/write failed
    #[error("IO error on {path} ({operation}): {source}")]
    IoError {
        path: PathBuf,
        operation: IoOperation,
        source: std::io::Error,
    },

    /// Persisted settings could not be parsed
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Path resolution failed
    #[error("Path resolution failed: {message}")]
    PathResolutionError { message: String },
}

/// IO operation type for error context
#[derive(Debug, Clone, Copy)]
pub enum IoOperation {
    Read,
    Write,
    CreateDir,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoOperation::Read => write!(f, "read"),
            IoOperation::Write => write!(f, "write"),
            IoOperation::CreateDir => write!(f, "create dir"),
        }
    }
}

impl StorageError {
    /// Create an IO error
    pub fn io_error(path: PathBuf, operation: IoOperation, source: std::io::Error) -> Self {
        StorageError::IoError {
            path,
            operation,
            source,
        }
    }

    /// Create a parse error
    pub fn parse_error(path: PathBuf, message: impl Into<String>) -> Self {
        StorageError::ParseError {
            path,
            message: message.into(),
        }
    }

    /// Create a path resolution error
    pub fn path_resolution_error(message: impl Into<String>) -> Self {
        StorageError::PathResolutionError {
            message: message.into(),
        }
    }
}
