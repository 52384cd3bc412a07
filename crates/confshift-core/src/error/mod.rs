//! Error types and result aliases for confshift operations.
//!
//! Provides a unified error type that covers every failure of the
//! load/flatten/emit pipeline with actionable error messages.

use std::fmt;
use thiserror::Error;

/// Line/column position reported by an underlying parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Unified error type for all confshift operations
#[derive(Error, Debug)]
pub enum ConfShiftError {
    // Loader errors
    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// `message` carries the parser diagnostic; `location` repeats its
    /// position in structured form when the parser reports one.
    #[error("Failed to parse {format} file {path}: {message}")]
    Parse {
        path: String,
        format: &'static str,
        message: String,
        location: Option<Location>,
    },

    // Flatten / emit errors
    #[error("Type error: {message}")]
    Type { message: String },

    #[error("Flattened key '{key}' is produced by more than one path")]
    KeyCollision { key: String },

    #[error("Failed to set environment variable '{key}': {reason}")]
    EnvWrite { key: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for confshift operations
pub type ConfShiftResult<T> = Result<T, ConfShiftError>;

impl ConfShiftError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a type error for an operation that needs a mapping
    pub fn not_a_mapping(operation: &str, found: &str) -> Self {
        Self::Type {
            message: format!("{} requires a mapping, found {}", operation, found),
        }
    }

    /// Map a read failure of a `format` file.
    ///
    /// `NotFound` becomes `FileNotFound` and content that is not valid UTF-8
    /// becomes a parse error; anything else stays an IO error.
    pub fn read_failure(path: &str, format: &'static str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::InvalidData => Self::Parse {
                path: path.to_string(),
                format,
                message: source.to_string(),
                location: None,
            },
            _ => Self::io(format!("Failed to read {}", path), source),
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConfShiftError::UnsupportedFormat { .. } => "unsupported_format",
            ConfShiftError::FileNotFound { .. } => "file_not_found",
            ConfShiftError::Parse { .. } => "parse",
            ConfShiftError::Type { .. } => "type",
            ConfShiftError::KeyCollision { .. } => "key_collision",
            ConfShiftError::EnvWrite { .. } => "env_write",
            ConfShiftError::Io { .. } => "io",
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConfShiftError::UnsupportedFormat { .. } => {
                Some("Use a .yaml file or an INI-style .cfg/.conf file")
            },
            ConfShiftError::FileNotFound { .. } => Some("Check the input path and try again"),
            ConfShiftError::KeyCollision { .. } => {
                Some("Pick a separator that does not appear in your keys, or drop --strict")
            },
            ConfShiftError::EnvWrite { .. } => {
                Some("Environment variable names must be non-empty and free of '=' and NUL")
            },
            _ => None,
        }
    }
}
