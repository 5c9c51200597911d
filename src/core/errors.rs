//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for doccov operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Extraction tool or target directory unavailable
    #[error("Environment error: {0}")]
    Environment(String),

    /// Element extraction failures for a single file
    #[error("Extraction error in {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV report errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a file system error wrapping the underlying I/O failure
    pub fn file_system_io(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment(message.into())
    }

    pub fn extraction(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Environment errors abort the run before any file is processed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Environment(_) | Self::Configuration(_))
    }
}

/// Result type alias for doccov operations
pub type Result<T> = std::result::Result<T, Error>;
