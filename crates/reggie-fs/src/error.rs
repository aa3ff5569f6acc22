//! Error types for reggie-fs

use std::path::PathBuf;

use crate::Format;

/// Result type for reggie-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reggie-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, format: Format, message: impl ToString) -> Self {
        Self::ConfigParse {
            path: path.into(),
            format,
            message: message.to_string(),
        }
    }

    /// True if this is an I/O error caused by the path not existing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
