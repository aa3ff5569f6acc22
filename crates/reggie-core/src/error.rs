//! Error types for reggie-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] reggie_fs::Error),

    #[error("Missing required [{section}] table in {path}")]
    MissingSection { path: PathBuf, section: String },

    #[error("Invalid sysconfig at {path}, line {line}: {message}")]
    Sysconfig {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl Error {
    /// True if the underlying cause is a path that does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Fs(e) => e.is_not_found(),
            _ => false,
        }
    }
}
