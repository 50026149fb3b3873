// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the tool itself. Quality problems in the scored project are
/// never errors; they are recorded as findings.
#[derive(Debug, Error)]
pub enum QscoreError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("{} already exists (pass --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, QscoreError>;

impl QscoreError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
