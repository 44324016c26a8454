use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, rewriting or writing a target file.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error on {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to replace {} with rewritten content", .path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },

    #[error("Invalid regex pattern")]
    InvalidPattern(#[from] regex::Error),
}

impl MigrateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
