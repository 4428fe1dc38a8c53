use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocshelfError {
    #[error("Not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Already exists: '{}'", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl DocshelfError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        DocshelfError::NotFound { path: path.into() }
    }

    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        DocshelfError::AlreadyExists { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, DocshelfError>;
