use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Directory not found '{path}': {source}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in '{path}' at line {line}")]
    Decode { path: PathBuf, line: usize },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Path of the entry the error is about, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryNotFound { path, .. }
            | Self::NotADirectory { path }
            | Self::EntryUnreadable { path, .. }
            | Self::Decode { path, .. } => Some(path),
            Self::Walk(_) | Self::Output(_) | Self::Config(_) => None,
        }
    }
}

impl From<crate::config::ConfigBuilderError> for EngineError {
    fn from(err: crate::config::ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
