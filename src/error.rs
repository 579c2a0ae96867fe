// File: src/error.rs
use std::path::PathBuf;

/// Errors raised by the drill's collaborators: lesson files and the stats
/// store. The sampler itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum DrillError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize stats: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0} is an invalid word id")]
    InvalidWordId(String),

    #[error("no words found in {}", .0.display())]
    EmptyVocabulary(PathBuf),
}

impl DrillError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
