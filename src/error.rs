//! Error types for article-insight.
//!
//! Markdown analysis never fails; these errors come from the filesystem-backed
//! article and override stores.

use std::path::PathBuf;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The article is not present in the lifecycle folder(s) searched.
    #[error("Article not found: {0}")]
    NotFound(String),

    /// The article id is not valid base64, not UTF-8, or names a path outside its folder.
    #[error("Invalid article id: {0}")]
    InvalidId(String),

    /// A folder name or status string did not match any lifecycle folder.
    #[error("Unknown lifecycle folder: {0}")]
    UnknownFolder(String),

    /// Filesystem access failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sidecar JSON file could not be parsed.
    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;
