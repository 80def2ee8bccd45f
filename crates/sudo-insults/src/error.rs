//! Error types for the sudo-insults library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sudo-insults operations.
#[derive(Debug, Error)]
pub enum InsultsError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A category token that is not part of the fixed set.
    #[error("unknown insult \"{0}\".")]
    UnknownCategory(String),

    /// The selection resolved to no categories at all.
    #[error("no insults defined.")]
    EmptySelection,

    /// The server answered with a non-success status.
    #[error("could not download {url} (HTTP {status})")]
    Http { url: String, status: u16 },

    /// The request itself failed to connect or send.
    #[error("could not download {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("could not read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Could not locate the program directory.
    #[error("Could not determine program directory: {0}")]
    ProgramDir(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InsultsError {
    /// Whether this error comes from bad command-line input.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            InsultsError::UnknownCategory(_) | InsultsError::EmptySelection
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InsultsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for sudo-insults operations.
pub type Result<T> = std::result::Result<T, InsultsError>;
