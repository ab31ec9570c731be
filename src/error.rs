//! Error types for summary generation.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for reading a book and writing its summary.
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing survived filtering, so there is no catalog to write.
    #[error("no markdown content found to summarize")]
    NoContent,

    /// The project config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project config file is not valid JSON for the expected shape.
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The sort token could not be turned into a prefix pattern.
    #[error("invalid sort token {token:?}: {source}")]
    SortToken {
        token: String,
        #[source]
        source: regex::Error,
    },

    /// Writing the summary file failed. The file may be left truncated.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result with the crate error.
pub type Result<T> = std::result::Result<T, Error>;
