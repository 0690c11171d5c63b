//! Error types for sqltablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur around table rendering.
///
/// Rendering a well-formed result set never fails; these come from the
/// collaborators around it (input decoding, config files, output sinks,
/// SQL formatters).
#[derive(Error, Debug)]
pub enum SqltabError {
    /// Failed to read a config file
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input could not be interpreted as a result set
    #[error("invalid result set: {0}")]
    InvalidResultSet(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQL formatter error
    #[error("failed to format SQL: {0}")]
    Format(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
