use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while importing a recipe folder
#[derive(Error, Debug)]
pub enum ImportError {
    /// Bad command line
    #[error("{0}")]
    Usage(String),

    /// The recipes path exists but is not a directory, or does not exist
    #[error("Error: {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Failed to read a directory or recipe file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A required setting for the selected store backend is missing
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    /// Failed to serialize a recipe
    #[error("Failed to serialize recipe: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The configured API base URL cannot take a path
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Transport failure talking to the KV HTTP API
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The KV HTTP API answered with a non-success status
    #[error("Store rejected write ({status}): {body}")]
    StoreRejected { status: u16, body: String },

    /// The upload command exited unsuccessfully
    #[error("Upload command failed ({code:?}): {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    /// Refused to write under an empty key
    #[error("Refusing to store a recipe with an empty key")]
    EmptyKey,
}
