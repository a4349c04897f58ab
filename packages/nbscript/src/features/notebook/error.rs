//! Error types for notebook loading

use std::path::PathBuf;

use thiserror::Error;

/// Error type for notebook loading operations
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input path does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error when reading the notebook file
    #[error("Failed to read notebook file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse notebook JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not a notebook we can read
    #[error("Invalid notebook format: {0}")]
    InvalidFormat(String),

    /// Notebook major version not supported
    #[error("Unsupported notebook version: {major} (supported: 3, 4)")]
    UnsupportedVersion { major: u32 },
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, LoadError>;
