//! Error types for nbscript
//!
//! Conversion-aborting failures. Recoverable conditions (cell syntax errors,
//! formatter failures) are handled inside their features and never surface
//! here.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::notebook::LoadError;

/// Main error type for a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Notebook could not be loaded (missing file, malformed document)
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration file rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output script could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True when the input notebook does not exist
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ConvertError::Load(LoadError::FileNotFound(_)))
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
