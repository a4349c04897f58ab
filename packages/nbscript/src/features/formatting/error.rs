//! External formatter error types

use thiserror::Error;

/// Why the external formatter produced no output
#[derive(Debug, Error)]
pub enum FormatError {
    /// Program not found on the search path
    #[error("{0} not found")]
    ToolMissing(String),

    /// Program ran and reported failure
    #[error("{program} exited with {}: {stderr}", describe_status(.status))]
    InvocationFailed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    /// Program could not be started for a reason other than absence
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be written or read back
    #[error("Formatter I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
