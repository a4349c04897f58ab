//! External formatter executor
//!
//! Writes the script to a scratch `.py` file, runs the formatter on it in
//! place and reads the result back. The scratch file is a `TempPath`, so it
//! is removed when `run` returns on any path.

use std::fs;
use std::io::{ErrorKind, Write};
use std::process::Command;

use tracing::{debug, warn};

use crate::features::formatting::domain::{FormatChange, FormatOutcome};
use crate::features::formatting::error::FormatError;
use crate::features::formatting::infrastructure::minimal::MinimalFormatter;
use crate::features::formatting::ports::CodeFormatter;

/// Program used when none is configured
pub const DEFAULT_FORMATTER: &str = "black";

/// Formatter backed by an executable on the search path
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
    fallback: MinimalFormatter,
}

impl Default for ExternalFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            fallback: MinimalFormatter::default(),
        }
    }

    /// Extra arguments placed before the file path
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Formatter used when the program is missing
    pub fn with_fallback(mut self, fallback: MinimalFormatter) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program on a scratch copy of `source`
    pub fn run(&self, source: &str) -> Result<String, FormatError> {
        let mut file = tempfile::Builder::new()
            .prefix("nbscript-")
            .suffix(".py")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;
        // Close our handle; the path is still deleted on drop
        let path = file.into_temp_path();

        debug!("Running {} on {}", self.program, path.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path.as_os_str())
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => FormatError::ToolMissing(self.program.clone()),
                _ => FormatError::Spawn {
                    program: self.program.clone(),
                    source: err,
                },
            })?;

        if !output.status.success() {
            return Err(FormatError::InvocationFailed {
                program: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(fs::read_to_string(&*path)?)
    }
}

impl CodeFormatter for ExternalFormatter {
    fn name(&self) -> &str {
        self.program()
    }

    fn format(&self, source: &str) -> FormatOutcome {
        match self.run(source) {
            Ok(code) => FormatOutcome::new(
                code,
                vec![FormatChange::ExternalTool {
                    program: self.program.clone(),
                }],
            )
            .with_tool(&self.program),
            Err(FormatError::ToolMissing(program)) => {
                warn!("{} not found. Using basic formatter.", program);
                self.fallback.format(source)
            }
            Err(err) => {
                warn!("{} formatting failed: {}", self.program, err);
                FormatOutcome::new(
                    source.to_string(),
                    vec![FormatChange::ExternalToolFailed {
                        program: self.program.clone(),
                        reason: err.to_string(),
                    }],
                )
                .with_tool(&self.program)
            }
        }
    }
}
