//! Formatting domain model

use std::fmt;

/// Formatted text plus what was done to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    pub code: String,
    pub changes: Vec<FormatChange>,
    /// External program that ran, if any (set even when it failed)
    pub tool: Option<String>,
}

impl FormatOutcome {
    pub fn new(code: String, changes: Vec<FormatChange>) -> Self {
        Self {
            code,
            changes,
            tool: None,
        }
    }

    pub fn with_tool(mut self, program: impl Into<String>) -> Self {
        self.tool = Some(program.into());
        self
    }
}

/// One recorded formatting change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatChange {
    /// Blank line inserted before a definition (1-based source line)
    BlankLineBefore { line: usize },
    /// Blank line inserted after a definition (1-based source line)
    BlankLineAfter { line: usize },
    /// External formatter rewrote the script
    ExternalTool { program: String },
    /// External formatter failed; text left unformatted
    ExternalToolFailed { program: String, reason: String },
}

impl fmt::Display for FormatChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatChange::BlankLineBefore { line } => write!(
                f,
                "Added newline before function/class definition at line {line}"
            ),
            FormatChange::BlankLineAfter { line } => write!(
                f,
                "Added newline after function/class definition at line {line}"
            ),
            FormatChange::ExternalTool { program } => write!(f, "Formatted using {program}"),
            FormatChange::ExternalToolFailed { program, reason } => {
                write!(f, "{program} formatting failed: {reason}")
            }
        }
    }
}
