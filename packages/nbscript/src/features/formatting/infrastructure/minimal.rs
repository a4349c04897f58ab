//! Minimal line formatter
//!
//! Fallback when no external formatter is available: puts a blank line before
//! (when missing) and after every line starting with a definition marker.
//! Everything else, trailing newlines included, passes through untouched.

use crate::features::formatting::domain::{FormatChange, FormatOutcome};
use crate::features::formatting::ports::CodeFormatter;

/// Markers used when none are configured
pub const DEFAULT_DEFINITION_MARKERS: [&str; 2] = ["def ", "class "];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalFormatter {
    markers: Vec<String>,
}

impl Default for MinimalFormatter {
    fn default() -> Self {
        Self::with_markers(DEFAULT_DEFINITION_MARKERS)
    }
}

impl MinimalFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    fn is_definition(&self, line: &str) -> bool {
        self.markers.iter().any(|m| line.starts_with(m.as_str()))
    }
}

impl CodeFormatter for MinimalFormatter {
    fn name(&self) -> &str {
        "minimal"
    }

    fn format(&self, source: &str) -> FormatOutcome {
        let mut lines: Vec<&str> = Vec::new();
        let mut changes = Vec::new();
        let mut prev_blank = true;

        for (idx, line) in source.split('\n').enumerate() {
            let line_no = idx + 1;
            if self.is_definition(line) {
                if !prev_blank && !lines.is_empty() {
                    lines.push("");
                    changes.push(FormatChange::BlankLineBefore { line: line_no });
                }
                lines.push(line);
                lines.push("");
                changes.push(FormatChange::BlankLineAfter { line: line_no });
                prev_blank = true;
            } else {
                lines.push(line);
                prev_blank = line.trim().is_empty();
            }
        }

        FormatOutcome::new(lines.join("\n"), changes)
    }
}
