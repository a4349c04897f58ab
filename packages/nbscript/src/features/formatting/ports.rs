//! Formatter port (interface)
//!
//! Defines the contract for formatting an assembled script.

use crate::features::formatting::domain::FormatOutcome;

/// Formatter trait - abstraction over the external tool and the fallback
pub trait CodeFormatter {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Format `source`; failures are reported in the outcome, never raised
    fn format(&self, source: &str) -> FormatOutcome;
}
