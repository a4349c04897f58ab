/*
 * nbscript - Notebook to Python script converter
 *
 * Feature-First Architecture:
 * - shared/      : tree-sitter helpers
 * - features/    : Vertical slices (notebook → pruning → formatting)
 * - pipeline/    : Assembler + converter driving the slices in order
 * - config/      : YAML configuration
 *
 * Single file, single pass, blocking I/O. The only external process is the
 * optional code formatter.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared utilities
pub mod shared;

/// Feature modules (loader, pruning, formatting)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ConverterConfig;
pub use errors::{ConvertError, Result};
pub use features::formatting::{
    CodeFormatter, ExternalFormatter, FormatChange, FormatOutcome, MinimalFormatter,
};
pub use features::notebook::{load_notebook, Cell, CellKind, LoadError, Notebook};
pub use features::pruning::{PruneError, PruneOutcome, UnusedVariablePruner};
pub use pipeline::{ConversionReport, Converter};
