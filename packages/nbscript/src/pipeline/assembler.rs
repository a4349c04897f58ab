/*
 * Text Assembler
 *
 * Concatenates cells in document order:
 * - code      → (pruned) source + blank line
 * - markdown  → every line commented + blank line
 * - other     → dropped
 *
 * Cells that fail to parse are copied verbatim; a bad cell never aborts the
 * conversion.
 */

use tracing::{debug, warn};

use crate::features::notebook::{Cell, CellKind, Notebook};
use crate::features::pruning::{PruneError, UnusedVariablePruner};

/// Separator appended after every emitted cell
pub const CELL_SEPARATOR: &str = "\n\n";

/// Code cell kept as is because it did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCell {
    /// 0-based position in the notebook
    pub index: usize,
    pub error: PruneError,
}

/// What the assembler did, cell by cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub code_cells: usize,
    pub markdown_cells: usize,
    pub ignored_cells: usize,
    /// Code cells that lost at least one assignment
    pub pruned_cells: usize,
    /// Removed target texts, in notebook order
    pub removed: Vec<String>,
    pub skipped: Vec<SkippedCell>,
}

/// Assembled script text plus its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub text: String,
    pub report: AssemblyReport,
}

#[derive(Debug, Clone)]
pub struct TextAssembler {
    pruner: Option<UnusedVariablePruner>,
    comment_prefix: String,
}

impl Default for TextAssembler {
    fn default() -> Self {
        Self::new(true, "# ")
    }
}

impl TextAssembler {
    pub fn new(prune_unused: bool, comment_prefix: impl Into<String>) -> Self {
        Self {
            pruner: prune_unused.then(UnusedVariablePruner::new),
            comment_prefix: comment_prefix.into(),
        }
    }

    pub fn prunes(&self) -> bool {
        self.pruner.is_some()
    }

    pub fn assemble(&self, notebook: &Notebook) -> Assembly {
        let mut text = String::new();
        let mut report = AssemblyReport::default();

        for (index, cell) in notebook.cells.iter().enumerate() {
            match &cell.kind {
                CellKind::Code => {
                    report.code_cells += 1;
                    text.push_str(&self.code_cell(index, cell, &mut report));
                }
                CellKind::Markdown => {
                    report.markdown_cells += 1;
                    text.push_str(&self.render_markdown(&cell.source));
                }
                CellKind::Other(cell_type) => {
                    report.ignored_cells += 1;
                    debug!("Ignoring {} cell at index {}", cell_type, index);
                    continue;
                }
            }
            text.push_str(CELL_SEPARATOR);
        }

        Assembly { text, report }
    }

    /// Prefix every line with the comment marker; empty text gives one bare marker
    ///
    /// A final line terminator does not start another line, and `\r\n` counts
    /// as one terminator.
    pub fn render_markdown(&self, source: &str) -> String {
        if source.is_empty() {
            return self.comment_prefix.clone();
        }
        source
            .lines()
            .map(|line| format!("{}{}", self.comment_prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn code_cell(&self, index: usize, cell: &Cell, report: &mut AssemblyReport) -> String {
        let Some(pruner) = &self.pruner else {
            return cell.source.clone();
        };

        match pruner.prune(&cell.source) {
            Ok(outcome) => {
                if outcome.changed() {
                    debug!("Cell {}: removed {:?}", index, outcome.removed);
                    report.pruned_cells += 1;
                    report.removed.extend(outcome.removed);
                }
                outcome.code
            }
            Err(err) => {
                warn!("Syntax error, skipping variable removal: {}", err);
                report.skipped.push(SkippedCell { index, error: err });
                cell.source.clone()
            }
        }
    }
}
