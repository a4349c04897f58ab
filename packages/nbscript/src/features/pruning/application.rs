//! Prune-cell use case

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::features::pruning::domain::{retain_used, NameUsage, Statement};
use crate::features::pruning::error::PruneError;
use crate::features::pruning::infrastructure::{
    collect_defined_names, collect_used_names, lower_module, render_module, PythonParser,
};

/// Result of pruning one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Rewritten cell text (the input itself when nothing was removed)
    pub code: String,
    /// Source text of every removed target, in removal order
    pub removed: Vec<String>,
    /// `defined - used` of the original cell
    pub unused: BTreeSet<String>,
}

impl PruneOutcome {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Single pass over one version of the cell
struct Pass {
    code: String,
    removed: Vec<String>,
    unused: BTreeSet<String>,
}

/// Unused-variable pruner for notebook code cells
#[derive(Debug, Default, Clone)]
pub struct UnusedVariablePruner {
    parser: PythonParser,
}

impl UnusedVariablePruner {
    pub fn new() -> Self {
        Self {
            parser: PythonParser::new(),
        }
    }

    /// Collect `used` / `defined` for a cell without rewriting it
    pub fn analyze(&self, source: &str) -> Result<NameUsage, PruneError> {
        let tree = self.parser.parse(source)?;
        let root = tree.root_node();
        Ok(NameUsage {
            used: collect_used_names(&root, source),
            defined: collect_defined_names(&root, source),
        })
    }

    /// Prune a cell
    ///
    /// Dropping an assignment can leave the names it read unused, so passes
    /// repeat until one removes nothing. The result is therefore stable under
    /// a second `prune`. This goes further than a single pass would:
    /// `y = 5\nx = y\nprint(1)` loses `x` first and then `y`, where one pass
    /// keeps `y = 5`.
    ///
    /// # Errors
    ///
    /// [`PruneError::Syntax`] when the cell is not valid Python; the caller is
    /// expected to keep the cell as is.
    pub fn prune(&self, source: &str) -> Result<PruneOutcome, PruneError> {
        let first = self.prune_once(source)?;
        let mut outcome = PruneOutcome {
            code: first.code,
            removed: first.removed,
            unused: first.unused,
        };

        let mut progressed = outcome.changed();
        while progressed {
            match self.prune_once(&outcome.code) {
                Ok(pass) if !pass.removed.is_empty() => {
                    debug!("Follow-up pass removed {:?}", pass.removed);
                    outcome.code = pass.code;
                    outcome.removed.extend(pass.removed);
                }
                Ok(_) => progressed = false,
                Err(err) => {
                    warn!("Re-parse of pruned cell failed, keeping last result: {}", err);
                    progressed = false;
                }
            }
        }

        Ok(outcome)
    }

    fn prune_once(&self, source: &str) -> Result<Pass, PruneError> {
        let tree = self.parser.parse(source)?;
        let root = tree.root_node();

        let usage = NameUsage {
            used: collect_used_names(&root, source),
            defined: collect_defined_names(&root, source),
        };
        let unused = usage.unused();

        let mut removed = Vec::new();
        let mut kept = Vec::new();
        for stmt in lower_module(&root, source) {
            if let Statement::Assignment(assign) = &stmt {
                removed.extend(assign.dead_targets(&unused).map(|t| t.text.clone()));
            }
            if let Some(stmt) = retain_used(stmt, &unused) {
                kept.push(stmt);
            }
        }

        let code = if removed.is_empty() {
            source.to_string()
        } else {
            render_module(&kept)
        };

        Ok(Pass {
            code,
            removed,
            unused,
        })
    }
}
