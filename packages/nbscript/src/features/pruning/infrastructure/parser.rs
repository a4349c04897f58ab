//! Tree-sitter Python parser
//!
//! This is where the tree-sitter dependency lives. Tree-sitter recovers from
//! errors instead of failing, so a tree containing any ERROR or MISSING node is
//! reported as a syntax error. The grammar also accepts Python 2 `print` and
//! `exec` statements, which Python 3 rejects; those are syntax errors too.

use tree_sitter::{Parser as TSParser, Tree};

use crate::features::pruning::error::PruneError;
use crate::shared::utils::tree_sitter::{
    extract_node_text, find_first_error, find_first_kind, start_line_col,
};

/// Longest offending snippet quoted in a syntax error
const SNIPPET_LIMIT: usize = 40;

/// Grammar nodes that only exist in Python 2
const PYTHON2_STATEMENTS: [&str; 2] = ["print_statement", "exec_statement"];

/// Python parser for single code cells
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a cell, rejecting anything tree-sitter had to recover from
    pub fn parse(&self, source: &str) -> Result<Tree, PruneError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| PruneError::parser(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| PruneError::parser("Failed to parse source code"))?;

        if let Some(error) = find_first_error(&tree.root_node()) {
            let (line, column) = start_line_col(&error);
            let detail = if error.is_missing() {
                format!("missing {}", error.kind())
            } else {
                let snippet = extract_node_text(&error, source)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim();
                format!("unexpected {:?}", truncate(snippet, SNIPPET_LIMIT))
            };
            return Err(PruneError::Syntax {
                line,
                column,
                detail,
            });
        }

        if let Some(legacy) = find_first_kind(&tree.root_node(), &PYTHON2_STATEMENTS) {
            let (line, column) = start_line_col(&legacy);
            return Err(PruneError::Syntax {
                line,
                column,
                detail: format!("Python 2 {}", legacy.kind().replace('_', " ")),
            });
        }

        Ok(tree)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
