//! Pruning error types

use thiserror::Error;

/// Why a cell could not be pruned
///
/// Never fatal: the caller keeps the cell text unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PruneError {
    /// Cell is not valid Python (magics, shell escapes, partial code)
    #[error("Syntax error at line {line}, column {column}: {detail}")]
    Syntax {
        line: usize,
        column: usize,
        detail: String,
    },

    /// Tree-sitter could not be set up or gave no tree
    #[error("Parser error: {0}")]
    Parser(String),
}

impl PruneError {
    pub fn parser(msg: impl Into<String>) -> Self {
        PruneError::Parser(msg.into())
    }
}
