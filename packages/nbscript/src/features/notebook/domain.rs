//! Notebook domain model

use std::fmt;

/// Loaded notebook: ordered cells, read-only after load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    /// nbformat major version the document was written in
    pub nbformat: u32,
    /// Cells in document order
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(nbformat: u32, cells: Vec<Cell>) -> Self {
        Self { nbformat, cells }
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: &CellKind) -> usize {
        self.cells.iter().filter(|c| &c.kind == kind).count()
    }
}

/// Individual notebook cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Cell text, multi-line sources already joined
    pub source: String,
}

impl Cell {
    pub fn code(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Code,
            source: source.into(),
        }
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markdown,
            source: source.into(),
        }
    }

    pub fn other(cell_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Other(cell_type.into()),
            source: source.into(),
        }
    }
}

/// Type of notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Executable code cell
    Code,
    /// Markdown documentation cell
    Markdown,
    /// Anything else (`raw`, unknown types); keeps the declared type name
    Other(String),
}

impl CellKind {
    /// Map a `cell_type` value from the document
    pub fn from_cell_type(cell_type: &str) -> Self {
        match cell_type {
            "code" => CellKind::Code,
            "markdown" => CellKind::Markdown,
            other => CellKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Code => write!(f, "code"),
            CellKind::Markdown => write!(f, "markdown"),
            CellKind::Other(name) => write!(f, "{name}"),
        }
    }
}
