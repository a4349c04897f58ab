//! Jupyter notebook (ipynb) reader
//!
//! Reads nbformat 4 documents directly and upgrades nbformat 3 documents
//! (worksheets, `input` fields, heading cells) on the fly.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::features::notebook::domain::{Cell, CellKind, Notebook};
use crate::features::notebook::error::{LoadError, Result};

/// Raw document, only the fields the converter consumes
#[derive(Debug, Deserialize)]
struct RawNotebook {
    nbformat: u32,
    #[serde(default)]
    nbformat_minor: u32,
    #[serde(default)]
    cells: Option<Vec<RawCell>>,
    #[serde(default)]
    worksheets: Option<Vec<RawWorksheet>>,
}

/// nbformat 3 worksheet
#[derive(Debug, Deserialize)]
struct RawWorksheet {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: Option<MultilineText>,
    /// nbformat 3 code cells keep their text here
    #[serde(default)]
    input: Option<MultilineText>,
    /// nbformat 3 heading level
    #[serde(default)]
    level: Option<u32>,
}

/// Multi-line strings are stored either whole or as a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Text(String),
    Lines(Vec<String>),
}

impl MultilineText {
    fn into_string(self) -> String {
        match self {
            MultilineText::Text(text) => text,
            MultilineText::Lines(lines) => lines.concat(),
        }
    }
}

/// Load a notebook from a file path
///
/// # Errors
///
/// - [`LoadError::FileNotFound`] when the path does not exist
/// - any other [`LoadError`] when the file is unreadable or not a notebook
pub fn load_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    let notebook = parse_notebook_str(&content)?;
    debug!(
        "Loaded {} ({} cells, nbformat {})",
        path.display(),
        notebook.cells.len(),
        notebook.nbformat
    );
    Ok(notebook)
}

/// Parse a notebook from its JSON text
pub fn parse_notebook_str(content: &str) -> Result<Notebook> {
    let raw: RawNotebook = serde_json::from_str(content)?;

    let cells = match raw.nbformat {
        4 => {
            let cells = raw.cells.ok_or_else(|| {
                LoadError::InvalidFormat("nbformat 4 document has no `cells` array".to_string())
            })?;
            cells
                .into_iter()
                .enumerate()
                .map(|(index, cell)| convert_v4_cell(index, cell))
                .collect::<Result<Vec<_>>>()?
        }
        3 => {
            let worksheets = raw.worksheets.ok_or_else(|| {
                LoadError::InvalidFormat(
                    "nbformat 3 document has no `worksheets` array".to_string(),
                )
            })?;
            worksheets
                .into_iter()
                .flat_map(|ws| ws.cells)
                .map(upgrade_v3_cell)
                .collect()
        }
        major => return Err(LoadError::UnsupportedVersion { major }),
    };

    debug!("nbformat {}.{}", raw.nbformat, raw.nbformat_minor);
    Ok(Notebook::new(raw.nbformat, cells))
}

fn convert_v4_cell(index: usize, cell: RawCell) -> Result<Cell> {
    let source = cell.source.ok_or_else(|| {
        LoadError::InvalidFormat(format!(
            "cell {index} ({}) has no `source`",
            cell.cell_type
        ))
    })?;

    Ok(Cell {
        kind: CellKind::from_cell_type(&cell.cell_type),
        source: source.into_string(),
    })
}

/// Upgrade one nbformat 3 cell to its version 4 shape
fn upgrade_v3_cell(cell: RawCell) -> Cell {
    let text = |field: Option<MultilineText>| field.map(MultilineText::into_string).unwrap_or_default();

    match cell.cell_type.as_str() {
        "code" => Cell::code(text(cell.input)),
        "heading" => {
            let level = cell.level.unwrap_or(1).max(1) as usize;
            let heading = text(cell.source).replace('\n', " ");
            Cell::markdown(format!("{} {}", "#".repeat(level), heading))
        }
        _ => Cell {
            kind: CellKind::from_cell_type(&cell.cell_type),
            source: text(cell.source),
        },
    }
}
