//! Notebook → script conversion use case
//!
//! load → assemble (prune) → format → write. The output file is only touched
//! once every earlier stage has succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::errors::{ConvertError, Result};
use crate::features::formatting::{CodeFormatter, FormatChange, FormatOutcome};
use crate::features::notebook::{load_notebook, CellKind, Notebook};
use crate::pipeline::assembler::{AssemblyReport, TextAssembler};

/// Summary of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_cells: usize,
    pub assembly: AssemblyReport,
    pub format_changes: Vec<FormatChange>,
    /// External formatter that ran, if any
    pub formatter: Option<String>,
}

impl ConversionReport {
    /// Target texts removed by pruning
    pub fn removed_names(&self) -> &[String] {
        &self.assembly.removed
    }

    /// Indices of code cells that were copied without pruning
    pub fn skipped_cells(&self) -> Vec<usize> {
        self.assembly.skipped.iter().map(|s| s.index).collect()
    }
}

/// Script text produced in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub script: String,
    pub assembly: AssemblyReport,
    pub formatting: FormatOutcome,
}

pub struct Converter {
    assembler: TextAssembler,
    formatter: Box<dyn CodeFormatter>,
}

impl Converter {
    /// Build a converter; rejects an invalid configuration
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        let assembler =
            TextAssembler::new(config.prune_unused, config.markdown.comment_prefix.clone());
        let formatter = config.formatter();
        Ok(Self {
            assembler,
            formatter,
        })
    }

    /// Assemble and format an already loaded notebook
    pub fn render(&self, notebook: &Notebook) -> Rendered {
        let assembly = self.assembler.assemble(notebook);
        debug!(
            "Assembled {} code / {} markdown cells with {}",
            assembly.report.code_cells,
            assembly.report.markdown_cells,
            self.formatter.name()
        );
        let formatting = self.formatter.format(&assembly.text);

        Rendered {
            script: formatting.code.clone(),
            assembly: assembly.report,
            formatting,
        }
    }

    /// Convert `input` into a script at `output`
    ///
    /// # Errors
    ///
    /// [`ConvertError::Load`] when the notebook is missing or malformed,
    /// [`ConvertError::Write`] when the script cannot be written. No output
    /// file exists after a load failure.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        let notebook = load_notebook(input)?;
        debug!(
            "{}: {} code, {} markdown, {} cells total",
            input.display(),
            notebook.count(&CellKind::Code),
            notebook.count(&CellKind::Markdown),
            notebook.cells.len()
        );
        let rendered = self.render(&notebook);

        log_changes(input, &rendered.formatting);

        fs::write(output, &rendered.script).map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            "Successfully converted {} to {}",
            input.display(),
            output.display()
        );

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            total_cells: notebook.cells.len(),
            assembly: rendered.assembly,
            format_changes: rendered.formatting.changes,
            formatter: rendered.formatting.tool,
        })
    }
}

fn log_changes(input: &Path, outcome: &FormatOutcome) {
    if outcome.changes.is_empty() {
        return;
    }
    match &outcome.tool {
        Some(tool) => info!(
            "Formatting changes applied to: {} (using {})",
            input.display(),
            tool
        ),
        None => info!("Formatting changes applied to: {}", input.display()),
    }
    for change in &outcome.changes {
        info!("  {}", change);
    }
}
