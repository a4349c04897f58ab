//! On-disk fixtures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Formatter name guaranteed not to exist on the search path
pub const MISSING_FORMATTER: &str = "nbscript-test-missing-formatter";

/// Scratch directory holding a notebook and the path for its script
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Write `notebook_json` as `input.ipynb`
    pub fn with_notebook(notebook_json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.ipynb");
        let output = dir.path().join("output.py");
        fs::write(&input, notebook_json).unwrap();
        Self { dir, input, output }
    }

    /// No input file at all
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.ipynb");
        let output = dir.path().join("output.py");
        Self { dir, input, output }
    }

    /// Write a config file next to the notebook
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("nbscript.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    pub fn script(&self) -> String {
        fs::read_to_string(&self.output).unwrap()
    }
}

/// nbformat 3 notebook with a heading, a code cell and a markdown cell
pub fn fixture_v3_notebook() -> String {
    r##"{
  "nbformat": 3,
  "nbformat_minor": 0,
  "metadata": {"name": "legacy"},
  "worksheets": [
    {
      "cells": [
        {"cell_type": "heading", "level": 2, "metadata": {}, "source": ["Setup"]},
        {"cell_type": "code", "collapsed": false, "input": ["import os\n", "print(os.sep)"], "language": "python", "metadata": {}, "outputs": []},
        {"cell_type": "markdown", "metadata": {}, "source": ["Done."]}
      ],
      "metadata": {}
    }
  ]
}"##
    .to_string()
}
