//! Notebook document builders
//!
//! Produce nbformat JSON text the way Jupyter writes it (multi-line sources
//! split into a list of lines).

use serde_json::{json, Value};

/// Builder for an nbformat 4 document
#[derive(Debug, Clone)]
pub struct NotebookBuilder {
    minor: u32,
    cells: Vec<Value>,
}

impl Default for NotebookBuilder {
    fn default() -> Self {
        Self {
            minor: 5,
            cells: Vec::new(),
        }
    }
}

impl NotebookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minor(mut self, minor: u32) -> Self {
        self.minor = minor;
        self
    }

    /// Add a code cell
    pub fn code(mut self, source: &str) -> Self {
        self.cells.push(json!({
            "cell_type": "code",
            "execution_count": null,
            "metadata": {},
            "outputs": [],
            "source": split_lines(source),
        }));
        self
    }

    /// Add a markdown cell
    pub fn markdown(mut self, source: &str) -> Self {
        self.cells.push(json!({
            "cell_type": "markdown",
            "metadata": {},
            "source": split_lines(source),
        }));
        self
    }

    /// Add a raw cell
    pub fn raw(mut self, source: &str) -> Self {
        self.cells.push(json!({
            "cell_type": "raw",
            "metadata": {},
            "source": source,
        }));
        self
    }

    pub fn build(self) -> Value {
        json!({
            "nbformat": 4,
            "nbformat_minor": self.minor,
            "metadata": {
                "kernelspec": {"name": "python3", "display_name": "Python 3", "language": "python"}
            },
            "cells": self.cells,
        })
    }

    pub fn to_json(self) -> String {
        self.build().to_string()
    }
}

/// Split like Jupyter: every line keeps its trailing newline
pub fn split_lines(source: &str) -> Vec<String> {
    source.split_inclusive('\n').map(str::to_string).collect()
}
