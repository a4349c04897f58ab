//! CLI tests for the `nbscript` binary

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn convert_with_builtin_formatter() {
    let nb = NotebookBuilder::new()
        .markdown("Intro")
        .code("x = 5\nprint(1)")
        .to_json();
    let ws = Workspace::with_notebook(&nb);

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output).arg("--no-format");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Successfully converted"));
    assert_eq!(ws.script(), "# Intro\n\nprint(1)\n\n\n");
}

#[test]
fn no_black_alias_and_no_remove_unused() {
    let nb = NotebookBuilder::new().code("x = 5\nprint(1)").to_json();
    let ws = Workspace::with_notebook(&nb);

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input)
        .arg(&ws.output)
        .arg("--no-black")
        .arg("--no-remove-unused");

    cmd.assert().success();
    assert_eq!(ws.script(), "x = 5\nprint(1)\n\n");
}

#[test]
fn missing_input_fails_without_output() {
    let ws = Workspace::empty();

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
    assert!(!ws.output.exists());
}

#[test]
fn syntax_error_cell_is_reported_but_not_fatal() {
    let nb = NotebookBuilder::new().code("!pip install numpy").to_json();
    let ws = Workspace::with_notebook(&nb);

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output).arg("--no-format");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Syntax error, skipping variable removal"));
    assert_eq!(ws.script(), "!pip install numpy\n\n");
}

#[test]
fn missing_formatter_falls_back() {
    let nb = NotebookBuilder::new().code("x = 1\ndef f():\n    return x").to_json();
    let ws = Workspace::with_notebook(&nb);
    let config = ws.write_config(&format!(
        "version: 1\nformatter:\n  program: {MISSING_FORMATTER}\n"
    ));

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output).arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Using basic formatter"))
        .stderr(predicate::str::contains(
            "Added newline before function/class definition at line 2",
        ));
    assert_eq!(ws.script(), "x = 1\n\ndef f():\n\n    return x\n\n");
}

#[test]
fn invalid_config_fails() {
    let nb = NotebookBuilder::new().code("print(1)").to_json();
    let ws = Workspace::with_notebook(&nb);
    let config = ws.write_config("version: 1\nblack: true\n");

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output).arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
    assert!(!ws.output.exists());
}

#[test]
fn quiet_suppresses_info() {
    let nb = NotebookBuilder::new().code("print(1)").to_json();
    let ws = Workspace::with_notebook(&nb);

    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg(&ws.input).arg(&ws.output).arg("--no-format").arg("-q");

    cmd.assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_arguments_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("nbscript");
    cmd.arg("only-input.ipynb");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
