//! Notebook infrastructure (JSON document reader)

pub mod ipynb;

pub use ipynb::{load_notebook, parse_notebook_str};
