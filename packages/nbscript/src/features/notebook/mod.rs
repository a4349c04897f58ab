//! Notebook Feature
//!
//! Loads `.ipynb` documents into an ordered list of cells.
//!
//! ## Structure
//! - `domain`         - Notebook, Cell, CellKind
//! - `error`          - LoadError
//! - `infrastructure` - nbformat JSON reader (v3 and v4)

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Cell, CellKind, Notebook};
pub use error::LoadError;
pub use infrastructure::{load_notebook, parse_notebook_str};
