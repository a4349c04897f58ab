//! Feature modules
//!
//! Each feature is a vertical slice:
//! - `notebook/`   : .ipynb loading
//! - `pruning/`    : unused-assignment elimination per code cell
//! - `formatting/` : external formatter with a minimal line-based fallback

pub mod formatting;
pub mod notebook;
pub mod pruning;
