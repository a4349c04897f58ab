//! Common test utilities for nbscript
//!
//! Notebook JSON builders and on-disk fixtures shared by the integration,
//! CLI and property tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
