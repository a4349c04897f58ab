//! Shared utilities

pub mod utils;
