//! Utility modules

pub mod tree_sitter;
