//! Unused-Variable Pruning Feature
//!
//! Removes top-level assignments whose targets are never read in the same
//! cell. Scope-unaware by construction: the whole cell is one namespace.
//!
//! ## Structure
//! - `domain/`         - Statement, Target, NameUsage, retain_used
//! - `application`     - UnusedVariablePruner
//! - `infrastructure/` - tree-sitter parser, name visitors, lowering

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{PruneOutcome, UnusedVariablePruner};
pub use domain::{NameUsage, Statement};
pub use error::PruneError;
