//! Pruning infrastructure (tree-sitter based)
//!
//! - `parser`   - PythonParser, syntax error detection
//! - `reads`    - names used in a read context
//! - `writes`   - names bound by assignments, loops, definitions, parameters
//! - `lowering` - top-level statements ↔ source text

pub mod lowering;
pub mod parser;
pub mod reads;
pub mod writes;

pub use lowering::{lower_module, render_module};
pub use parser::PythonParser;
pub use reads::collect_used_names;
pub use writes::collect_defined_names;
