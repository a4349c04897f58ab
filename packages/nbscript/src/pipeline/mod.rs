//! Pipeline orchestration

pub mod assembler;
pub mod converter;

pub use assembler::{Assembly, AssemblyReport, SkippedCell, TextAssembler};
pub use converter::{ConversionReport, Converter, Rendered};
