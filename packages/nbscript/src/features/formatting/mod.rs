//! Formatting Feature
//!
//! Tidies the assembled script. Never fails: every problem degrades to a
//! less formatted result plus a recorded change.
//!
//! ## Structure
//! - `domain`          - FormatOutcome, FormatChange
//! - `ports`           - CodeFormatter trait
//! - `infrastructure/` - ExternalFormatter (black & co.), MinimalFormatter

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use domain::{FormatChange, FormatOutcome};
pub use error::FormatError;
pub use infrastructure::{ExternalFormatter, MinimalFormatter};
pub use ports::CodeFormatter;
