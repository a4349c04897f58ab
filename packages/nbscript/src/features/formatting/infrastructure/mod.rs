//! Formatter implementations

pub mod external;
pub mod minimal;

pub use external::ExternalFormatter;
pub use minimal::MinimalFormatter;
