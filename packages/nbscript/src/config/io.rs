//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Conversion to and from [`ConverterConfig`] lives
//! in `mod.rs`.
//!
//! [`ConverterConfig`]: super::ConverterConfig

use serde::{Deserialize, Serialize};

use super::{FormatterConfig, MarkdownConfig, MinimalConfig};

/// Current schema version
pub const CONFIG_VERSION: u32 = 1;

/// YAML Schema v1
///
/// Every section is optional; missing values take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1); optional here so a missing value
    /// gets a dedicated error
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prune_unused: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_format: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<FormatterConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal: Option<MinimalConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownConfig>,
}
