//! Configuration system
//!
//! Defaults reproduce the plain CLI behaviour (prune, format with `black`).
//! A YAML file (see [`io::ConfigFileV1`]) can override any of them, and the
//! CLI flags override the file.

pub mod error;
pub mod io;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult};
use io::{ConfigFileV1, CONFIG_VERSION};

use crate::features::formatting::infrastructure::external::DEFAULT_FORMATTER;
use crate::features::formatting::infrastructure::minimal::DEFAULT_DEFINITION_MARKERS;
use crate::features::formatting::{CodeFormatter, ExternalFormatter, MinimalFormatter};

/// External formatter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Executable looked up on the search path
    pub program: String,
    /// Arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_FORMATTER.to_string(),
            args: Vec::new(),
        }
    }
}

/// Minimal (fallback) formatter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimalConfig {
    /// Line prefixes treated as definitions
    pub definition_markers: Vec<String>,
}

impl Default for MinimalConfig {
    fn default() -> Self {
        Self {
            definition_markers: DEFAULT_DEFINITION_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Markdown cell rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Prefix put in front of every markdown line
    pub comment_prefix: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "# ".to_string(),
        }
    }
}

/// Complete converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub prune_unused: bool,
    pub external_format: bool,
    pub formatter: FormatterConfig,
    pub minimal: MinimalConfig,
    pub markdown: MarkdownConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            prune_unused: true,
            external_format: true,
            formatter: FormatterConfig::default(),
            minimal: MinimalConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl ConverterConfig {
    pub fn with_prune_unused(mut self, enabled: bool) -> Self {
        self.prune_unused = enabled;
        self
    }

    pub fn with_external_format(mut self, enabled: bool) -> Self {
        self.external_format = enabled;
        self
    }

    pub fn with_formatter(mut self, program: impl Into<String>, args: Vec<String>) -> Self {
        self.formatter = FormatterConfig {
            program: program.into(),
            args,
        };
        self
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let defaults = Self::default();
        let config = Self {
            prune_unused: file.prune_unused.unwrap_or(defaults.prune_unused),
            external_format: file.external_format.unwrap_or(defaults.external_format),
            formatter: file.formatter.unwrap_or(defaults.formatter),
            minimal: file.minimal.unwrap_or(defaults.minimal),
            markdown: file.markdown.unwrap_or(defaults.markdown),
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a complete v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(CONFIG_VERSION),
            prune_unused: Some(self.prune_unused),
            external_format: Some(self.external_format),
            formatter: Some(self.formatter.clone()),
            minimal: Some(self.minimal.clone()),
            markdown: Some(self.markdown.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.formatter.program.trim().is_empty() {
            return Err(ConfigError::validation("formatter.program must not be empty"));
        }
        if self.minimal.definition_markers.is_empty() {
            return Err(ConfigError::validation(
                "minimal.definition_markers must list at least one marker",
            ));
        }
        if self.minimal.definition_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::validation(
                "minimal.definition_markers must not contain empty markers",
            ));
        }
        if !self.markdown.comment_prefix.starts_with('#') {
            return Err(ConfigError::validation(format!(
                "markdown.comment_prefix must start with '#', got {:?}",
                self.markdown.comment_prefix
            )));
        }
        Ok(())
    }

    pub fn minimal_formatter(&self) -> MinimalFormatter {
        MinimalFormatter::with_markers(self.minimal.definition_markers.iter().cloned())
    }

    pub fn external_formatter(&self) -> ExternalFormatter {
        ExternalFormatter::new(self.formatter.program.clone())
            .with_args(self.formatter.args.iter().cloned())
            .with_fallback(self.minimal_formatter())
    }

    /// Formatter selected by `external_format`
    pub fn formatter(&self) -> Box<dyn CodeFormatter> {
        if self.external_format {
            Box::new(self.external_formatter())
        } else {
            Box::new(self.minimal_formatter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert!(config.prune_unused);
        assert!(config.external_format);
        assert_eq!(config.formatter.program, "black");
        assert_eq!(config.minimal.definition_markers, vec!["def ", "class "]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_formatter_selection() {
        let config = ConverterConfig::default();
        assert_eq!(config.formatter().name(), "black");
        assert_eq!(config.with_external_format(false).formatter().name(), "minimal");
    }

    #[test]
    fn test_validation_rejects_empty_program() {
        let config = ConverterConfig::default().with_formatter("  ", Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_bad_markers() {
        let mut config = ConverterConfig::default();
        config.minimal.definition_markers.clear();
        assert!(config.validate().is_err());

        config.minimal.definition_markers = vec!["def ".into(), String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_comment_prefix() {
        let result = ConverterConfig::from_yaml_str("version: 1\nmarkdown:\n  comment_prefix: '// '\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
