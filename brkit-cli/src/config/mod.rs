//! CLI configuration file
//!
//! ```toml
//! [processing]
//! default_kind = "word"
//! # default_table = "tables/custom.toml"
//!
//! [output]
//! default_format = "json"
//! pretty_json = false
//! ```
//!
//! Command-line flags override every value here.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use brkit_engine::BoundaryKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Boundary kind used when `--kind` is not given
    pub default_kind: String,

    /// Table definition used when `--table` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_table: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_kind: "sentence".to_string(),
            default_table: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.kind()?;
        config.format()?;
        log::debug!("loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// Default boundary kind
    pub fn kind(&self) -> Result<BoundaryKind> {
        self.processing
            .default_kind
            .parse::<BoundaryKind>()
            .map_err(|e| anyhow::Error::new(CliError::ConfigError(e.to_string())))
    }

    /// Default output format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            anyhow::Error::new(CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.kind().unwrap(), BoundaryKind::Sentence);
        assert_eq!(config.format().unwrap(), OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[processing]\ndefault_kind = \"Word\"\n");
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.kind().unwrap(), BoundaryKind::Word);
        assert_eq!(config.format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_format_and_table() {
        let file = write_config(
            "[processing]\ndefault_table = \"t.toml\"\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
        );
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.format().unwrap(), OutputFormat::Json);
        assert_eq!(config.processing.default_table, Some(PathBuf::from("t.toml")));
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let file = write_config("[processing]\ndefault_kind = \"paragraph\"\n");
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("paragraph"));

        let file = write_config("[output]\ndefault_format = \"xml\"\n");
        assert!(CliConfig::load(file.path()).is_err());

        let file = write_config("[output\n");
        assert!(CliConfig::load(file.path()).is_err());
    }
}
