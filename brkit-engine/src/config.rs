//! Segmenter configuration

use crate::error::{EngineError, Result};
use crate::kinds::BoundaryKind;
use std::path::{Path, PathBuf};

/// What a [`Segmenter`](crate::Segmenter) scans for and what it reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    kind: BoundaryKind,
    custom_table: Option<PathBuf>,
    include_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: BoundaryKind::Sentence,
            custom_table: None,
            include_text: true,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Built-in kind, ignored when a custom table is set
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Path of a TOML table definition replacing the built-in kind
    pub fn custom_table(&self) -> Option<&Path> {
        self.custom_table.as_deref()
    }

    /// Whether segments carry a copy of their text
    pub fn include_text(&self) -> bool {
        self.include_text
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the built-in kind
    pub fn kind(mut self, kind: BoundaryKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Load tables from a definition file instead of a built-in kind
    pub fn custom_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.custom_table = Some(path.into());
        self
    }

    /// Copy each segment's text into the output
    pub fn include_text(mut self, include: bool) -> Self {
        self.config.include_text = include;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if let Some(path) = &self.config.custom_table {
            if path.as_os_str().is_empty() {
                return Err(EngineError::ConfigError(
                    "custom table path is empty".to_string(),
                ));
            }
            if !path.is_file() {
                return Err(EngineError::ConfigError(format!(
                    "custom table {} does not exist or is not a file",
                    path.display()
                )));
            }
        }

        Ok(self.config)
    }
}
