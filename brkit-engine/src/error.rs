//! Engine error types

use brkit_core::{ScanError, TableError};
use thiserror::Error;

/// Errors from kinds, table definitions, the data cache and segmentation
#[derive(Error, Debug)]
pub enum EngineError {
    /// Built-in tables failed validation
    #[error("built-in '{kind}' data is invalid: {source}")]
    BuiltinData {
        /// Kind whose tables were rejected
        kind: &'static str,
        /// Underlying table error
        #[source]
        source: TableError,
    },

    /// Table construction error
    #[error("invalid table: {0}")]
    Table(#[from] TableError),

    /// Scanner rejected an offset
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Unknown boundary kind name
    #[error("unknown boundary kind '{name}' (expected character, word, sentence or line)")]
    UnknownKind {
        /// The name as given
        name: String,
    },

    /// Table definition is structurally wrong
    #[error("invalid table definition: {0}")]
    Definition(String),

    /// Table definition could not be parsed
    #[error("failed to parse table definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// Table definition could not be serialized
    #[error("failed to serialize table definition: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
