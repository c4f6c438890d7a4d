//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors, reported through `anyhow`
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    NoFilesFound(Vec<String>),
    /// Invalid glob pattern
    InvalidPattern(String),
    /// Configuration file error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files_found_display() {
        let error = CliError::NoFilesFound(vec!["*.txt".to_string(), "docs/*.md".to_string()]);
        assert_eq!(
            error.to_string(),
            "No files found matching: *.txt, docs/*.md"
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown kind 'para'".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown kind 'para'");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::InvalidPattern("[".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
