//! Generate config command implementation

use anyhow::{Context, Result};
use brkit_engine::TEMPLATE;
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(path) = &self.output else {
            io::stdout().write_all(TEMPLATE.as_bytes())?;
            return Ok(());
        };

        fs::write(path, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Table template written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the classes and transition rows");
        println!("2. Validate your table:");
        println!("   brkit validate -t {}", path.display());
        println!("3. Use it for processing:");
        println!("   brkit process -i input.txt -t {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brkit_engine::TableDefinition;
    use tempfile::TempDir;

    #[test]
    fn test_written_template_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("table.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };
        args.execute().unwrap();

        let definition = TableDefinition::from_file(&output_path).unwrap();
        assert_eq!(definition.metadata.name, "cluster");
        assert!(definition.into_data().is_ok());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let args = GenerateConfigArgs {
            output: Some(PathBuf::from("/nonexistent/dir/table.toml")),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
