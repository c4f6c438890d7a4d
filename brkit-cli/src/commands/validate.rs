//! Validate command implementation

use anyhow::{Context, Result};
use brkit_engine::TableDefinition;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Table definition file to validate
    #[arg(short = 't', long, value_name = "FILE", required = true)]
    pub table: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.report(&mut std::io::stdout())
    }

    fn report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Validating table definition: {}", self.table.display())?;

        let definition = TableDefinition::from_file(&self.table)
            .with_context(|| format!("Failed to load {}", self.table.display()))?;
        let description = definition.metadata.description.clone();
        let class_names = definition.classes.names.clone();

        match definition.into_data() {
            Ok(data) => {
                writeln!(out, "✓ Table is valid!")?;
                writeln!(out, "  Name: {}", data.name())?;
                if let Some(description) = description {
                    writeln!(out, "  Description: {description}")?;
                }
                writeln!(
                    out,
                    "  Classes ({}): {}",
                    class_names.len(),
                    class_names.join(", ")
                )?;
                writeln!(out, "  Forward states: {}", data.forward().rows())?;
                writeln!(out, "  Backward states: {}", data.backward().rows())?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Table is invalid!")?;
                writeln!(out, "  Error: {e}")?;
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brkit_engine::TEMPLATE;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn table_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_validate_template() {
        let file = table_file(TEMPLATE);
        let args = ValidateArgs {
            table: file.path().to_path_buf(),
        };

        let mut out = Vec::new();
        args.report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name: cluster"));
        assert!(text.contains("Classes (5): mark, base, cr, lf, eot"));
        assert!(text.contains("Forward states: 5"));
        assert!(text.contains("Backward states: 3"));
    }

    #[test]
    fn test_validate_invalid_table() {
        let broken = TEMPLATE.replace("\"*2\",    \"*2\"", "\"*9\",    \"*2\"");
        assert_ne!(broken, TEMPLATE);
        let file = table_file(&broken);
        let args = ValidateArgs {
            table: file.path().to_path_buf(),
        };

        let mut out = Vec::new();
        assert!(args.report(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains("✗ Table is invalid!"));
    }
}
