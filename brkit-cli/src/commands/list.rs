//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use brkit_engine::BoundaryKind;
use std::io::Write;

fn kind_description(kind: BoundaryKind) -> &'static str {
    match kind {
        BoundaryKind::Character => "user-perceived characters (marks, CR LF, Hangul syllables)",
        BoundaryKind::Word => "words, numbers, whitespace runs and punctuation",
        BoundaryKind::Sentence => "sentences ending in terminators or paragraph separators",
        BoundaryKind::Line => "positions where a line may wrap",
    }
}

/// Print the requested listing to `out`
pub fn execute(what: ListCommands, out: &mut impl Write) -> Result<()> {
    match what {
        ListCommands::Kinds => {
            writeln!(out, "Boundary kinds:")?;
            for kind in BoundaryKind::ALL {
                writeln!(out, "  {:<10} {}", kind.name(), kind_description(kind))?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(out, "  {:<10} {}", format.name(), format.description())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(what: ListCommands) -> String {
        let mut out = Vec::new();
        execute(what, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_kinds() {
        let text = listing(ListCommands::Kinds);
        for name in ["character", "word", "sentence", "line"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_list_formats() {
        let text = listing(ListCommands::Formats);
        assert!(text.starts_with("Output formats:"));
        assert!(text.contains("markdown"));
    }
}
