//! Markdown output formatter

use super::{visible_segments, OutputFormatter};
use anyhow::Result;
use brkit_engine::Output;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_output(&mut self, _source: &str, output: &Output) -> Result<()> {
        for text in visible_segments(output) {
            self.segment_count += 1;
            writeln!(self.writer, "{}. {}", self.segment_count, text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use brkit_engine::{BoundaryKind, Segmenter};

    #[test]
    fn test_numbering_continues_across_sources() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone());
        let segmenter = Segmenter::new(BoundaryKind::Sentence).unwrap();
        formatter
            .format_output("a.txt", &segmenter.segment("One. Two."))
            .unwrap();
        formatter
            .format_output("b.txt", &segmenter.segment("Three."))
            .unwrap();
        formatter.finish().unwrap();

        let contents = buffer.contents();
        assert!(contents.starts_with("1. One.\n2. Two.\n3. Three.\n"));
        assert!(contents.ends_with("---\n*Total segments: 3*\n"));
    }
}
