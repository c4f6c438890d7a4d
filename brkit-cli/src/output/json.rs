//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use brkit_engine::{Output, Segment, SegmentMetadata};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers every source and writes one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    files: Vec<FileData>,
}

/// One source in the JSON output
#[derive(Debug, Serialize)]
pub struct FileData {
    /// Path or `stdin`
    pub source: String,
    /// Run statistics
    pub metadata: SegmentMetadata,
    /// Segments with offsets and text
    pub segments: Vec<Segment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            files: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_output(&mut self, source: &str, output: &Output) -> Result<()> {
        self.files.push(FileData {
            source: source.to_string(),
            metadata: output.metadata.clone(),
            segments: output.segments.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.files)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.files)?;
        }
        writeln!(self.writer)?;
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
    fn test_json_carries_offsets_and_metadata() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        let output = Segmenter::new(BoundaryKind::Line)
            .unwrap()
            .segment("\u{3042} b");
        formatter.format_output("x.txt", &output).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let file = &value[0];
        assert_eq!(file["source"], "x.txt");
        assert_eq!(file["metadata"]["kind"], "line");
        assert_eq!(file["metadata"]["segment_count"], 2);
        assert_eq!(file["segments"][1]["start"], 2);
        assert_eq!(file["segments"][1]["byte_start"], 4);
        assert_eq!(file["segments"][1]["text"], "b");
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents(), "[]\n");
    }
}
