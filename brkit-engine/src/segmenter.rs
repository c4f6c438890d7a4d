//! Whole-text segmentation on top of [`BoundaryScanner`]

use crate::cache::DataCache;
use crate::config::Config;
use crate::definition::TableDefinition;
use crate::error::Result;
use crate::input::Input;
use crate::kinds::BoundaryKind;
use brkit_core::{BoundaryData, BoundaryScanner};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Splits text into the segments between consecutive boundaries
#[derive(Debug, Clone)]
pub struct Segmenter {
    data: Arc<BoundaryData>,
    include_text: bool,
}

/// One segment, in character and byte offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// First character index
    pub start: usize,
    /// One past the last character index
    pub end: usize,
    /// Byte offset of `start` in the UTF-8 text
    pub byte_start: usize,
    /// Byte offset of `end` in the UTF-8 text
    pub byte_end: usize,
    /// Segment text, when the segmenter was asked to include it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Segment {
    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Statistics for one [`Segmenter::segment`] call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentMetadata {
    /// Name of the boundary data used
    pub kind: String,
    /// Characters in the input
    pub char_count: usize,
    /// Segments produced
    pub segment_count: usize,
    /// Mean segment length in characters
    pub average_length: f64,
    /// Wall-clock time spent scanning
    pub elapsed: Duration,
}

/// Segments plus metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    /// Segments in text order
    pub segments: Vec<Segment>,
    /// Run statistics
    pub metadata: SegmentMetadata,
}

impl Segmenter {
    /// Segmenter for a built-in kind, with its own freshly built tables
    pub fn new(kind: BoundaryKind) -> Result<Self> {
        Ok(Self::with_data(Arc::new(kind.build_data()?)))
    }

    /// Segmenter for `config`, taking tables from `cache`
    ///
    /// A custom table is cached under its path, so repeated segmenters for
    /// the same file parse it once.
    pub fn with_config(config: Config, cache: &DataCache) -> Result<Self> {
        let data = match config.custom_table() {
            Some(path) => {
                let key = format!("table:{}", path.display());
                cache.get_or_load(&key, || {
                    log::info!("loading table definition {}", path.display());
                    TableDefinition::from_file(path)?.into_data()
                })?
            }
            None => cache.builtin(config.kind())?,
        };

        Ok(Self {
            data,
            include_text: config.include_text(),
        })
    }

    /// Segmenter over already-built tables
    pub fn with_data(data: Arc<BoundaryData>) -> Self {
        Self {
            data,
            include_text: true,
        }
    }

    /// Whether segments carry their text
    pub fn include_text(mut self, include: bool) -> Self {
        self.include_text = include;
        self
    }

    /// Tables this segmenter scans with
    pub fn data(&self) -> &Arc<BoundaryData> {
        &self.data
    }

    /// A scanner over `text` sharing this segmenter's tables
    pub fn scanner(&self, text: &str) -> BoundaryScanner {
        BoundaryScanner::with_text(Arc::clone(&self.data), text)
    }

    /// Split `text` into segments
    pub fn segment(&self, text: &str) -> Output {
        let started = Instant::now();

        let mut byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let char_count = byte_offsets.len();
        byte_offsets.push(text.len());

        let mut scanner = self.scanner(text);
        let segments: Vec<Segment> = scanner
            .segments()
            .map(|(start, end)| {
                let byte_start = byte_offsets[start];
                let byte_end = byte_offsets[end];
                Segment {
                    start,
                    end,
                    byte_start,
                    byte_end,
                    text: self
                        .include_text
                        .then(|| text[byte_start..byte_end].to_string()),
                }
            })
            .collect();

        let segment_count = segments.len();
        let average_length = if segment_count == 0 {
            0.0
        } else {
            char_count as f64 / segment_count as f64
        };
        let elapsed = started.elapsed();
        log::debug!(
            "{}: {} chars -> {} segments in {:?}",
            self.data.name(),
            char_count,
            segment_count,
            elapsed
        );

        Output {
            segments,
            metadata: SegmentMetadata {
                kind: self.data.name().to_string(),
                char_count,
                segment_count,
                average_length,
                elapsed,
            },
        }
    }

    /// Read `input` and segment it
    pub fn process(&self, input: Input) -> Result<Output> {
        if let Some(size) = input.estimated_size() {
            log::trace!("processing {size} bytes");
        }
        let text = input.into_text()?;
        Ok(self.segment(&text))
    }
}
