//! Built-in boundary kinds, table definitions and segmentation
//!
//! This crate sits on top of `brkit-core`. It ships the character, word,
//! sentence and line tables, loads custom tables from TOML, caches
//! [`BoundaryData`](brkit_core::BoundaryData) for sharing between scanners,
//! and turns scans into [`Segment`]s.
//!
//! ```rust
//! use brkit_engine::{BoundaryKind, Segmenter};
//!
//! let segmenter = Segmenter::new(BoundaryKind::Sentence).unwrap();
//! let output = segmenter.segment("It rained. We stayed in.");
//! assert_eq!(output.segments.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod definition;
pub mod error;
pub mod input;
pub mod kinds;
pub mod segmenter;

pub use cache::DataCache;
pub use config::{Config, ConfigBuilder};
pub use definition::{TableDefinition, TEMPLATE};
pub use error::{EngineError, Result};
pub use input::Input;
pub use kinds::BoundaryKind;
pub use segmenter::{Output, Segment, SegmentMetadata, Segmenter};

pub use brkit_core::{BoundaryData, BoundaryScanner, ScanError};
