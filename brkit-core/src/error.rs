//! Error types for the scanning engine
//!
//! Exhausted iteration is not an error: scanners and cursors report it as
//! `None`. Everything here describes a caller mistake that is rejected before
//! any state changes.

use thiserror::Error;

/// Errors raised when building or positioning a [`TextCursor`](crate::TextCursor)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The requested `[begin, end)` range does not fit the buffer
    #[error("invalid cursor range {begin}..{end} for buffer of length {len}")]
    InvalidRange {
        /// Requested begin index
        begin: usize,
        /// Requested end index
        end: usize,
        /// Length of the underlying buffer
        len: usize,
    },

    /// A position outside `[begin, end]`
    #[error("position {position} outside {begin}..={end}")]
    PositionOutOfRange {
        /// Requested position
        position: usize,
        /// Cursor begin index
        begin: usize,
        /// Cursor end index
        end: usize,
    },
}

/// Errors raised by [`BoundaryScanner`](crate::BoundaryScanner) operations
/// that take an external offset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Offset outside `[begin, end)`
    #[error("offset {offset} outside {begin}..{end}")]
    OffsetOutOfRange {
        /// Requested offset
        offset: usize,
        /// Text begin index
        begin: usize,
        /// Text end index
        end: usize,
    },

    /// Cursor rejected a position
    #[error(transparent)]
    Cursor(#[from] CursorError),
}

/// Errors raised while assembling class or transition tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A transition table needs at least one column
    #[error("transition table has no columns")]
    NoColumns,

    /// Cell count is not a whole number of rows
    #[error("transition table of {cells} cells is not a multiple of {columns} columns")]
    RaggedRows {
        /// Number of cells supplied
        cells: usize,
        /// Column count
        columns: usize,
    },

    /// Tables are limited to the 128 states a packed cell can address
    #[error("transition table has {rows} rows, at most 128 are addressable")]
    TooManyStates {
        /// Number of rows supplied
        rows: usize,
    },

    /// A table needs the end state and the initial state at least
    #[error("transition table has {rows} rows, needs at least the end and initial states")]
    TooFewStates {
        /// Number of rows supplied
        rows: usize,
    },

    /// A cell names a row that does not exist
    #[error("cell at state {state}, class {class} jumps to missing state {target}")]
    DanglingState {
        /// Row of the offending cell
        state: usize,
        /// Column of the offending cell
        class: usize,
        /// State index the cell points at
        target: u8,
    },

    /// Row 0 is the end state and may only hold stop cells
    #[error("end state row must only contain stop cells (class {class})")]
    LiveEndState {
        /// Column of the offending cell
        class: usize,
    },

    /// Forward and backward tables disagree on the column count
    #[error("forward table has {forward} columns but backward table has {backward}")]
    ColumnMismatch {
        /// Forward column count
        forward: usize,
        /// Backward column count
        backward: usize,
    },

    /// A class code that has no column in the transition tables
    #[error("class code {class} has no column (tables have {columns})")]
    ClassOutOfRange {
        /// The offending class code
        class: u8,
        /// Column count of the transition tables
        columns: usize,
    },

    /// An exception range with `start > end`
    #[error("exception range {start:?}..={end:?} is inverted")]
    InvertedRange {
        /// Range start
        start: char,
        /// Range end
        end: char,
    },

    /// Exception ranges must ascend by end and never overlap
    #[error("exception range starting at {start:?} overlaps or precedes the previous range")]
    UnsortedExceptions {
        /// Start of the offending range
        start: char,
    },
}
