//! Table-driven text boundary scanning
//!
//! This crate finds character-cluster, word, sentence and line boundaries
//! without dictionaries: every character is mapped to a small class code, and
//! a bit-packed finite-state machine decides where boundaries fall.
//!
//! # Architecture
//!
//! - [`ClassTable`]: character to class code, via general category, sorted
//!   range exceptions and a direct array for the low 256 code points
//! - [`TransitionTable`]: packed `state x class` cells with a mark bit
//! - [`BoundaryData`]: one class table plus forward and backward transition
//!   tables, shared read-only by every scanner of a boundary kind
//! - [`TextCursor`]: bidirectional access to the text
//! - [`BoundaryScanner`]: first / last / next / previous / following /
//!   preceding / is_boundary over a cursor
//!
//! # Example
//!
//! ```rust
//! use brkit_core::{
//!     BoundaryData, BoundaryScanner, ClassRange, ClassTable, GeneralCategory, Transition as T,
//!     TransitionTable, CATEGORY_COUNT, END_OF_TEXT,
//! };
//! use std::sync::Arc;
//!
//! // Class 0: combining marks, class 1: everything else, class 2: end of text
//! let mut base = [1u8; CATEGORY_COUNT];
//! for cat in GeneralCategory::ALL.iter().filter(|c| c.is_mark()) {
//!     base[cat.index()] = 0;
//! }
//! let classes = ClassTable::derived(base, vec![ClassRange::single(END_OF_TEXT, 2)]).unwrap();
//!
//! let forward = TransitionTable::from_transitions(3, [
//!     T::STOP, T::STOP, T::STOP,
//!     T::marked(2), T::marked(2), T::MARKED_STOP,
//!     T::to(2), T::MARKED_STOP, T::MARKED_STOP,
//! ]).unwrap();
//! let backward = TransitionTable::from_transitions(3, [
//!     T::STOP, T::STOP, T::STOP,
//!     T::to(1), T::MARKED_STOP, T::STOP,
//! ]).unwrap();
//!
//! let data = Arc::new(BoundaryData::new("cluster", classes, forward, backward).unwrap());
//! let mut scanner = BoundaryScanner::with_text(data, "e\u{0301}a");
//! assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 2, 3]);
//! ```

pub mod category;
pub mod class_table;
pub mod cursor;
pub mod data;
pub mod error;
pub mod scanner;
pub mod transition;

pub use category::{GeneralCategory, CATEGORY_COUNT};
pub use class_table::{ClassRange, ClassTable, END_OF_TEXT, FAST_PATH_LEN};
pub use cursor::{CharCursor, TextCursor};
pub use data::BoundaryData;
pub use error::{CursorError, ScanError, TableError};
pub use scanner::{Boundaries, BoundaryScanner};
pub use transition::{Transition, TransitionTable, END_STATE, INITIAL_STATE, MAX_STATES};
