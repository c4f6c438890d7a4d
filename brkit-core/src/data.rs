//! Per-kind bundle of classification and transition tables

use crate::class_table::ClassTable;
use crate::error::TableError;
use crate::transition::TransitionTable;

/// Immutable tables for one boundary kind
///
/// Built once and shared read-only, typically behind an `Arc`, by every
/// scanner of that kind.
#[derive(Debug, Clone)]
pub struct BoundaryData {
    name: String,
    classes: ClassTable,
    forward: TransitionTable,
    backward: TransitionTable,
    end_of_text_class: u8,
}

impl BoundaryData {
    /// Pair a class table with its forward and backward transition tables
    ///
    /// Both tables must have the same column count, and every class code the
    /// class table can produce needs a column.
    pub fn new(
        name: impl Into<String>,
        classes: ClassTable,
        forward: TransitionTable,
        backward: TransitionTable,
    ) -> Result<Self, TableError> {
        if forward.columns() != backward.columns() {
            return Err(TableError::ColumnMismatch {
                forward: forward.columns(),
                backward: backward.columns(),
            });
        }

        let columns = forward.columns();
        let max_class = classes.max_class();
        if usize::from(max_class) >= columns {
            return Err(TableError::ClassOutOfRange {
                class: max_class,
                columns,
            });
        }

        let name = name.into();
        let end_of_text_class = classes.end_of_text_class();
        log::debug!(
            "built boundary data '{}': {} classes, {} forward / {} backward states",
            name,
            columns,
            forward.rows(),
            backward.rows()
        );

        Ok(Self {
            name,
            classes,
            forward,
            backward,
            end_of_text_class,
        })
    }

    /// Name of the boundary kind
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character classification
    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// Table driving left-to-right scans
    pub fn forward(&self) -> &TransitionTable {
        &self.forward
    }

    /// Table locating safe positions right-to-left
    pub fn backward(&self) -> &TransitionTable {
        &self.backward
    }

    /// Class of the end-of-text sentinel
    pub fn end_of_text_class(&self) -> u8 {
        self.end_of_text_class
    }

    /// Class code of `ch`
    #[inline]
    pub fn class_of(&self, ch: char) -> u8 {
        self.classes.class_of(ch)
    }
}
