//! Bit-packed finite-state transition tables
//!
//! Each cell is one byte:
//!
//! ```text
//!   bit 7      bits 6..0
//! +------+---------------+
//! | mark |  next state   |
//! +------+---------------+
//! ```
//!
//! State 0 is the end state and state 1 the initial state. A marked cell
//! tells the scanner that the character just consumed sits on a boundary.

use crate::error::TableError;
use std::fmt;

/// Terminal state; scanning stops when a step lands here
pub const END_STATE: u8 = 0;

/// Every scan starts here
pub const INITIAL_STATE: u8 = 1;

/// At most this many states fit in the 7-bit state field
pub const MAX_STATES: usize = 128;

const MARK_BIT: u8 = 0x80;
const STATE_MASK: u8 = 0x7F;

/// One packed transition cell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Transition(u8);

impl Transition {
    /// Unmarked stop
    pub const STOP: Transition = Transition(END_STATE);

    /// Marked stop
    pub const MARKED_STOP: Transition = Transition(MARK_BIT | END_STATE);

    /// Unmarked move to `state`
    pub const fn to(state: u8) -> Self {
        Transition(state & STATE_MASK)
    }

    /// Marked move to `state`
    pub const fn marked(state: u8) -> Self {
        Transition(MARK_BIT | (state & STATE_MASK))
    }

    /// Reinterpret a raw table byte
    pub const fn from_bits(bits: u8) -> Self {
        Transition(bits)
    }

    /// Raw table byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Next state, mark stripped
    #[inline]
    pub const fn state(self) -> u8 {
        self.0 & STATE_MASK
    }

    /// Whether this step lands on a boundary
    #[inline]
    pub const fn is_marked(self) -> bool {
        self.0 & MARK_BIT != 0
    }

    /// Whether this step ends the scan
    #[inline]
    pub const fn is_end(self) -> bool {
        self.state() == END_STATE
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_marked() { "*" } else { "" };
        if self.is_end() {
            write!(f, "{mark}stop")
        } else {
            write!(f, "{mark}{}", self.state())
        }
    }
}

impl From<Transition> for u8 {
    fn from(t: Transition) -> u8 {
        t.0
    }
}

/// Flat `rows x columns` array of packed cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    columns: usize,
    cells: Vec<u8>,
}

impl TransitionTable {
    /// Validate and wrap a flat cell array
    ///
    /// Rejects ragged rows, fewer than two or more than [`MAX_STATES`]
    /// rows, cells that jump to a missing row, and live cells in the end row.
    pub fn new(columns: usize, cells: Vec<u8>) -> Result<Self, TableError> {
        if columns == 0 {
            return Err(TableError::NoColumns);
        }
        if cells.is_empty() || cells.len() % columns != 0 {
            return Err(TableError::RaggedRows {
                cells: cells.len(),
                columns,
            });
        }

        let rows = cells.len() / columns;
        if rows > MAX_STATES {
            return Err(TableError::TooManyStates { rows });
        }
        if rows <= usize::from(INITIAL_STATE) {
            return Err(TableError::TooFewStates { rows });
        }

        for (i, &bits) in cells.iter().enumerate() {
            let (state, class) = (i / columns, i % columns);
            let target = Transition::from_bits(bits).state();
            if usize::from(target) >= rows {
                return Err(TableError::DanglingState {
                    state,
                    class,
                    target,
                });
            }
            if state == usize::from(END_STATE) && target != END_STATE {
                return Err(TableError::LiveEndState { class });
            }
        }

        Ok(Self { columns, cells })
    }

    /// Build from typed cells
    pub fn from_transitions(
        columns: usize,
        cells: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, TableError> {
        Self::new(columns, cells.into_iter().map(u8::from).collect())
    }

    /// Look up `(state, class)`
    ///
    /// `class` must be below [`columns`](Self::columns) and `state` below
    /// [`rows`](Self::rows). BoundaryData checks the class bound for every
    /// class its ClassTable can produce; out-of-range arguments panic.
    #[inline]
    pub fn step(&self, state: u8, class: u8) -> Transition {
        debug_assert!(
            usize::from(class) < self.columns,
            "class {class} outside {} columns",
            self.columns
        );
        debug_assert!(
            usize::from(state & STATE_MASK) < self.rows(),
            "state {} outside {} rows",
            state & STATE_MASK,
            self.rows()
        );
        let idx = usize::from(state & STATE_MASK) * self.columns + usize::from(class);
        Transition(self.cells[idx])
    }

    /// Start state of every scan
    #[inline]
    pub const fn initial(&self) -> u8 {
        INITIAL_STATE
    }

    /// Number of class columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of states, including the end state
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Raw packed cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
