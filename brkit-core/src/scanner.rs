//! Table-driven boundary scanner
//!
//! The scanner drives a [`TextCursor`] through the transition tables of a
//! [`BoundaryData`]:
//!
//! - Forward scans start at a known boundary and run the forward table until
//!   it reaches the end state, remembering the last marked position. If the
//!   text runs out first, one extra step is taken with the end-of-text class
//!   to decide whether the end of the buffer is itself the boundary.
//! - Backward scans only look for a *safe* position: somewhere no later than
//!   the nearest preceding boundary. Exact answers are recovered by scanning
//!   forward again from there.
//!
//! Positions are character indices into the cursor's buffer, end-exclusive.
//! `None` means there are no more boundaries in that direction.

use crate::cursor::{CharCursor, TextCursor};
use crate::data::BoundaryData;
use crate::error::ScanError;
use crate::transition::END_STATE;
use std::sync::Arc;

/// Stateful boundary iterator over one text
///
/// Cloning copies the cursor and position and re-shares the tables.
#[derive(Debug, Clone)]
pub struct BoundaryScanner<C: TextCursor = CharCursor> {
    data: Arc<BoundaryData>,
    cursor: C,
    pos: usize,
}

impl BoundaryScanner<CharCursor> {
    /// Scanner over empty text
    pub fn new(data: Arc<BoundaryData>) -> Self {
        Self::with_cursor(data, CharCursor::default())
    }

    /// Scanner over `text`, positioned at its start
    pub fn with_text(data: Arc<BoundaryData>, text: &str) -> Self {
        Self::with_cursor(data, CharCursor::new(text))
    }

    /// Replace the text and move to its start
    pub fn set_text(&mut self, text: &str) {
        self.set_cursor(CharCursor::new(text));
    }
}

impl<C: TextCursor> BoundaryScanner<C> {
    /// Scanner over an existing cursor, positioned at the cursor's begin
    pub fn with_cursor(data: Arc<BoundaryData>, cursor: C) -> Self {
        let pos = cursor.begin_index();
        Self { data, cursor, pos }
    }

    /// Replace the cursor and move to its begin index
    pub fn set_cursor(&mut self, cursor: C) {
        self.pos = cursor.begin_index();
        self.cursor = cursor;
    }

    /// The cursor being scanned
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Shared tables
    pub fn data(&self) -> &Arc<BoundaryData> {
        &self.data
    }

    /// Move to the start of the text
    pub fn first(&mut self) -> usize {
        self.pos = self.cursor.begin_index();
        self.pos
    }

    /// Move to the end of the text
    pub fn last(&mut self) -> usize {
        self.pos = self.cursor.end_index();
        self.pos
    }

    /// Current boundary
    #[inline]
    pub fn current(&self) -> usize {
        self.pos
    }

    /// Advance to the next boundary
    pub fn next(&mut self) -> Option<usize> {
        if self.pos >= self.cursor.end_index() {
            return None;
        }
        self.pos = self.next_boundary(self.pos);
        Some(self.pos)
    }

    /// Move `n` boundaries: forward for `n > 0`, backward for `n < 0`
    ///
    /// Returns `None` as soon as the text is exhausted in that direction.
    /// `next_by(0)` returns the current boundary.
    pub fn next_by(&mut self, n: isize) -> Option<usize> {
        let mut result = Some(self.current());
        if n > 0 {
            for _ in 0..n {
                result = self.next();
                if result.is_none() {
                    break;
                }
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                result = self.previous();
                if result.is_none() {
                    break;
                }
            }
        }
        result
    }

    /// Step back to the previous boundary
    pub fn previous(&mut self) -> Option<usize> {
        if self.pos <= self.cursor.begin_index() {
            return None;
        }

        let start = self.pos;
        let mut prev = self.safe_position_before(start - 1);
        let mut p = self.next_boundary(prev);
        while p < start {
            prev = p;
            p = self.next_boundary(p);
        }

        self.pos = prev;
        Some(prev)
    }

    /// First boundary strictly after `offset`
    ///
    /// `offset` must lie in `[begin, end)`. The scanner is left at the result.
    pub fn following(&mut self, offset: usize) -> Result<usize, ScanError> {
        self.check_offset(offset)?;

        let mut p = self.safe_position_before(offset);
        while p <= offset {
            p = self.next_boundary(p);
        }

        self.pos = p;
        Ok(p)
    }

    /// Last boundary strictly before `offset`
    ///
    /// `offset` must lie in `[begin, end)`. Returns `None` when `offset` is
    /// the beginning of the text, in which case the scanner moves there.
    pub fn preceding(&mut self, offset: usize) -> Result<Option<usize>, ScanError> {
        self.check_offset(offset)?;

        let begin = self.cursor.begin_index();
        if offset == begin {
            self.pos = begin;
            return Ok(None);
        }

        let mut p = self.safe_position_before(offset);
        let mut last = p;
        while p < offset {
            last = p;
            p = self.next_boundary(p);
        }

        self.pos = last;
        Ok(Some(last))
    }

    /// Whether `offset` is a boundary
    ///
    /// `offset` must lie in `[begin, end)`. Unless `offset` is the beginning
    /// of the text, the scanner is left at `following(offset - 1)`.
    pub fn is_boundary(&mut self, offset: usize) -> Result<bool, ScanError> {
        self.check_offset(offset)?;

        if offset == self.cursor.begin_index() {
            return Ok(true);
        }
        Ok(self.following(offset - 1)? == offset)
    }

    /// Every boundary from `first()` to `last()`, inclusive
    ///
    /// Leaves the scanner at the end of the text once drained.
    pub fn boundaries(&mut self) -> Boundaries<'_, C> {
        Boundaries {
            scanner: self,
            started: false,
        }
    }

    /// `(start, end)` pairs between consecutive boundaries
    pub fn segments(&mut self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut prev: Option<usize> = None;
        self.boundaries().filter_map(move |b| {
            let segment = prev.map(|start| (start, b));
            prev = Some(b);
            segment
        })
    }

    fn check_offset(&self, offset: usize) -> Result<(), ScanError> {
        let begin = self.cursor.begin_index();
        let end = self.cursor.end_index();
        if offset < begin || offset >= end {
            return Err(ScanError::OffsetOutOfRange { offset, begin, end });
        }
        Ok(())
    }

    fn next_boundary(&mut self, from: usize) -> usize {
        let result = scan_forward(&self.data, &mut self.cursor, from);
        log::trace!("{}: next boundary after {} is {}", self.data.name(), from, result);
        result
    }

    fn safe_position_before(&mut self, offset: usize) -> usize {
        let result = scan_backward(&self.data, &mut self.cursor, offset);
        log::trace!("{}: safe position before {} is {}", self.data.name(), offset, result);
        result
    }
}

/// Longest-match forward scan from a known boundary
///
/// Always makes progress: the result is at least `from + 1`, capped at the
/// end of the text.
fn scan_forward<C: TextCursor>(data: &BoundaryData, cursor: &mut C, from: usize) -> usize {
    let table = data.forward();
    let end = cursor.end_index();
    let mut state = table.initial();
    let mut result = from;

    let mut ch = cursor.set_position(from).unwrap_or(None);
    while let Some(c) = ch {
        let step = table.step(state, data.class_of(c));
        if step.is_marked() {
            result = cursor.position();
        }
        state = step.state();
        if step.is_end() {
            break;
        }
        ch = cursor.next();
    }

    if state != END_STATE && table.step(state, data.end_of_text_class()).is_marked() {
        result = end;
    }

    result.max(from + 1).min(end)
}

/// Backward scan for a position no later than the boundary preceding
/// `offset`; reads characters from `offset - 1` down to the beginning
fn scan_backward<C: TextCursor>(data: &BoundaryData, cursor: &mut C, offset: usize) -> usize {
    let begin = cursor.begin_index();
    if offset <= begin {
        return begin;
    }

    let table = data.backward();
    let mut state = table.initial();
    let mut result = begin;

    let mut ch = cursor.set_position(offset - 1).unwrap_or(None);
    while let Some(c) = ch {
        let step = table.step(state, data.class_of(c));
        if step.is_marked() {
            result = cursor.position();
        }
        state = step.state();
        if step.is_end() {
            break;
        }
        ch = cursor.previous();
    }

    result
}

/// Iterator returned by [`BoundaryScanner::boundaries`]
#[derive(Debug)]
pub struct Boundaries<'a, C: TextCursor> {
    scanner: &'a mut BoundaryScanner<C>,
    started: bool,
}

impl<C: TextCursor> Iterator for Boundaries<'_, C> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.started {
            self.started = true;
            return Some(self.scanner.first());
        }
        self.scanner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{GeneralCategory, CATEGORY_COUNT};
    use crate::class_table::{ClassRange, ClassTable, END_OF_TEXT};
    use crate::transition::{Transition as T, TransitionTable};

    const MARK: u8 = 0;
    const BASE: u8 = 1;
    const EOS: u8 = 2;

    /// Marks attach to the preceding base; every base starts a cluster
    fn cluster_data() -> Arc<BoundaryData> {
        let mut base = [BASE; CATEGORY_COUNT];
        for cat in GeneralCategory::ALL.iter().filter(|c| c.is_mark()) {
            base[cat.index()] = MARK;
        }
        let classes =
            ClassTable::derived(base, vec![ClassRange::single(END_OF_TEXT, EOS)]).unwrap();

        #[rustfmt::skip]
        let forward = TransitionTable::from_transitions(3, [
            // mark          base            eos
            T::STOP,         T::STOP,        T::STOP,
            T::marked(2),    T::marked(2),   T::MARKED_STOP,
            T::to(2),        T::MARKED_STOP, T::MARKED_STOP,
        ])
        .unwrap();

        #[rustfmt::skip]
        let backward = TransitionTable::from_transitions(3, [
            T::STOP,         T::STOP,        T::STOP,
            T::to(1),        T::MARKED_STOP, T::STOP,
        ])
        .unwrap();

        Arc::new(BoundaryData::new("cluster", classes, forward, backward).unwrap())
    }

    // base, mark, mark, base, base
    const SCENARIO: &str = "a\u{0301}\u{0308}bc";

    #[test]
    fn test_scenario_boundaries() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        let found: Vec<usize> = scanner.boundaries().collect();
        assert_eq!(found, vec![0, 3, 4, 5]);
    }

    #[test]
    fn test_scenario_segments() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        let segments: Vec<(usize, usize)> = scanner.segments().collect();
        assert_eq!(segments, vec![(0, 3), (3, 4), (4, 5)]);
    }

    #[test]
    fn test_first_and_last() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        assert_eq!(scanner.last(), 5);
        assert_eq!(scanner.current(), 5);
        assert_eq!(scanner.first(), 0);
        assert_eq!(scanner.current(), 0);
    }

    #[test]
    fn test_previous_reverses_next() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        scanner.last();
        assert_eq!(scanner.previous(), Some(4));
        assert_eq!(scanner.previous(), Some(3));
        assert_eq!(scanner.previous(), Some(0));
        assert_eq!(scanner.previous(), None);
        assert_eq!(scanner.current(), 0);
    }

    #[test]
    fn test_next_at_end_is_exhausted() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        scanner.last();
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.current(), 5);
    }

    #[test]
    fn test_empty_text() {
        let mut scanner = BoundaryScanner::new(cluster_data());
        assert_eq!(scanner.first(), 0);
        assert_eq!(scanner.last(), 0);
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.previous(), None);
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0]);
        assert_eq!(scanner.segments().count(), 0);
    }

    #[test]
    fn test_following_and_preceding() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        assert_eq!(scanner.following(0), Ok(3));
        assert_eq!(scanner.following(1), Ok(3));
        assert_eq!(scanner.following(2), Ok(3));
        assert_eq!(scanner.following(3), Ok(4));
        assert_eq!(scanner.following(4), Ok(5));
        assert_eq!(scanner.current(), 5);

        assert_eq!(scanner.preceding(0), Ok(None));
        assert_eq!(scanner.preceding(1), Ok(Some(0)));
        assert_eq!(scanner.preceding(3), Ok(Some(0)));
        assert_eq!(scanner.preceding(4), Ok(Some(3)));
        assert_eq!(scanner.current(), 3);
    }

    #[test]
    fn test_is_boundary() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        let expected = [true, false, false, true, true];
        for (offset, want) in expected.iter().enumerate() {
            assert_eq!(scanner.is_boundary(offset), Ok(*want), "offset {offset}");
        }
    }

    #[test]
    fn test_offsets_outside_text_are_rejected() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        scanner.following(3).unwrap();

        let err = ScanError::OffsetOutOfRange {
            offset: 5,
            begin: 0,
            end: 5,
        };
        assert_eq!(scanner.following(5), Err(err.clone()));
        assert_eq!(scanner.preceding(5), Err(err.clone()));
        assert_eq!(scanner.is_boundary(5), Err(err));
        // Position untouched
        assert_eq!(scanner.current(), 4);
    }

    #[test]
    fn test_next_by() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        assert_eq!(scanner.next_by(0), Some(0));
        assert_eq!(scanner.next_by(2), Some(4));
        assert_eq!(scanner.next_by(-1), Some(3));
        assert_eq!(scanner.next_by(5), None);
        assert_eq!(scanner.current(), 5);
        assert_eq!(scanner.next_by(-10), None);
        assert_eq!(scanner.current(), 0);
    }

    #[test]
    fn test_leading_marks_form_a_cluster() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), "\u{0301}\u{0301}a");
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(scanner.previous(), Some(2));
        assert_eq!(scanner.previous(), Some(0));
    }

    #[test]
    fn test_sub_range_positions_index_the_full_buffer() {
        let chars: Vec<char> = "xxa\u{0301}byy".chars().collect();
        let cursor = CharCursor::with_range(chars, 2, 5, 2).unwrap();
        let mut scanner = BoundaryScanner::with_cursor(cluster_data(), cursor);
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![2, 4, 5]);
        assert_eq!(scanner.previous(), Some(4));
        assert_eq!(scanner.previous(), Some(2));
        assert_eq!(scanner.previous(), None);
        assert!(scanner.following(1).is_err());
        assert_eq!(scanner.is_boundary(2), Ok(true));
    }

    #[test]
    fn test_set_text_resets_position() {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        scanner.last();
        scanner.set_text("ab");
        assert_eq!(scanner.current(), 0);
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clone_shares_data_and_copies_position() {
        let mut a = BoundaryScanner::with_text(cluster_data(), SCENARIO);
        a.next();
        let mut b = a.clone();
        assert!(Arc::ptr_eq(a.data(), b.data()));
        b.next();
        assert_eq!(a.current(), 3);
        assert_eq!(b.current(), 4);
    }

    #[test]
    fn test_forward_scan_always_progresses() {
        // Every cell stops unmarked: the table never reports a boundary
        let classes = ClassTable::derived(
            [BASE; CATEGORY_COUNT],
            vec![ClassRange::single(END_OF_TEXT, EOS)],
        )
        .unwrap();
        let stalled = TransitionTable::new(3, vec![0; 6]).unwrap();
        let data =
            Arc::new(BoundaryData::new("stalled", classes, stalled.clone(), stalled).unwrap());

        let mut scanner = BoundaryScanner::with_text(data, "abc");
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
