//! Property tests for BoundaryScanner
//!
//! Random texts over a small alphabet (letters, combining marks, CR, LF) are
//! scanned with a cluster table and checked against a direct reference model
//! and against the navigation invariants: first/last, monotonicity, round
//! trips through `previous`, and agreement between `is_boundary`,
//! `following` and `preceding`.

use brkit_core::{
    BoundaryData, BoundaryScanner, ClassRange, ClassTable, GeneralCategory, Transition as T,
    TransitionTable, CATEGORY_COUNT, END_OF_TEXT,
};
use proptest::prelude::*;
use std::sync::Arc;

const MARK: u8 = 0;
const BASE: u8 = 1;
const CR: u8 = 2;
const LF: u8 = 3;
const EOS: u8 = 4;

fn cluster_data() -> Arc<BoundaryData> {
    let mut base = [BASE; CATEGORY_COUNT];
    for cat in GeneralCategory::ALL.iter().filter(|c| c.is_mark()) {
        base[cat.index()] = MARK;
    }
    let classes = ClassTable::derived(
        base,
        vec![
            ClassRange::single('\n', LF),
            ClassRange::single('\r', CR),
            ClassRange::single(END_OF_TEXT, EOS),
        ],
    )
    .unwrap();

    #[rustfmt::skip]
    let forward = TransitionTable::from_transitions(5, [
        // mark          base            cr              lf              eos
        T::STOP,         T::STOP,        T::STOP,        T::STOP,        T::STOP,
        T::marked(2),    T::marked(2),   T::marked(3),   T::marked(4),   T::MARKED_STOP,
        T::to(2),        T::MARKED_STOP, T::MARKED_STOP, T::MARKED_STOP, T::MARKED_STOP,
        T::MARKED_STOP,  T::MARKED_STOP, T::MARKED_STOP, T::to(4),       T::MARKED_STOP,
        T::MARKED_STOP,  T::MARKED_STOP, T::MARKED_STOP, T::MARKED_STOP, T::MARKED_STOP,
    ])
    .unwrap();

    #[rustfmt::skip]
    let backward = TransitionTable::from_transitions(5, [
        T::STOP,         T::STOP,        T::STOP,        T::STOP,        T::STOP,
        T::to(1),        T::MARKED_STOP, T::MARKED_STOP, T::marked(2),   T::STOP,
        T::STOP,         T::STOP,        T::MARKED_STOP, T::STOP,        T::STOP,
    ])
    .unwrap();

    Arc::new(BoundaryData::new("cluster", classes, forward, backward).unwrap())
}

/// Boundaries computed directly from the cluster rules
fn reference_boundaries(chars: &[char]) -> Vec<usize> {
    let is_mark = |c: char| GeneralCategory::of(c).is_mark();
    let mut out = vec![0];
    for i in 1..chars.len() {
        let (prev, cur) = (chars[i - 1], chars[i]);
        let joins_mark = is_mark(cur) && prev != '\r' && prev != '\n';
        let joins_crlf = prev == '\r' && cur == '\n';
        if !joins_mark && !joins_crlf {
            out.push(i);
        }
    }
    if !chars.is_empty() {
        out.push(chars.len());
    }
    out
}

fn text_strategy() -> impl Strategy<Value = String> {
    let alphabet = prop::sample::select(vec!['a', 'b', 'é', '\u{0301}', '\u{0308}', '\r', '\n']);
    prop::collection::vec(alphabet, 0..40).prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn test_concrete_scenario() {
    let mut scanner = BoundaryScanner::with_text(cluster_data(), "a\u{0301}\u{0308}bc");
    assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 3, 4, 5]);
}

#[test]
fn test_crlf_stays_together() {
    let mut scanner = BoundaryScanner::with_text(cluster_data(), "a\r\nb\n\r");
    assert_eq!(
        scanner.boundaries().collect::<Vec<_>>(),
        vec![0, 1, 3, 4, 5, 6]
    );
}

proptest! {
    #[test]
    fn prop_matches_reference_model(text in text_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        let found: Vec<usize> = scanner.boundaries().collect();
        prop_assert_eq!(found, reference_boundaries(&chars));
    }

    #[test]
    fn prop_first_and_last_are_text_bounds(text in text_strategy()) {
        let len = text.chars().count();
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        prop_assert_eq!(scanner.first(), 0);
        prop_assert_eq!(scanner.last(), len);
    }

    #[test]
    fn prop_next_is_strictly_increasing(text in text_strategy()) {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        let mut before = scanner.first();
        while let Some(after) = scanner.next() {
            prop_assert!(after > before);
            before = after;
        }
        prop_assert_eq!(before, text.chars().count());
    }

    #[test]
    fn prop_previous_reverses_next(text in text_strategy()) {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        let forward: Vec<usize> = scanner.boundaries().collect();

        let mut backward = vec![scanner.current()];
        while let Some(b) = scanner.previous() {
            prop_assert!(b < *backward.last().unwrap());
            backward.push(b);
        }
        backward.reverse();
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn prop_is_boundary_agrees_with_following(text in text_strategy()) {
        let len = text.chars().count();
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        let all: Vec<usize> = scanner.boundaries().collect();

        for p in 0..len {
            let expected = if p == 0 {
                true
            } else {
                scanner.following(p - 1).unwrap() == p
            };
            prop_assert_eq!(scanner.is_boundary(p).unwrap(), expected);
            prop_assert_eq!(expected, all.contains(&p));
        }
    }

    #[test]
    fn prop_following_and_preceding_bracket_offset(text in text_strategy()) {
        let len = text.chars().count();
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        let all: Vec<usize> = scanner.boundaries().collect();

        for p in 0..len {
            let after = all.iter().copied().find(|&b| b > p);
            let before = all.iter().copied().rev().find(|&b| b < p);
            prop_assert_eq!(Some(scanner.following(p).unwrap()), after);
            prop_assert_eq!(scanner.preceding(p).unwrap(), before);
        }
    }

    #[test]
    fn prop_current_is_idempotent(text in text_strategy(), steps in 0usize..10) {
        let mut scanner = BoundaryScanner::with_text(cluster_data(), &text);
        for _ in 0..steps {
            scanner.next();
        }
        let pos = scanner.current();
        for _ in 0..3 {
            prop_assert_eq!(scanner.current(), pos);
        }
    }
}
