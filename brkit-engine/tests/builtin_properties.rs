//! Property tests for the built-in kinds
//!
//! Each kind is driven with random text over an alphabet that exercises its
//! classes, including combining marks and no-break spaces. Every kind is
//! checked for full forward/backward agreement: reverse walks, following,
//! preceding and is_boundary must all match the forward boundaries.

use brkit_engine::{BoundaryKind, DataCache, Segmenter};
use proptest::prelude::*;
use std::sync::{Arc, OnceLock};

const CHARACTER_ALPHABET: &str =
    "a\u{00E9}\u{0301}\u{0903}\r\n\u{1100}\u{1161}\u{11A8}\u{3042}\u{0B95}\u{0BBF}\u{0F72}";
const WORD_ALPHABET: &str =
    "aZ5.,-'\"#%$ \t\n\r\u{30A2}\u{3042}\u{4E00}!?()\u{00E9}\u{0301}\u{00A0}";
const LINE_ALPHABET: &str = "aZ5.,- \t\n\r\u{3042}\u{3041}\u{4E00}$()!\"%\u{0301}\u{00A0}";
const SENTENCE_ALPHABET: &str =
    "aZ5. !?\"'()\n\r\u{3002}\u{4E00}\u{00E9}\u{0301}\u{00A0}\u{2029}";

fn cache() -> &'static DataCache {
    static CACHE: OnceLock<DataCache> = OnceLock::new();
    CACHE.get_or_init(|| DataCache::with_builtins().unwrap())
}

fn segmenter(kind: BoundaryKind) -> Segmenter {
    Segmenter::with_data(cache().builtin(kind).unwrap())
}

fn text_over(alphabet: &'static str) -> impl Strategy<Value = String> {
    let chars: Vec<char> = alphabet.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..32)
        .prop_map(|chars| chars.into_iter().collect())
}

fn forward_invariants(kind: BoundaryKind, text: &str) -> Result<Vec<usize>, TestCaseError> {
    let len = text.chars().count();
    let mut scanner = segmenter(kind).scanner(text);
    let all: Vec<usize> = scanner.boundaries().collect();

    prop_assert_eq!(all[0], 0);
    prop_assert_eq!(*all.last().unwrap(), len);
    for pair in all.windows(2) {
        prop_assert!(pair[0] < pair[1]);
    }
    if len > 0 {
        prop_assert!(all.len() >= 2);
    }
    Ok(all)
}

fn full_invariants(kind: BoundaryKind, text: &str) -> Result<(), TestCaseError> {
    let all = forward_invariants(kind, text)?;
    let len = text.chars().count();
    let mut scanner = segmenter(kind).scanner(text);

    scanner.last();
    let mut backward = vec![scanner.current()];
    while let Some(b) = scanner.previous() {
        backward.push(b);
    }
    backward.reverse();
    prop_assert_eq!(&backward, &all);

    for p in 0..len {
        let after = all.iter().copied().find(|&b| b > p);
        let before = all.iter().copied().rev().find(|&b| b < p);
        prop_assert_eq!(Some(scanner.following(p).unwrap()), after);
        prop_assert_eq!(scanner.preceding(p).unwrap(), before);
        prop_assert_eq!(scanner.is_boundary(p).unwrap(), all.contains(&p));
    }
    Ok(())
}

#[test]
fn test_cache_holds_every_kind() {
    for kind in BoundaryKind::ALL {
        let data = cache().builtin(kind).unwrap();
        assert!(Arc::ptr_eq(&data, &cache().builtin(kind).unwrap()));
    }
}

#[test]
fn test_segments_cover_text() {
    let text = "Dr. Who? \u{65E5}\u{672C}\u{8A9E}\u{3002} e\u{0301}\r\n";
    for kind in BoundaryKind::ALL {
        let output = segmenter(kind).segment(text);
        let joined: String = output
            .segments
            .iter()
            .map(|s| s.text.as_deref().unwrap())
            .collect();
        assert_eq!(joined, text, "{kind} segments must tile the text");
    }
}

proptest! {
    #[test]
    fn prop_character_navigation(text in text_over(CHARACTER_ALPHABET)) {
        full_invariants(BoundaryKind::Character, &text)?;
    }

    #[test]
    fn prop_word_navigation(text in text_over(WORD_ALPHABET)) {
        full_invariants(BoundaryKind::Word, &text)?;
    }

    #[test]
    fn prop_line_navigation(text in text_over(LINE_ALPHABET)) {
        full_invariants(BoundaryKind::Line, &text)?;
    }

    #[test]
    fn prop_sentence_navigation(text in text_over(SENTENCE_ALPHABET)) {
        full_invariants(BoundaryKind::Sentence, &text)?;
    }

    #[test]
    fn prop_segments_tile_text(text in text_over(WORD_ALPHABET)) {
        let output = segmenter(BoundaryKind::Word).segment(&text);
        let mut next_byte = 0;
        for segment in &output.segments {
            prop_assert_eq!(segment.byte_start, next_byte);
            prop_assert!(!segment.is_empty());
            next_byte = segment.byte_end;
        }
        prop_assert_eq!(next_byte, text.len());
    }
}
