//! Sentence boundaries
//!
//! A heuristic without abbreviation lists: `!` and `?` (and their ideographic
//! and fullwidth forms) always end a sentence, a period ends one when followed
//! by whitespace and something other than a lowercase letter or digit, and a
//! paragraph separator always ends one. Closing punctuation and trailing
//! whitespace belong to the sentence they follow.

use super::{go, m, MS, S};
use brkit_core::{
    BoundaryData, ClassRange, ClassTable, TableError, Transition, TransitionTable, CATEGORY_COUNT,
};

const OTHER: u8 = 0;
const SPACE: u8 = 1;
const TERM: u8 = 2;
const AMBIG_TERM: u8 = 3;
const OPEN: u8 = 4;
const CLOSE: u8 = 5;
const CJK: u8 = 6;
const PARA: u8 = 7;
const LOWER: u8 = 8;
const UPPER: u8 = 9;
const DIGIT: u8 = 10;
const QUOTE: u8 = 11;
const MARK: u8 = 12;
const EOT: u8 = 13;
const COLUMNS: usize = 14;

const CATEGORIES: [u8; CATEGORY_COUNT] = [
    OTHER,           // Cn
    UPPER,           // Lu
    LOWER,           // Ll
    OTHER,           // Lt
    OTHER,           // Lm
    OTHER,           // Lo
    MARK,            // Mn
    MARK,            // Me
    OTHER,           // Mc
    DIGIT,           // Nd
    DIGIT,           // Nl
    DIGIT,           // No
    SPACE,           // Zs
    SPACE,           // Zl
    SPACE,           // Zp
    OTHER,           // Cc
    OTHER,           // Cf
    OTHER,           // Co
    OTHER,           // Cs
    OTHER,           // Pd
    OPEN,            // Ps
    CLOSE,           // Pe
    OTHER,           // Pc
    OTHER,           // Po
    OTHER,           // Sm
    OTHER,           // Sc
    OTHER,           // Sk
    OTHER,           // So
    OPEN,            // Pi
    CLOSE,           // Pf
];

const EXCEPTIONS: &[ClassRange] = &[
    ClassRange::span('\t', '\n', SPACE),
    ClassRange::single('\u{000C}', TERM),
    ClassRange::single('\r', SPACE),
    ClassRange::single('!', TERM),
    ClassRange::single('"', QUOTE),
    ClassRange::single('\'', QUOTE),
    ClassRange::single('.', AMBIG_TERM),
    ClassRange::single('?', TERM),
    ClassRange::single('\u{00A0}', OTHER),
    ClassRange::single('\u{00AA}', LOWER),
    ClassRange::single('\u{00BA}', LOWER),
    ClassRange::single('\u{2028}', SPACE),
    ClassRange::single('\u{2029}', PARA),
    ClassRange::single('\u{3002}', TERM),
    ClassRange::span('\u{3041}', '\u{3094}', CJK),
    ClassRange::span('\u{3099}', '\u{309C}', CJK),
    ClassRange::span('\u{30A1}', '\u{30F6}', CJK),
    ClassRange::span('\u{4E00}', '\u{9FA5}', CJK),
    ClassRange::span('\u{F900}', '\u{FA2D}', CJK),
    ClassRange::single('\u{FEFF}', OTHER),
    ClassRange::single('\u{FF01}', TERM),
    ClassRange::single('\u{FF0E}', TERM),
    ClassRange::single('\u{FF1F}', TERM),
    ClassRange::single('\u{FFFF}', EOT),
];

#[rustfmt::skip]
const FORWARD: [Transition; COLUMNS * 8] = [
    // other       space       term        ambig_term  open        close
    // cjk         para        lower       upper       digit       quote
    // mark        eot

    // 0: end
    S,          S,          S,          S,          S,          S,
    S,          S,          S,          S,          S,          S,
    S,          S,

    // 1: sentence body
    m(1),       m(1),       m(2),       m(5),       m(1),       m(1),
    m(1),       m(4),       m(1),       m(1),       m(1),       m(1),
    m(1),       MS,

    // 2: after a terminator
    MS,         m(3),       m(2),       m(5),       MS,         m(2),
    MS,         m(4),       MS,         MS,         MS,         m(2),
    m(2),       MS,

    // 3: trailing space
    MS,         m(3),       MS,         MS,         MS,         MS,
    MS,         m(4),       MS,         MS,         MS,         MS,
    m(3),       MS,

    // 4: paragraph separator
    MS,         MS,         MS,         MS,         MS,         MS,
    MS,         MS,         MS,         MS,         MS,         MS,
    MS,         MS,

    // 5: after a period
    m(1),       m(6),       m(2),       m(5),       m(7),       m(5),
    MS,         m(4),       m(1),       m(1),       m(1),       m(5),
    m(5),       MS,

    // 6: space after a period
    MS,         m(6),       MS,         MS,         m(7),       m(1),
    MS,         m(4),       m(1),       MS,         m(1),       MS,
    m(6),       MS,

    // 7: opening punctuation after a period
    MS,         MS,         MS,         MS,         go(7),      MS,
    MS,         MS,         m(1),       S,          MS,         MS,
    m(7),       MS,
];

/// Safe positions for backward scans.
///
/// A candidate survives only after a paragraph separator or directly after a
/// terminator, so in running prose the scan can reach the start of the
/// paragraph.
#[rustfmt::skip]
const BACKWARD: [Transition; COLUMNS * 16] = [
    // other       space       term        ambig_term  open        close
    // cjk         para        lower       upper       digit       quote
    // mark        eot

    // 0: end
    S,          S,          S,          S,          S,          S,
    S,          S,          S,          S,          S,          S,
    S,          S,

    // 1: start
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       m(9),       m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 2: candidate before other
    m(2),       m(3),       S,          m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 3: candidate before space
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 4: candidate before term
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 5: candidate before ambig_term
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 6: candidate before open
    m(2),       m(3),       S,          m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 7: candidate before close
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 8: candidate before cjk
    m(2),       m(3),       S,          S,          m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 9: candidate before para
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 10: candidate before lower
    m(2),       m(3),       S,          m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 11: candidate before upper
    m(2),       m(3),       S,          m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 12: candidate before digit
    m(2),       m(3),       S,          m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 13: candidate before quote
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 14: candidate before mark
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       S,          m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),

    // 15: candidate before eot
    m(2),       m(3),       m(4),       m(5),       m(6),       m(7),
    m(8),       m(9),       m(10),      m(11),      m(12),      m(13),
    m(14),      m(15),
];

pub(super) fn build() -> Result<BoundaryData, TableError> {
    let classes = ClassTable::derived(CATEGORIES, EXCEPTIONS.to_vec())?;
    let forward = TransitionTable::from_transitions(COLUMNS, FORWARD)?;
    let backward = TransitionTable::from_transitions(COLUMNS, BACKWARD)?;
    BoundaryData::new("sentence", classes, forward, backward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brkit_core::BoundaryScanner;
    use std::sync::Arc;

    fn boundaries(text: &str) -> Vec<usize> {
        let data = Arc::new(build().unwrap());
        BoundaryScanner::with_text(data, text).boundaries().collect()
    }

    fn assert_reverse_walk_matches(text: &str) {
        let data = Arc::new(build().unwrap());
        let mut scanner = BoundaryScanner::with_text(data, text);
        let forward: Vec<usize> = scanner.boundaries().collect();

        let mut reverse = vec![scanner.last()];
        while let Some(p) = scanner.previous() {
            reverse.push(p);
        }
        reverse.reverse();
        assert_eq!(reverse, forward, "{text:?}");

        for offset in 1..text.chars().count() {
            let expected = forward.iter().rev().copied().find(|&b| b < offset);
            assert_eq!(
                scanner.preceding(offset).unwrap(),
                expected,
                "{text:?} at {offset}"
            );
        }
    }

    #[test]
    fn test_classes() {
        let data = build().unwrap();
        assert_eq!(data.class_of('a'), LOWER);
        assert_eq!(data.class_of('Q'), UPPER);
        assert_eq!(data.class_of('.'), AMBIG_TERM);
        assert_eq!(data.class_of('?'), TERM);
        assert_eq!(data.class_of('\u{3002}'), TERM);
        assert_eq!(data.class_of('('), OPEN);
        assert_eq!(data.class_of('"'), QUOTE);
        assert_eq!(data.class_of('\u{2029}'), PARA);
        assert_eq!(data.class_of('\u{00A0}'), OTHER);
        assert_eq!(data.end_of_text_class(), EOT);
    }

    #[test]
    fn test_terminators() {
        assert_eq!(
            boundaries("Hello world. This is it! Really? yes."),
            vec![0, 13, 25, 33, 37]
        );
    }

    #[test]
    fn test_period_before_lowercase_or_digit_continues() {
        assert_eq!(boundaries("version 1.2 is out"), vec![0, 18]);
        assert_eq!(boundaries("The value is 3.5 today. Next"), vec![0, 24, 28]);
    }

    #[test]
    fn test_abbreviations_are_not_recognized() {
        assert_eq!(boundaries("Mr. Smith went home."), vec![0, 4, 20]);
    }

    #[test]
    fn test_closing_punctuation_stays_with_sentence() {
        assert_eq!(boundaries("He said \"Hi.\" Then left."), vec![0, 14, 24]);
        assert_eq!(boundaries("Is it? (Yes.) Fine"), vec![0, 7, 14, 18]);
    }

    #[test]
    fn test_paragraph_separator() {
        assert_eq!(boundaries("First.\u{2029}Second"), vec![0, 7, 13]);
    }

    #[test]
    fn test_ideographic_full_stop() {
        assert_eq!(
            boundaries("\u{65E5}\u{672C}\u{8A9E}\u{3002}\u{6B21}\u{306E}\u{6587}"),
            vec![0, 4, 7]
        );
    }

    #[test]
    fn test_reverse_walk_after_leading_mark_and_periods() {
        assert_eq!(boundaries("\u{0301}. a"), vec![0, 4]);
        assert_eq!(boundaries("a. aZ\u{3002}"), vec![0, 6]);
        assert_eq!(boundaries("a.. B. C"), vec![0, 4, 7, 8]);
        assert_reverse_walk_matches("\u{0301}. a");
        assert_reverse_walk_matches("a. aZ\u{3002}");
        assert_reverse_walk_matches("\u{4E00}. aZ.");
        assert_reverse_walk_matches("a.. B. C");
        assert_reverse_walk_matches("\u{0301} . \u{00E9}Z\u{2029}\u{00E9}");
    }

    #[test]
    fn test_reverse_walk_with_cjk_after_space() {
        assert_eq!(boundaries(" \u{4E00}."), vec![0, 3]);
        assert_eq!(boundaries("Hi. \u{4E00}\u{3002}"), vec![0, 4, 6]);
        assert_reverse_walk_matches(" \u{4E00}.");
        assert_reverse_walk_matches("Hi. \u{4E00}\u{3002}");
        assert_reverse_walk_matches("Hello world. This is it! Really? yes.");
    }
}
