//! Line-break opportunities
//!
//! A line may be broken after whitespace, after a dash that is not a minus
//! sign, and before or after any kana or kanji, except next to punctuation
//! that must stay with its neighbor. Hard breaks (LF, FF, line and paragraph
//! separators, CR or CR LF) always end a line. No-break characters glue both
//! sides.

use super::{go, m, MS, S};
use brkit_core::{
    BoundaryData, ClassRange, ClassTable, TableError, Transition, TransitionTable, CATEGORY_COUNT,
};

const HARD: u8 = 0;
const BLANK: u8 = 1;
const CR: u8 = 2;
const TEXT: u8 = 3;
const DASH: u8 = 4;
const IDEO: u8 = 5;
const OPEN: u8 = 6;
const CLOSE: u8 = 7;
const DIGIT: u8 = 8;
const NUM_PUNCT: u8 = 9;
const CURRENCY: u8 = 10;
const QUOTE: u8 = 11;
const MARK: u8 = 12;
const GLUE: u8 = 13;
const EOT: u8 = 14;
const COLUMNS: usize = 15;

const CATEGORIES: [u8; CATEGORY_COUNT] = [
    TEXT,            // Cn
    TEXT,            // Lu
    TEXT,            // Ll
    TEXT,            // Lt
    TEXT,            // Lm
    TEXT,            // Lo
    MARK,            // Mn
    MARK,            // Me
    TEXT,            // Mc
    DIGIT,           // Nd
    TEXT,            // Nl
    DIGIT,           // No
    BLANK,           // Zs
    BLANK,           // Zl
    BLANK,           // Zp
    BLANK,           // Cc
    TEXT,            // Cf
    TEXT,            // Co
    TEXT,            // Cs
    DASH,            // Pd
    OPEN,            // Ps
    CLOSE,           // Pe
    TEXT,            // Pc
    TEXT,            // Po
    TEXT,            // Sm
    OPEN,            // Sc
    TEXT,            // Sk
    TEXT,            // So
    OPEN,            // Pi
    CLOSE,           // Pf
];

const EXCEPTIONS: &[ClassRange] = &[
    ClassRange::single('\u{0003}', HARD),
    ClassRange::span('\t', '\u{000C}', HARD),
    ClassRange::single('\r', CR),
    ClassRange::single('!', CLOSE),
    ClassRange::single('"', QUOTE),
    ClassRange::single('$', CURRENCY),
    ClassRange::single('%', CLOSE),
    ClassRange::single(',', NUM_PUNCT),
    ClassRange::single('.', NUM_PUNCT),
    ClassRange::span(':', ';', CLOSE),
    ClassRange::single('?', CLOSE),
    ClassRange::single('\u{00A0}', GLUE),
    ClassRange::single('\u{00A2}', CLOSE),
    ClassRange::span('\u{00A3}', '\u{00A5}', CURRENCY),
    ClassRange::single('\u{00AD}', DASH),
    ClassRange::single('\u{00B0}', CLOSE),
    ClassRange::span('\u{00B2}', '\u{00B3}', TEXT),
    ClassRange::single('\u{00B9}', TEXT),
    ClassRange::single('\u{066A}', CLOSE),
    ClassRange::single('\u{2007}', GLUE),
    ClassRange::single('\u{2011}', GLUE),
    ClassRange::span('\u{2028}', '\u{2029}', HARD),
    ClassRange::span('\u{2030}', '\u{2034}', CLOSE),
    ClassRange::single('\u{2103}', CLOSE),
    ClassRange::single('\u{2109}', CLOSE),
    ClassRange::span('\u{3001}', '\u{3002}', CLOSE),
    ClassRange::single('\u{3005}', CLOSE),
    ClassRange::single('\u{3041}', CLOSE),
    ClassRange::single('\u{3042}', IDEO),
    ClassRange::single('\u{3043}', CLOSE),
    ClassRange::single('\u{3044}', IDEO),
    ClassRange::single('\u{3045}', CLOSE),
    ClassRange::single('\u{3046}', IDEO),
    ClassRange::single('\u{3047}', CLOSE),
    ClassRange::single('\u{3048}', IDEO),
    ClassRange::single('\u{3049}', CLOSE),
    ClassRange::span('\u{304A}', '\u{3062}', IDEO),
    ClassRange::single('\u{3063}', CLOSE),
    ClassRange::span('\u{3064}', '\u{3082}', IDEO),
    ClassRange::single('\u{3083}', CLOSE),
    ClassRange::single('\u{3084}', IDEO),
    ClassRange::single('\u{3085}', CLOSE),
    ClassRange::single('\u{3086}', IDEO),
    ClassRange::single('\u{3087}', CLOSE),
    ClassRange::span('\u{3088}', '\u{308D}', IDEO),
    ClassRange::single('\u{308E}', CLOSE),
    ClassRange::span('\u{308F}', '\u{3094}', IDEO),
    ClassRange::span('\u{3099}', '\u{309E}', CLOSE),
    ClassRange::single('\u{30A1}', CLOSE),
    ClassRange::single('\u{30A2}', IDEO),
    ClassRange::single('\u{30A3}', CLOSE),
    ClassRange::single('\u{30A4}', IDEO),
    ClassRange::single('\u{30A5}', CLOSE),
    ClassRange::single('\u{30A6}', IDEO),
    ClassRange::single('\u{30A7}', CLOSE),
    ClassRange::single('\u{30A8}', IDEO),
    ClassRange::single('\u{30A9}', CLOSE),
    ClassRange::span('\u{30AA}', '\u{30C2}', IDEO),
    ClassRange::single('\u{30C3}', CLOSE),
    ClassRange::span('\u{30C4}', '\u{30E2}', IDEO),
    ClassRange::single('\u{30E3}', CLOSE),
    ClassRange::single('\u{30E4}', IDEO),
    ClassRange::single('\u{30E5}', CLOSE),
    ClassRange::single('\u{30E6}', IDEO),
    ClassRange::single('\u{30E7}', CLOSE),
    ClassRange::span('\u{30E8}', '\u{30ED}', IDEO),
    ClassRange::single('\u{30EE}', CLOSE),
    ClassRange::span('\u{30EF}', '\u{30F4}', IDEO),
    ClassRange::span('\u{30F5}', '\u{30F6}', CLOSE),
    ClassRange::span('\u{30F7}', '\u{30FA}', IDEO),
    ClassRange::span('\u{30FC}', '\u{30FE}', CLOSE),
    ClassRange::span('\u{4E00}', '\u{9FA5}', IDEO),
    ClassRange::span('\u{F900}', '\u{FA2D}', IDEO),
    ClassRange::single('\u{FEFF}', GLUE),
    ClassRange::single('\u{FF01}', CLOSE),
    ClassRange::single('\u{FF0C}', CLOSE),
    ClassRange::single('\u{FF0E}', CLOSE),
    ClassRange::single('\u{FF1F}', CLOSE),
    ClassRange::single('\u{FFFF}', EOT),
];

#[rustfmt::skip]
const FORWARD: [Transition; COLUMNS * 12] = [
    // hard       blank      cr         text       dash       ideo
    // open       close      digit      num_punct  currency   quote
    // mark       glue       eot

    // 0: end
    S,         S,         S,         S,         S,         S,
    S,         S,         S,         S,         S,         S,
    S,         S,         S,

    // 1: dispatch
    m(4),      m(2),      m(7),      m(3),      m(6),      m(5),
    m(1),      m(8),      m(9),      m(8),      m(1),      m(3),
    m(1),      m(1),      MS,

    // 2: blanks
    m(4),      m(2),      m(7),      MS,        MS,        MS,
    MS,        MS,        MS,        MS,        MS,        MS,
    m(2),      m(1),      MS,

    // 3: ordinary text
    m(4),      m(2),      m(7),      m(3),      m(6),      MS,
    m(1),      m(8),      m(9),      m(8),      m(1),      m(3),
    m(3),      m(1),      MS,

    // 4: hard break
    MS,        MS,        MS,        MS,        MS,        MS,
    MS,        MS,        MS,        MS,        MS,        MS,
    MS,        MS,        MS,

    // 5: ideographs
    m(4),      m(2),      m(7),      MS,        MS,        MS,
    MS,        m(8),      MS,        m(8),      MS,        MS,
    m(5),      m(1),      MS,

    // 6: dashes
    m(4),      MS,        m(7),      MS,        MS,        MS,
    MS,        MS,        m(9),      MS,        m(11),     MS,
    m(6),      m(1),      MS,

    // 7: carriage return
    m(4),      MS,        MS,        MS,        MS,        MS,
    MS,        MS,        MS,        MS,        MS,        MS,
    MS,        MS,        MS,

    // 8: closing punctuation
    m(4),      m(2),      m(7),      MS,        MS,        MS,
    MS,        m(8),      MS,        m(8),      MS,        m(3),
    m(8),      m(1),      MS,

    // 9: digits
    m(4),      m(2),      m(7),      m(3),      m(6),      MS,
    MS,        m(8),      m(9),      m(10),     m(10),     m(3),
    m(9),      m(1),      MS,

    // 10: numeric punctuation
    m(4),      m(2),      m(7),      MS,        MS,        MS,
    MS,        m(8),      m(9),      m(8),      MS,        MS,
    m(10),     m(1),      MS,

    // 11: dash before currency
    S,         S,         S,         S,         S,         S,
    S,         S,         m(9),      S,         S,         S,
    go(11),    m(1),      S,
];

/// Safe positions for backward scans: a marked candidate moves left until the
/// character before it guarantees a break. Row 17 holds a candidate between
/// numeric punctuation and a digit, which needs a second character to settle.
#[rustfmt::skip]
const BACKWARD: [Transition; COLUMNS * 18] = [
    // hard       blank      cr         text       dash       ideo
    // open       close      digit      num_punct  currency   quote
    // mark       glue       eot

    // 0: end
    S,         S,         S,         S,         S,         S,
    S,         S,         S,         S,         S,         S,
    S,         S,         S,

    // 1: start
    m(2),      m(3),      m(4),      m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 2: candidate before hard
    S,         m(3),      m(4),      m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 3: candidate before blank
    S,         m(3),      S,         m(5),      S,         m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 4: candidate before cr
    S,         m(3),      S,         m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 5: candidate before text
    S,         S,         S,         m(5),      S,         S,
    m(8),      S,         m(10),     S,         m(12),     m(13),
    m(14),     m(15),     m(16),

    // 6: candidate before dash
    S,         S,         S,         m(5),      S,         S,
    m(8),      S,         m(10),     S,         m(12),     m(13),
    m(14),     m(15),     m(16),

    // 7: candidate before ideo
    S,         S,         S,         S,         S,         S,
    m(8),      S,         S,         S,         m(12),     S,
    m(14),     m(15),     m(16),

    // 8: candidate before open
    S,         S,         S,         m(5),      S,         S,
    m(8),      S,         S,         S,         m(12),     m(13),
    m(14),     m(15),     m(16),

    // 9: candidate before close
    S,         S,         S,         m(5),      S,         m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 10: candidate before digit
    S,         S,         S,         m(5),      m(6),      S,
    m(8),      S,         m(10),     go(17),    m(12),     m(13),
    m(14),     m(15),     m(16),

    // 11: candidate before num_punct
    S,         S,         S,         m(5),      S,         m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 12: candidate before currency
    S,         S,         S,         m(5),      m(6),      S,
    m(8),      S,         m(10),     S,         m(12),     m(13),
    m(14),     m(15),     m(16),

    // 13: candidate before quote
    S,         S,         S,         m(5),      S,         S,
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 14: candidate before mark
    S,         m(3),      S,         m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 15: candidate before glue
    S,         m(3),      S,         m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 16: candidate before eot
    m(2),      m(3),      m(4),      m(5),      m(6),      m(7),
    m(8),      m(9),      m(10),     m(11),     m(12),     m(13),
    m(14),     m(15),     m(16),

    // 17: candidate between num_punct and digit
    S,         S,         S,         S,         S,         S,
    S,         S,         m(10),     S,         S,         S,
    m(14),     S,         m(16),
];

pub(super) fn build() -> Result<BoundaryData, TableError> {
    let classes = ClassTable::derived(CATEGORIES, EXCEPTIONS.to_vec())?;
    let forward = TransitionTable::from_transitions(COLUMNS, FORWARD)?;
    let backward = TransitionTable::from_transitions(COLUMNS, BACKWARD)?;
    BoundaryData::new("line", classes, forward, backward)
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
        assert_eq!(data.class_of(' '), BLANK);
        assert_eq!(data.class_of('\n'), HARD);
        assert_eq!(data.class_of('-'), DASH);
        assert_eq!(data.class_of('$'), CURRENCY);
        assert_eq!(data.class_of('\u{00A0}'), GLUE);
        assert_eq!(data.class_of('\u{3042}'), IDEO);
        assert_eq!(data.class_of('\u{3041}'), CLOSE);
        assert_eq!(data.class_of('\u{3002}'), CLOSE);
        assert_eq!(data.end_of_text_class(), EOT);
    }

    #[test]
    fn test_breaks_after_spaces_and_dashes() {
        assert_eq!(
            boundaries("The quick brown-fox jumps."),
            vec![0, 4, 10, 16, 20, 26]
        );
    }

    #[test]
    fn test_numbers_stay_whole() {
        assert_eq!(boundaries("1,000 dollars"), vec![0, 6, 13]);
        assert_eq!(boundaries("x -5 y"), vec![0, 2, 5, 6]);
        assert_eq!(boundaries("$-3"), vec![0, 3]);
    }

    #[test]
    fn test_no_break_space_glues() {
        assert_eq!(boundaries("a\u{00A0}b c"), vec![0, 4, 5]);
    }

    #[test]
    fn test_hard_breaks() {
        assert_eq!(boundaries("line\r\nnext"), vec![0, 6, 10]);
        assert_eq!(boundaries("A\u{2028}B"), vec![0, 2, 3]);
    }

    #[test]
    fn test_ideographs_break_between_each_other() {
        // the full stop stays with the character before it
        assert_eq!(
            boundaries("\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{30C6}\u{30AD}\u{30B9}\u{30C8}\u{3002}"),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 9]
        );
    }

    #[test]
    fn test_brackets() {
        assert_eq!(boundaries("(hello) world"), vec![0, 8, 13]);
        assert_eq!(boundaries("wait!! now"), vec![0, 7, 10]);
    }

    #[test]
    fn test_no_break_space_glues_backward() {
        assert_eq!(boundaries(" \u{00A0}a"), vec![0, 3]);
        assert_eq!(boundaries("\u{4E00}\u{00A0}b"), vec![0, 3]);
        assert_eq!(boundaries("12.5 \u{00A0}x"), vec![0, 7]);
        assert_reverse_walk_matches(" \u{00A0}a");
        assert_reverse_walk_matches("\u{4E00}\u{00A0}b");
        assert_reverse_walk_matches("12.5 \u{00A0}x");
        assert_reverse_walk_matches("a-\u{00A0}b");
    }

    #[test]
    fn test_reverse_walk_over_mixed_text() {
        assert_reverse_walk_matches("The (quick) fox, $3.50 - \"ok\"!\n\u{3042}\u{3041}\u{4E00} end");
        assert_reverse_walk_matches("1.5-2.5 \u{0301}x \r\n\u{4E00}\u{3002}");
    }
}
