//! Word boundaries
//!
//! A word is a run of letters, which may contain apostrophes, hyphens and
//! similar punctuation when letters follow them. A number is a run of digits
//! with an optional prefix (currency, `#`, `.`), inner separators and a
//! suffix (`%`). Letter and digit runs that touch stay together ("ascii2ebcdic",
//! "$30F3"). Whitespace runs, CR LF, kanji runs and kana runs are single
//! segments; every other character stands alone. Non-spacing marks are
//! transparent.

use super::{go, m, MS, S};
use brkit_core::{
    BoundaryData, ClassRange, ClassTable, TableError, Transition, TransitionTable, CATEGORY_COUNT,
};

const OTHER: u8 = 0;
const LETTER: u8 = 1;
const DIGIT: u8 = 2;
const MID_LETTER: u8 = 3;
const MID_LETTER_NUM: u8 = 4;
const PRE_NUM: u8 = 5;
const POST_NUM: u8 = 6;
const MID_NUM: u8 = 7;
const PRE_MID_NUM: u8 = 8;
const BLANK: u8 = 9;
const LF: u8 = 10;
const KATAKANA: u8 = 11;
const HIRAGANA: u8 = 12;
const KANJI: u8 = 13;
const KANA_MARK: u8 = 14;
const CR: u8 = 15;
const MARK: u8 = 16;
const EOT: u8 = 17;
const COLUMNS: usize = 18;

const CATEGORIES: [u8; CATEGORY_COUNT] = [
    OTHER,           // Cn
    LETTER,          // Lu
    LETTER,          // Ll
    LETTER,          // Lt
    LETTER,          // Lm
    LETTER,          // Lo
    MARK,            // Mn
    MARK,            // Me
    OTHER,           // Mc
    DIGIT,           // Nd
    LETTER,          // Nl
    DIGIT,           // No
    BLANK,           // Zs
    OTHER,           // Zl
    OTHER,           // Zp
    OTHER,           // Cc
    OTHER,           // Cf
    OTHER,           // Co
    OTHER,           // Cs
    MID_LETTER,      // Pd
    OTHER,           // Ps
    OTHER,           // Pe
    OTHER,           // Pc
    OTHER,           // Po
    OTHER,           // Sm
    PRE_NUM,         // Sc
    OTHER,           // Sk
    OTHER,           // So
    OTHER,           // Pi
    OTHER,           // Pf
];

const EXCEPTIONS: &[ClassRange] = &[
    ClassRange::single('\t', BLANK),
    ClassRange::single('\n', LF),
    ClassRange::single('\u{000C}', LF),
    ClassRange::single('\r', CR),
    ClassRange::single('"', MID_LETTER_NUM),
    ClassRange::single('#', PRE_NUM),
    ClassRange::span('%', '&', POST_NUM),
    ClassRange::single('\'', MID_LETTER_NUM),
    ClassRange::single(',', MID_NUM),
    ClassRange::single('.', PRE_MID_NUM),
    ClassRange::single('\u{00A2}', POST_NUM),
    ClassRange::single('\u{00AD}', MID_LETTER),
    ClassRange::single('\u{066A}', POST_NUM),
    ClassRange::single('\u{066B}', MID_NUM),
    ClassRange::single('\u{2027}', MID_LETTER),
    ClassRange::span('\u{2028}', '\u{2029}', LF),
    ClassRange::span('\u{2030}', '\u{2031}', POST_NUM),
    ClassRange::single('\u{3005}', KANJI),
    ClassRange::span('\u{3041}', '\u{3094}', HIRAGANA),
    ClassRange::span('\u{3099}', '\u{309C}', KANA_MARK),
    ClassRange::span('\u{309D}', '\u{309E}', HIRAGANA),
    ClassRange::span('\u{30A1}', '\u{30F6}', KATAKANA),
    ClassRange::single('\u{30FC}', KANA_MARK),
    ClassRange::span('\u{30FD}', '\u{30FE}', KATAKANA),
    ClassRange::span('\u{4E00}', '\u{9FA5}', KANJI),
    ClassRange::span('\u{AC00}', '\u{D7A3}', LETTER),
    ClassRange::span('\u{F900}', '\u{FA2D}', KANJI),
    ClassRange::single('\u{FFFF}', EOT),
];

#[rustfmt::skip]
const FORWARD: [Transition; COLUMNS * 15] = [
    // other           letter          digit           mid_letter      mid_letter_num  pre_num
    // post_num        mid_num         pre_mid_num     blank           lf              katakana
    // hiragana        kanji           kana_mark       cr              mark            eot

    // 0: end
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,

    // 1: dispatch
    m(14),          m(2),           m(3),           m(14),          m(14),          m(5),
    m(14),          m(14),          m(5),           m(6),           m(4),           m(10),
    m(11),          m(12),          m(9),           m(13),          go(1),          MS,

    // 2: letters
    MS,             m(2),           m(3),           m(7),           m(7),           MS,
    MS,             MS,             m(7),           MS,             MS,             MS,
    MS,             MS,             MS,             MS,             go(2),          MS,

    // 3: digits
    MS,             m(2),           m(3),           MS,             m(8),           MS,
    m(14),          m(8),           m(8),           MS,             MS,             MS,
    MS,             MS,             MS,             MS,             go(3),          MS,

    // 4: line feed
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,

    // 5: number prefix
    MS,             MS,             m(3),           MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             go(5),          MS,

    // 6: whitespace
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             m(6),           m(4),           MS,
    MS,             MS,             MS,             m(13),          go(6),          MS,

    // 7: inside a word
    S,              m(2),           S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              go(7),          S,

    // 8: inside a number
    S,              S,              m(3),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              go(8),          S,

    // 9: kana sound mark
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             m(10),
    m(11),          MS,             m(9),           MS,             go(9),          MS,

    // 10: katakana
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             m(10),
    MS,             MS,             m(10),          MS,             go(10),         MS,

    // 11: hiragana
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,
    m(11),          MS,             m(11),          MS,             go(11),         MS,

    // 12: kanji
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             m(12),          MS,             MS,             go(12),         MS,

    // 13: carriage return
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             m(4),           MS,
    MS,             MS,             MS,             MS,             MS,             MS,

    // 14: single character
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             MS,             MS,
    MS,             MS,             MS,             MS,             go(14),         MS,
];

/// Safe positions for backward scans.
///
/// Row 1 marks the last character read. Every later row holds a marked
/// candidate in front of a character of the class it names; the character
/// read next either proves a boundary there (stop) or becomes the new
/// candidate. The two-class rows wait for one more character before deciding.
#[rustfmt::skip]
const BACKWARD: [Transition; COLUMNS * 25] = [
    // other           letter          digit           mid_letter      mid_letter_num  pre_num
    // post_num        mid_num         pre_mid_num     blank           lf              katakana
    // hiragana        kanji           kana_mark       cr              mark            eot

    // 0: end
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,

    // 1: start
    m(2),           m(3),           m(4),           m(5),           m(6),           m(7),
    m(8),           m(9),           m(10),          m(11),          m(12),          m(13),
    m(14),          m(15),          m(16),          m(17),          m(18),          m(19),

    // 2: candidate before other
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 3: candidate before letter
    S,              m(3),           m(4),           go(20),         go(21),         S,
    S,              S,              go(22),         S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 4: candidate before digit
    S,              m(3),           m(4),           S,              go(23),         m(7),
    S,              go(24),         m(10),          S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 5: candidate before mid_letter
    S,              m(3),           S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 6: candidate before mid_letter_num
    S,              m(3),           m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 7: candidate before pre_num
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 8: candidate before post_num
    S,              S,              m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 9: candidate before mid_num
    S,              S,              m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 10: candidate before pre_mid_num
    S,              m(3),           m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 11: candidate before blank
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              m(11),          S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 12: candidate before lf
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              m(11),          S,              S,
    S,              S,              S,              m(17),          m(18),          m(19),

    // 13: candidate before katakana
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              m(13),
    S,              S,              m(16),          S,              m(18),          m(19),

    // 14: candidate before hiragana
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    m(14),          S,              m(16),          S,              m(18),          m(19),

    // 15: candidate before kanji
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              m(15),          S,              S,              m(18),          m(19),

    // 16: candidate before kana_mark
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              S,              m(13),
    m(14),          S,              m(16),          S,              m(18),          m(19),

    // 17: candidate before cr
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              m(11),          S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 18: candidate before mark
    m(2),           m(3),           m(4),           m(5),           m(6),           m(7),
    m(8),           m(9),           m(10),          m(11),          S,              m(13),
    m(14),          m(15),          m(16),          S,              m(18),          m(19),

    // 19: candidate before eot
    m(2),           m(3),           m(4),           m(5),           m(6),           m(7),
    m(8),           m(9),           m(10),          m(11),          m(12),          m(13),
    m(14),          m(15),          m(16),          m(17),          m(18),          m(19),

    // 20: candidate between mid_letter and letter
    S,              m(3),           S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 21: candidate between mid_letter_num and letter
    S,              m(3),           S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 22: candidate between pre_mid_num and letter
    S,              m(3),           S,              S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 23: candidate between mid_letter_num and digit
    S,              S,              m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),

    // 24: candidate between mid_num and digit
    S,              S,              m(4),           S,              S,              S,
    S,              S,              S,              S,              S,              S,
    S,              S,              S,              S,              m(18),          m(19),
];

pub(super) fn build() -> Result<BoundaryData, TableError> {
    let classes = ClassTable::derived(CATEGORIES, EXCEPTIONS.to_vec())?;
    let forward = TransitionTable::from_transitions(COLUMNS, FORWARD)?;
    let backward = TransitionTable::from_transitions(COLUMNS, BACKWARD)?;
    BoundaryData::new("word", classes, forward, backward)
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
        assert_eq!(data.class_of('A'), LETTER);
        assert_eq!(data.class_of('7'), DIGIT);
        assert_eq!(data.class_of('\''), MID_LETTER_NUM);
        assert_eq!(data.class_of('$'), PRE_NUM);
        assert_eq!(data.class_of('%'), POST_NUM);
        assert_eq!(data.class_of('\u{3042}'), HIRAGANA);
        assert_eq!(data.class_of('\u{30AB}'), KATAKANA);
        assert_eq!(data.class_of('\u{65E5}'), KANJI);
        assert_eq!(data.class_of('\u{AC00}'), LETTER);
        assert_eq!(data.class_of('\u{0301}'), MARK);
        assert_eq!(data.end_of_text_class(), EOT);
    }

    #[test]
    fn test_punctuation_and_spaces_split_words() {
        assert_eq!(boundaries("Hello, world!"), vec![0, 5, 6, 7, 12, 13]);
        assert_eq!(boundaries("  tab\tbed"), vec![0, 2, 5, 6, 9]);
    }

    #[test]
    fn test_inner_punctuation_needs_letters_on_both_sides() {
        assert_eq!(boundaries("can't stop"), vec![0, 5, 6, 10]);
        assert_eq!(boundaries("e-mail"), vec![0, 6]);
        assert_eq!(boundaries("a--b"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            boundaries("3.14 and $30 or 50%"),
            vec![0, 4, 5, 8, 9, 12, 13, 15, 16, 19]
        );
        assert_eq!(boundaries("1,000.5"), vec![0, 7]);
        assert_eq!(boundaries("a1b2"), vec![0, 4]);
    }

    #[test]
    fn test_crlf_is_one_segment() {
        assert_eq!(boundaries("x\r\ny"), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_kana_and_kanji_runs() {
        assert_eq!(
            boundaries("\u{65E5}\u{672C}\u{8A9E}\u{30C6}\u{30AD}\u{30B9}\u{30C8}\u{3067}\u{3059}"),
            vec![0, 3, 7, 9]
        );
    }

    #[test]
    fn test_leading_mark_does_not_split_backward() {
        assert_eq!(boundaries("\u{0301}aa"), vec![0, 3]);
        assert_eq!(boundaries("\u{0301}a-b"), vec![0, 4]);
        assert_reverse_walk_matches("\u{0301}aa");
        assert_reverse_walk_matches("\u{0301}a-b");
        assert_reverse_walk_matches(" \u{0301}x");
    }

    #[test]
    fn test_reverse_walk_over_mixed_text() {
        assert_reverse_walk_matches("3.14 and $30 or 50%");
        assert_reverse_walk_matches("can't stop, e-mail\r\n\u{65E5}\u{672C}\u{30C6}\u{30AD}");
        assert_reverse_walk_matches("\u{00E9}\u{0301}-b #5 .5");
    }
}
