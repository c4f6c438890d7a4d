//! Unicode general categories
//!
//! Class tables are keyed by general category, so every character needs one.
//! Lookup is a binary search over the generated ranges in `ranges.rs`; code
//! points missing from them are unassigned.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

mod ranges;

use ranges::RANGES;

/// Number of [`GeneralCategory`] variants
pub const CATEGORY_COUNT: usize = 30;

/// Unicode general category, two-letter abbreviations as in the UCD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GeneralCategory {
    /// Unassigned
    Cn = 0,
    /// Uppercase letter
    Lu,
    /// Lowercase letter
    Ll,
    /// Titlecase letter
    Lt,
    /// Modifier letter
    Lm,
    /// Other letter
    Lo,
    /// Non-spacing mark
    Mn,
    /// Enclosing mark
    Me,
    /// Spacing combining mark
    Mc,
    /// Decimal digit
    Nd,
    /// Letter number
    Nl,
    /// Other number
    No,
    /// Space separator
    Zs,
    /// Line separator
    Zl,
    /// Paragraph separator
    Zp,
    /// Control
    Cc,
    /// Format
    Cf,
    /// Private use
    Co,
    /// Surrogate
    Cs,
    /// Dash punctuation
    Pd,
    /// Open punctuation
    Ps,
    /// Close punctuation
    Pe,
    /// Connector punctuation
    Pc,
    /// Other punctuation
    Po,
    /// Math symbol
    Sm,
    /// Currency symbol
    Sc,
    /// Modifier symbol
    Sk,
    /// Other symbol
    So,
    /// Initial quote punctuation
    Pi,
    /// Final quote punctuation
    Pf,
}

use GeneralCategory::*;

impl GeneralCategory {
    /// Every category, in index order
    pub const ALL: [GeneralCategory; CATEGORY_COUNT] = [
        Cn, Lu, Ll, Lt, Lm, Lo, Mn, Me, Mc, Nd, Nl, No, Zs, Zl, Zp, Cc, Cf, Co, Cs, Pd, Ps, Pe,
        Pc, Po, Sm, Sc, Sk, So, Pi, Pf,
    ];

    /// Dense index, usable for `[_; CATEGORY_COUNT]` tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Two-letter abbreviation
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Cn => "Cn",
            Lu => "Lu",
            Ll => "Ll",
            Lt => "Lt",
            Lm => "Lm",
            Lo => "Lo",
            Mn => "Mn",
            Me => "Me",
            Mc => "Mc",
            Nd => "Nd",
            Nl => "Nl",
            No => "No",
            Zs => "Zs",
            Zl => "Zl",
            Zp => "Zp",
            Cc => "Cc",
            Cf => "Cf",
            Co => "Co",
            Cs => "Cs",
            Pd => "Pd",
            Ps => "Ps",
            Pe => "Pe",
            Pc => "Pc",
            Po => "Po",
            Sm => "Sm",
            Sc => "Sc",
            Sk => "Sk",
            So => "So",
            Pi => "Pi",
            Pf => "Pf",
        }
    }

    /// Category of `ch`
    pub fn of(ch: char) -> GeneralCategory {
        let cp = ch as u32;
        match RANGES.binary_search_by(|&(start, end, _)| locate(start, end, cp)) {
            Ok(idx) => RANGES[idx].2,
            Err(_) => Cn,
        }
    }

    /// Every category that occurs in `first..=last`, in code point order.
    ///
    /// Walks range intervals rather than code points, so the cost is bounded
    /// by the number of ranges the span touches. Gaps between assigned
    /// ranges are reported as `Cn`. A category can repeat.
    pub fn within(first: u32, last: u32) -> impl Iterator<Item = GeneralCategory> {
        let skip = RANGES.partition_point(|&(_, end, _)| end < first);
        let mut assigned = RANGES[skip..].iter().peekable();
        let mut next = Some(first);
        let mut pending = None;
        std::iter::from_fn(move || {
            if let Some(cat) = pending.take() {
                return Some(cat);
            }
            let from = next.filter(|&cp| cp <= last)?;
            match assigned.next_if(|&&(start, _, _)| start <= last) {
                Some(&(start, end, cat)) => {
                    let gap = start > from;
                    next = end.checked_add(1);
                    if gap {
                        pending = Some(cat);
                        Some(Cn)
                    } else {
                        Some(cat)
                    }
                }
                None => {
                    next = None;
                    Some(Cn)
                }
            }
        })
    }

    /// True for Mn, Mc and Me
    pub fn is_mark(self) -> bool {
        matches!(self, Mn | Mc | Me)
    }
}

fn locate(start: u32, end: u32, cp: u32) -> Ordering {
    if end < cp {
        Ordering::Less
    } else if start > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for GeneralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneralCategory::ALL
            .iter()
            .copied()
            .find(|cat| cat.abbreviation() == s)
            .ok_or_else(|| format!("unknown general category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_table_is_sorted_and_disjoint() {
        for pair in RANGES.windows(2) {
            let (a_start, a_end, _) = pair[0];
            let (b_start, _, _) = pair[1];
            assert!(a_start <= a_end, "inverted range at {a_start:#X}");
            assert!(a_end < b_start, "overlap at {b_start:#X}");
        }
    }

    #[test]
    fn test_ascii_categories() {
        assert_eq!(GeneralCategory::of('A'), Lu);
        assert_eq!(GeneralCategory::of('z'), Ll);
        assert_eq!(GeneralCategory::of('7'), Nd);
        assert_eq!(GeneralCategory::of(' '), Zs);
        assert_eq!(GeneralCategory::of('\n'), Cc);
        assert_eq!(GeneralCategory::of('.'), Po);
        assert_eq!(GeneralCategory::of('-'), Pd);
        assert_eq!(GeneralCategory::of('('), Ps);
        assert_eq!(GeneralCategory::of(')'), Pe);
        assert_eq!(GeneralCategory::of('$'), Sc);
        assert_eq!(GeneralCategory::of('+'), Sm);
        assert_eq!(GeneralCategory::of('_'), Pc);
    }

    #[test]
    fn test_latin1_categories() {
        assert_eq!(GeneralCategory::of('\u{A0}'), Zs);
        assert_eq!(GeneralCategory::of('\u{AD}'), Cf);
        assert_eq!(GeneralCategory::of('«'), Pi);
        assert_eq!(GeneralCategory::of('»'), Pf);
        assert_eq!(GeneralCategory::of('é'), Ll);
        assert_eq!(GeneralCategory::of('É'), Lu);
        assert_eq!(GeneralCategory::of('×'), Sm);
        assert_eq!(GeneralCategory::of('½'), No);
    }

    #[test]
    fn test_marks_and_letters() {
        assert_eq!(GeneralCategory::of('\u{0301}'), Mn);
        assert_eq!(GeneralCategory::of('\u{0903}'), Mc);
        assert_eq!(GeneralCategory::of('\u{20DD}'), Me);
        assert!(GeneralCategory::of('\u{0301}').is_mark());
        assert_eq!(GeneralCategory::of('あ'), Lo);
        assert_eq!(GeneralCategory::of('漢'), Lo);
        assert_eq!(GeneralCategory::of('Ω'), Lu);
        assert_eq!(GeneralCategory::of('ǅ'), Lt);
        assert_eq!(GeneralCategory::of('ー'), Lm);
        assert_eq!(GeneralCategory::of('Ⅳ'), Nl);
    }

    #[test]
    fn test_separators_and_cjk_punctuation() {
        assert_eq!(GeneralCategory::of('\u{2028}'), Zl);
        assert_eq!(GeneralCategory::of('\u{2029}'), Zp);
        assert_eq!(GeneralCategory::of('\u{3000}'), Zs);
        assert_eq!(GeneralCategory::of('。'), Po);
        assert_eq!(GeneralCategory::of('「'), Ps);
        assert_eq!(GeneralCategory::of('」'), Pe);
        assert_eq!(GeneralCategory::of('\u{FEFF}'), Cf);
    }

    #[test]
    fn test_indic_tibetan_and_myanmar_vowel_signs() {
        let spacing = [
            '\u{0A3E}', '\u{0ABE}', '\u{0B3E}', '\u{0BBF}', '\u{0C41}', '\u{0CBE}', '\u{0D3E}',
            '\u{0F3E}', '\u{102C}',
        ];
        let nonspacing = [
            '\u{0A41}', '\u{0AC1}', '\u{0B3F}', '\u{0BC0}', '\u{0C3F}', '\u{0CBF}', '\u{0D41}',
            '\u{0F72}', '\u{102D}',
        ];
        for ch in spacing {
            assert_eq!(GeneralCategory::of(ch), Mc, "U+{:04X}", ch as u32);
        }
        for ch in nonspacing {
            assert_eq!(GeneralCategory::of(ch), Mn, "U+{:04X}", ch as u32);
        }
        for base in ['\u{0A15}', '\u{0B95}', '\u{0C15}', '\u{0D15}', '\u{0F40}', '\u{1000}'] {
            assert_eq!(GeneralCategory::of(base), Lo, "U+{:04X}", base as u32);
        }
    }

    #[test]
    fn test_unassigned_and_supplementary() {
        assert_eq!(GeneralCategory::of('\u{0378}'), Cn);
        assert_eq!(GeneralCategory::of('\u{10FFFE}'), Cn);
        assert_eq!(GeneralCategory::of('\u{E0100}'), Mn);
        assert_eq!(GeneralCategory::of('\u{3400}'), Lo);
        assert_eq!(GeneralCategory::of('\u{D7A3}'), Lo);
        assert_eq!(GeneralCategory::of('\u{1F600}'), So);
    }

    #[test]
    fn test_within_reports_each_interval() {
        let cats: Vec<_> = GeneralCategory::within(0x41, 0x5B).collect();
        assert_eq!(cats, vec![Lu, Ps]);

        // U+0378..U+0379 are unassigned, U+037A is a modifier letter
        let cats: Vec<_> = GeneralCategory::within(0x0377, 0x037A).collect();
        assert_eq!(cats, vec![Ll, Cn, Lm]);

        let cats: Vec<_> = GeneralCategory::within(0x0378, 0x0379).collect();
        assert_eq!(cats, vec![Cn]);
        assert_eq!(GeneralCategory::within(5, 4).count(), 0);
    }

    #[test]
    fn test_within_covers_every_category_of_the_span() {
        let seen: std::collections::BTreeSet<_> = GeneralCategory::within(0, 0x10FFFF).collect();
        for cat in GeneralCategory::ALL {
            if cat != Cs {
                assert!(seen.contains(&cat), "{cat} missing");
            }
        }
        assert!(!seen.contains(&Cs));

        for ch in ['a', '\u{0BBF}', '\u{2028}', '\u{FFFF}'] {
            let cp = ch as u32;
            let cats: Vec<_> = GeneralCategory::within(cp, cp).collect();
            assert_eq!(cats, vec![GeneralCategory::of(ch)]);
        }
    }

    #[test]
    fn test_end_of_text_sentinel_is_unassigned() {
        assert_eq!(GeneralCategory::of('\u{FFFF}'), Cn);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, cat) in GeneralCategory::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn test_abbreviation_round_trip() {
        for cat in GeneralCategory::ALL {
            assert_eq!(cat.abbreviation().parse::<GeneralCategory>(), Ok(cat));
        }
        assert!("Xx".parse::<GeneralCategory>().is_err());
    }
}
