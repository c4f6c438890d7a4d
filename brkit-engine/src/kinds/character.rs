//! Character-cluster boundaries
//!
//! Combining marks stay with the character before them, CR LF is one
//! cluster, and conjoining Hangul jamo form a syllable (L* V* T*).

use super::{go, m, MS, S};
use brkit_core::{
    BoundaryData, ClassRange, ClassTable, TableError, Transition, TransitionTable, CATEGORY_COUNT,
};

const MARK: u8 = 0;
const BASE: u8 = 1;
const CR: u8 = 2;
const LF: u8 = 3;
const JAMO_L: u8 = 4;
const JAMO_V: u8 = 5;
const JAMO_T: u8 = 6;
const EOT: u8 = 7;
const COLUMNS: usize = 8;

#[rustfmt::skip]
const CATEGORIES: [u8; CATEGORY_COUNT] = [
    BASE, // Cn
    BASE, BASE, BASE, BASE, BASE, // Lu Ll Lt Lm Lo
    MARK, MARK, MARK, // Mn Me Mc
    BASE, BASE, BASE, // Nd Nl No
    BASE, BASE, BASE, // Zs Zl Zp
    BASE, BASE, BASE, BASE, // Cc Cf Co Cs
    BASE, BASE, BASE, BASE, BASE, // Pd Ps Pe Pc Po
    BASE, BASE, BASE, BASE, // Sm Sc Sk So
    BASE, BASE, // Pi Pf
];

const EXCEPTIONS: &[ClassRange] = &[
    ClassRange::single('\n', LF),
    ClassRange::single('\r', CR),
    ClassRange::span('\u{1100}', '\u{115F}', JAMO_L),
    ClassRange::span('\u{1160}', '\u{11A7}', JAMO_V),
    ClassRange::span('\u{11A8}', '\u{11FF}', JAMO_T),
    ClassRange::single('\u{FFFF}', EOT),
];

#[rustfmt::skip]
const FORWARD: [Transition; COLUMNS * 8] = [
    // mark    base     cr       lf       jamo_l   jamo_v   jamo_t   eot

    // 0: end
    S,         S,       S,       S,       S,       S,       S,       S,
    // 1: start of a cluster
    m(2),      m(2),    m(3),    m(4),    m(5),    m(6),    m(7),    MS,
    // 2: base plus marks
    go(2),     MS,      MS,      MS,      MS,      MS,      MS,      MS,
    // 3: after CR
    MS,        MS,      MS,      go(4),   MS,      MS,      MS,      MS,
    // 4: after LF
    MS,        MS,      MS,      MS,      MS,      MS,      MS,      MS,
    // 5: leading jamo
    go(2),     MS,      MS,      MS,      go(5),   go(6),   MS,      MS,
    // 6: vowel jamo
    go(2),     MS,      MS,      MS,      MS,      go(6),   go(7),   MS,
    // 7: trailing jamo
    go(2),     MS,      MS,      MS,      MS,      MS,      go(7),   MS,
];

// Walks back over marks and jamo to the nearest base, CR or lone LF.
#[rustfmt::skip]
const BACKWARD: [Transition; COLUMNS * 3] = [
    // mark    base     cr       lf       jamo_l   jamo_v   jamo_t   eot

    // 0: end
    S,         S,       S,       S,       S,       S,       S,       S,
    // 1
    go(1),     MS,      MS,      m(2),    go(1),   go(1),   go(1),   S,
    // 2: LF, possibly the second half of CR LF
    S,         S,       MS,      S,       S,       S,       S,       S,
];

pub(super) fn build() -> Result<BoundaryData, TableError> {
    let classes = ClassTable::derived(CATEGORIES, EXCEPTIONS.to_vec())?;
    let forward = TransitionTable::from_transitions(COLUMNS, FORWARD)?;
    let backward = TransitionTable::from_transitions(COLUMNS, BACKWARD)?;
    BoundaryData::new("character", classes, forward, backward)
}
