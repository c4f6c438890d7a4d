//! Character to class-code mapping
//!
//! A [`ClassTable`] answers `class_of(ch)` for every `char` with three
//! immutable pieces of data:
//!
//! 1. a base mapping with one class per [`GeneralCategory`],
//! 2. a sorted list of [`ClassRange`] exceptions for characters whose class
//!    differs from their category's,
//! 3. a direct lookup array for the lowest 256 code points.
//!
//! The binary search over exceptions only runs for characters whose category
//! actually has an exception somewhere; those flags are derived from the
//! exception list at construction, so they can never disagree with it.

use crate::category::{GeneralCategory, CATEGORY_COUNT};
use crate::error::TableError;

/// Reserved value fed to the automaton once the text is exhausted
///
/// U+FFFF is a noncharacter, so it never appears in well-formed text.
pub const END_OF_TEXT: char = '\u{FFFF}';

/// Size of the direct lookup array
pub const FAST_PATH_LEN: usize = 256;

/// Inclusive range of characters sharing one class code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    /// First character of the range
    pub start: char,
    /// Last character of the range (inclusive)
    pub end: char,
    /// Class code assigned to every character in the range
    pub class: u8,
}

impl ClassRange {
    /// Range covering a single character
    pub const fn single(ch: char, class: u8) -> Self {
        Self {
            start: ch,
            end: ch,
            class,
        }
    }

    /// Range covering `start..=end`
    pub const fn span(start: char, end: char, class: u8) -> Self {
        Self { start, end, class }
    }

    /// Whether `ch` falls inside the range
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.start <= ch && ch <= self.end
    }
}

/// Compacted mapping from every character to a class code
#[derive(Debug, Clone)]
pub struct ClassTable {
    base: [u8; CATEGORY_COUNT],
    exceptions: Vec<ClassRange>,
    has_exceptions: [bool; CATEGORY_COUNT],
    fast: [u8; FAST_PATH_LEN],
}

impl ClassTable {
    /// Build a table from all three parts
    ///
    /// `exceptions` must ascend by `end` and must not overlap. The fast-path
    /// array is taken as given; see [`ClassTable::derived`] to compute it.
    pub fn new(
        base: [u8; CATEGORY_COUNT],
        exceptions: Vec<ClassRange>,
        fast: [u8; FAST_PATH_LEN],
    ) -> Result<Self, TableError> {
        validate_exceptions(&exceptions)?;

        let mut has_exceptions = [false; CATEGORY_COUNT];
        for range in &exceptions {
            for category in GeneralCategory::within(range.start as u32, range.end as u32) {
                has_exceptions[category.index()] = true;
            }
        }

        Ok(Self {
            base,
            exceptions,
            has_exceptions,
            fast,
        })
    }

    /// Build a table whose fast-path array agrees with the base mapping and
    /// exceptions
    pub fn derived(
        base: [u8; CATEGORY_COUNT],
        exceptions: Vec<ClassRange>,
    ) -> Result<Self, TableError> {
        validate_exceptions(&exceptions)?;

        let mut fast = [0u8; FAST_PATH_LEN];
        for (cp, slot) in fast.iter_mut().enumerate() {
            // cp < 256, always a valid scalar value
            let ch = char::from(cp as u8);
            *slot = lookup(&exceptions, ch)
                .unwrap_or_else(|| base[GeneralCategory::of(ch).index()]);
        }

        Self::new(base, exceptions, fast)
    }

    /// Class code of `ch`
    #[inline]
    pub fn class_of(&self, ch: char) -> u8 {
        let cp = ch as u32;
        if cp < FAST_PATH_LEN as u32 {
            return self.fast[cp as usize];
        }

        let category = GeneralCategory::of(ch);
        if ch != END_OF_TEXT && !self.has_exceptions[category.index()] {
            return self.base[category.index()];
        }

        lookup(&self.exceptions, ch).unwrap_or(self.base[category.index()])
    }

    /// Largest class code any lookup can produce
    pub fn max_class(&self) -> u8 {
        let base = self.base.iter().copied().max().unwrap_or(0);
        let fast = self.fast.iter().copied().max().unwrap_or(0);
        let exc = self.exceptions.iter().map(|r| r.class).max().unwrap_or(0);
        base.max(fast).max(exc)
    }

    /// Class used for [`END_OF_TEXT`]
    pub fn end_of_text_class(&self) -> u8 {
        self.class_of(END_OF_TEXT)
    }

    /// Exception ranges, ascending
    pub fn exceptions(&self) -> &[ClassRange] {
        &self.exceptions
    }

    /// Base class for a category
    pub fn base_class(&self, category: GeneralCategory) -> u8 {
        self.base[category.index()]
    }

    /// Whether any exception range covers a character of `category`
    pub fn category_has_exceptions(&self, category: GeneralCategory) -> bool {
        self.has_exceptions[category.index()]
    }
}

fn validate_exceptions(exceptions: &[ClassRange]) -> Result<(), TableError> {
    let mut prev_end: Option<char> = None;
    for range in exceptions {
        if range.start > range.end {
            return Err(TableError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        if prev_end.is_some_and(|end| range.start <= end) {
            return Err(TableError::UnsortedExceptions { start: range.start });
        }
        prev_end = Some(range.end);
    }
    Ok(())
}

/// Binary search by range end
fn lookup(exceptions: &[ClassRange], ch: char) -> Option<u8> {
    let idx = exceptions.partition_point(|range| range.end < ch);
    exceptions
        .get(idx)
        .filter(|range| range.contains(ch))
        .map(|range| range.class)
}
