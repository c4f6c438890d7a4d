//! Bidirectional cursor over a bounded character sequence
//!
//! The cursor is the only part of the engine that touches text. Positions
//! are character indices constrained to `[begin, end]`; the position `end`
//! means "off the end" and reads as `None`.

use crate::error::CursorError;
use std::sync::Arc;

/// Randomly positionable, bidirectional access to characters
///
/// Movement past either end clamps the position (to `end` going forward, to
/// `begin` going backward) and reports `None`.
pub trait TextCursor: Clone {
    /// Move to `begin` and return the character there
    fn first(&mut self) -> Option<char>;

    /// Move to the last character (`end - 1`), or to `end` when empty
    fn last(&mut self) -> Option<char>;

    /// Character at the current position
    fn current(&self) -> Option<char>;

    /// Advance one character
    fn next(&mut self) -> Option<char>;

    /// Step back one character
    fn previous(&mut self) -> Option<char>;

    /// Jump to `position`, which must lie in `[begin, end]`
    fn set_position(&mut self, position: usize) -> Result<Option<char>, CursorError>;

    /// Current position
    fn position(&self) -> usize;

    /// First valid position
    fn begin_index(&self) -> usize;

    /// One past the last valid character
    fn end_index(&self) -> usize;

    /// Whether `[begin, end)` is empty
    fn is_empty(&self) -> bool {
        self.begin_index() == self.end_index()
    }
}

/// [`TextCursor`] over a shared, immutable `char` buffer
///
/// Cloning shares the buffer and copies `(begin, end, position)`, so clones
/// move independently.
#[derive(Debug, Clone)]
pub struct CharCursor {
    chars: Arc<[char]>,
    begin: usize,
    end: usize,
    pos: usize,
}

impl CharCursor {
    /// Cursor over the whole of `text`, positioned at the start
    pub fn new(text: &str) -> Self {
        Self::from_chars(text.chars().collect::<Vec<_>>())
    }

    /// Cursor over a whole buffer
    pub fn from_chars(chars: impl Into<Arc<[char]>>) -> Self {
        let chars = chars.into();
        let end = chars.len();
        Self {
            chars,
            begin: 0,
            end,
            pos: 0,
        }
    }

    /// Cursor over `[begin, end)` of `chars`, positioned at `position`
    pub fn with_range(
        chars: impl Into<Arc<[char]>>,
        begin: usize,
        end: usize,
        position: usize,
    ) -> Result<Self, CursorError> {
        let chars = chars.into();
        let len = chars.len();
        if begin > end || end > len {
            return Err(CursorError::InvalidRange { begin, end, len });
        }
        if position < begin || position > end {
            return Err(CursorError::PositionOutOfRange {
                position,
                begin,
                end,
            });
        }
        Ok(Self {
            chars,
            begin,
            end,
            pos: position,
        })
    }

    /// Characters of `[begin, end)` collected into a `String`
    pub fn text(&self) -> String {
        self.chars[self.begin..self.end].iter().collect()
    }

    /// Underlying buffer, including anything outside `[begin, end)`
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.begin && pos < self.end {
            Some(self.chars[pos])
        } else {
            None
        }
    }
}

impl From<&str> for CharCursor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Default for CharCursor {
    fn default() -> Self {
        Self::from_chars(Vec::<char>::new())
    }
}

impl TextCursor for CharCursor {
    fn first(&mut self) -> Option<char> {
        self.pos = self.begin;
        self.char_at(self.pos)
    }

    fn last(&mut self) -> Option<char> {
        self.pos = if self.end > self.begin {
            self.end - 1
        } else {
            self.end
        };
        self.char_at(self.pos)
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    #[inline]
    fn next(&mut self) -> Option<char> {
        if self.pos + 1 < self.end {
            self.pos += 1;
            Some(self.chars[self.pos])
        } else {
            self.pos = self.end;
            None
        }
    }

    #[inline]
    fn previous(&mut self) -> Option<char> {
        if self.pos > self.begin {
            self.pos -= 1;
            Some(self.chars[self.pos])
        } else {
            None
        }
    }

    fn set_position(&mut self, position: usize) -> Result<Option<char>, CursorError> {
        if position < self.begin || position > self.end {
            return Err(CursorError::PositionOutOfRange {
                position,
                begin: self.begin,
                end: self.end,
            });
        }
        self.pos = position;
        Ok(self.char_at(position))
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn begin_index(&self) -> usize {
        self.begin
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_walk() {
        let mut cursor = CharCursor::new("abc");
        assert_eq!(cursor.first(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), Some('c'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 3);
        // Stays clamped at the end
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_backward_walk() {
        let mut cursor = CharCursor::new("abc");
        assert_eq!(cursor.last(), Some('c'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.previous(), Some('b'));
        assert_eq!(cursor.previous(), Some('a'));
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(), Some('a'));
    }

    #[test]
    fn test_previous_from_end() {
        let mut cursor = CharCursor::new("ab");
        cursor.set_position(2).unwrap();
        assert_eq!(cursor.previous(), Some('b'));
    }

    #[test]
    fn test_multibyte_characters_are_single_positions() {
        let mut cursor = CharCursor::new("日本語");
        assert_eq!(cursor.end_index(), 3);
        assert_eq!(cursor.set_position(1), Ok(Some('本')));
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = CharCursor::new("");
        assert!(cursor.is_empty());
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.last(), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn test_current_is_idempotent() {
        let mut cursor = CharCursor::new("xyz");
        cursor.set_position(1).unwrap();
        for _ in 0..5 {
            assert_eq!(cursor.current(), Some('y'));
            assert_eq!(cursor.position(), 1);
        }
    }

    #[test]
    fn test_sub_range() {
        let chars: Vec<char> = "hello world".chars().collect();
        let mut cursor = CharCursor::with_range(chars, 6, 11, 6).unwrap();
        assert_eq!(cursor.text(), "world");
        assert_eq!(cursor.first(), Some('w'));
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.last(), Some('d'));
        assert!(cursor.set_position(5).is_err());
        assert_eq!(cursor.set_position(11), Ok(None));
    }

    #[test]
    fn test_rejects_begin_after_end() {
        let chars: Vec<char> = "abc".chars().collect();
        assert_eq!(
            CharCursor::with_range(chars, 2, 1, 2).unwrap_err(),
            CursorError::InvalidRange {
                begin: 2,
                end: 1,
                len: 3
            }
        );
    }

    #[test]
    fn test_rejects_end_past_buffer() {
        let chars: Vec<char> = "abc".chars().collect();
        assert!(matches!(
            CharCursor::with_range(chars, 0, 4, 0),
            Err(CursorError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_rejects_position_outside_range() {
        let chars: Vec<char> = "abcdef".chars().collect();
        assert_eq!(
            CharCursor::with_range(chars, 1, 4, 5).unwrap_err(),
            CursorError::PositionOutOfRange {
                position: 5,
                begin: 1,
                end: 4
            }
        );
    }

    #[test]
    fn test_set_position_rejects_out_of_range() {
        let mut cursor = CharCursor::new("abc");
        cursor.set_position(1).unwrap();
        assert!(cursor.set_position(4).is_err());
        // No partial mutation
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_clone_shares_buffer_and_copies_position() {
        let mut a = CharCursor::new("abcd");
        a.set_position(2).unwrap();
        let mut b = a.clone();
        assert!(Arc::ptr_eq(&a.chars, &b.chars));
        b.next();
        assert_eq!(a.position(), 2);
        assert_eq!(b.position(), 3);
    }
}
