//! Low-level byte iteration for the lexer.
//!
//! The [`Cursor`] provides peek/advance operations over source bytes
//! while tracking row and column positions.

use super::position::TextPosition;

/// A cursor over source bytes that tracks position.
///
/// End of input is reported as `None` from [`current`](Self::current),
/// [`peek`](Self::peek) and [`advance`](Self::advance). Advancing at end of
/// input is a no-op, so every scanning loop that stops on `None` terminates.
pub struct Cursor<'src> {
    /// The source bytes being scanned.
    source: &'src [u8],
    /// Position of `current`.
    position: TextPosition,
    /// Byte at `position.offset`, or `None` at end of input.
    current: Option<u8>,
    /// Byte consumed immediately before `current`.
    previous: Option<u8>,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source.
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            position: TextPosition::START,
            current: source.first().copied(),
            previous: None,
        }
    }

    /// Get the full source buffer.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Snapshot of the current position.
    #[inline]
    pub fn position(&self) -> TextPosition {
        self.position
    }

    /// Current byte offset from start of source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Current row (0-based).
    #[inline]
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Current column (0-based).
    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Check if we've reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// The byte under the cursor.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// The byte consumed by the last [`advance`](Self::advance).
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.previous
    }

    /// Look one byte past the current one without consuming anything.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.position.offset + 1).copied()
    }

    /// Consume the current byte and return the new current byte.
    ///
    /// Does nothing once the end of input has been reached.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let consumed = self.current?;
        self.previous = Some(consumed);
        self.position.step(consumed);
        self.current = self.source.get(self.position.offset).copied();
        self.current
    }

    /// Consume if the current byte matches.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume bytes while the predicate matches.
    ///
    /// Returns the consumed slice.
    pub fn eat_while(&mut self, f: impl Fn(u8) -> bool) -> &'src [u8] {
        let start = self.offset();
        while self.current.is_some_and(&f) {
            self.advance();
        }
        self.slice_from(start)
    }

    /// Get a slice of source from a starting offset to current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.position.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cursor = Cursor::new(b"hello");
        assert_eq!(cursor.current(), Some(b'h'));
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.offset(), 0);

        assert_eq!(cursor.advance(), Some(b'e'));
        assert_eq!(cursor.previous(), Some(b'h'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn empty_source_is_eof() {
        let cursor = Cursor::new(b"");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn advance_past_end_is_idempotent() {
        let mut cursor = Cursor::new(b"a");
        assert_eq!(cursor.advance(), None);
        let at_end = cursor.position();

        for _ in 0..4 {
            assert_eq!(cursor.advance(), None);
        }
        assert_eq!(cursor.position(), at_end);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.previous(), Some(b'a'));
    }

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new(b"<=");
        assert_eq!(cursor.peek(), Some(b'='));
        assert_eq!(cursor.peek(), Some(b'='));
        assert_eq!(cursor.current(), Some(b'<'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn peek_at_last_byte() {
        let mut cursor = Cursor::new(b"ab");
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'b'));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn cursor_eat() {
        let mut cursor = Cursor::new(b"hello");

        assert!(cursor.eat(b'h'));
        assert!(!cursor.eat(b'h')); // Already consumed
        assert!(cursor.eat(b'e'));
    }

    #[test]
    fn cursor_eat_while() {
        let mut cursor = Cursor::new(b"aaabbb");

        let as_ = cursor.eat_while(|c| c == b'a');
        assert_eq!(as_, b"aaa");

        let bs = cursor.eat_while(|c| c == b'b');
        assert_eq!(bs, b"bbb");

        assert!(cursor.is_eof());
    }

    #[test]
    fn cursor_slice_from() {
        let mut cursor = Cursor::new(b"hello world");
        let start = cursor.offset();

        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.slice_from(start), b"hello");

        cursor.eat(b' ');
        let word_start = cursor.offset();
        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.slice_from(word_start), b"world");
    }

    #[test]
    fn cursor_row_and_column() {
        let mut cursor = Cursor::new(b"ab\ncd");

        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.column(), 0);

        cursor.advance(); // a
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.column(), 1);

        cursor.advance(); // b
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.column(), 2);

        cursor.advance(); // \n
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.current(), Some(b'c'));

        cursor.advance(); // c
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn cursor_source() {
        let source = b"test source";
        let mut cursor = Cursor::new(source);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.source(), source);
    }
}
