//! Source location tracking for the lexer.
//!
//! Provides [`TextPosition`], the snapshot of the scan position that is
//! copied into every token and diagnostic.

use std::fmt;

/// A position in source text.
///
/// All three coordinates are 0-based. Column counts bytes, not characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextPosition {
    /// Byte offset from start of source.
    pub offset: usize,
    /// Line number (0-based).
    pub row: usize,
    /// Column number within the row (0-based, byte-based).
    pub column: usize,
}

impl TextPosition {
    /// The starting position (offset 0, row 0, column 0).
    pub const START: TextPosition = TextPosition {
        offset: 0,
        row: 0,
        column: 0,
    };

    /// Create a new position.
    #[inline]
    pub fn new(offset: usize, row: usize, column: usize) -> Self {
        Self {
            offset,
            row,
            column,
        }
    }

    /// Step over one consumed byte.
    ///
    /// A consumed `\n` moves to the start of the next row.
    #[inline]
    pub(crate) fn step(&mut self, consumed: u8) {
        self.offset += 1;
        if consumed == b'\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Debug for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}(@{})", self.row, self.column, self.offset)
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
