//! Byte character classes used by the scanner.

use bitflags::bitflags;

bitflags! {
    /// Lexical classes a source byte can belong to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// Space, `\t`, `\v`, `\f` and `\r`. `\n` is not whitespace.
        const WHITESPACE = 1 << 0;
        /// `0`-`9`
        const DIGIT = 1 << 1;
        /// Digits and `.`
        const NUMBER_BODY = 1 << 2;
        /// `A`-`Z` and `a`-`z`
        const IDENT_START = 1 << 3;
        /// Letters, digits and `_`
        const IDENT_CONTINUE = 1 << 4;
    }
}

const fn classify(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\t' | 0x0B | 0x0C | b'\r' => CharClass::WHITESPACE,
        b'0'..=b'9' => CharClass::DIGIT
            .union(CharClass::NUMBER_BODY)
            .union(CharClass::IDENT_CONTINUE),
        b'.' => CharClass::NUMBER_BODY,
        b'A'..=b'Z' | b'a'..=b'z' => CharClass::IDENT_START.union(CharClass::IDENT_CONTINUE),
        b'_' => CharClass::IDENT_CONTINUE,
        _ => CharClass::empty(),
    }
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::empty(); 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
}

static CLASSES: [CharClass; 256] = build_table();

/// Look up the classes of a byte.
#[inline]
pub fn char_class(byte: u8) -> CharClass {
    CLASSES[byte as usize]
}

#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    char_class(byte).contains(CharClass::WHITESPACE)
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    char_class(byte).contains(CharClass::DIGIT)
}

#[inline]
pub fn is_number_body(byte: u8) -> bool {
    char_class(byte).contains(CharClass::NUMBER_BODY)
}

/// Check if a byte can start an identifier.
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    char_class(byte).contains(CharClass::IDENT_START)
}

/// Check if a byte can continue an identifier.
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    char_class(byte).contains(CharClass::IDENT_CONTINUE)
}
