//! Token types and definitions for the sbasic lexer.

use super::position::TextPosition;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::ops::Range;

/// A token from the source code.
///
/// `text` borrows from the source buffer; a token cannot outlive the
/// buffer it was scanned from.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Location of the first byte of the token.
    pub position: TextPosition,
    /// The type of token.
    pub kind: TokenKind,
    /// The source bytes of this token.
    pub text: &'src [u8],
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, text: &'src [u8], position: TextPosition) -> Self {
        Self {
            position,
            kind,
            text,
        }
    }

    /// The token text as `str`, if it is valid UTF-8.
    ///
    /// Only invalid tokens made of stray non-ASCII bytes can fail this.
    #[inline]
    pub fn lexeme(&self) -> Option<&'src str> {
        std::str::from_utf8(self.text).ok()
    }

    /// Length of the token text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte range of the token within the source buffer.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.position.offset..self.position.offset + self.text.len()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?} @ {:?})",
            self.kind,
            String::from_utf8_lossy(self.text),
            self.position
        )
    }
}

/// All possible token types in sbasic.
///
/// The discriminant is the index into the kind-name table, so variants
/// must stay in the same order as [`KIND_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum TokenKind {
    // =========================================
    // Structural
    // =========================================
    /// Not yet classified. Never returned by the lexer.
    Unknown,
    /// Unrecognized byte or unterminated construct
    Invalid,

    // =========================================
    // Identifiers
    // =========================================
    /// User-defined identifier
    Identifier,

    // =========================================
    // Keywords
    // =========================================
    /// `Procedure`
    Procedure,
    /// `EndProcedure`
    EndProcedure,
    /// `ProcedureReturn`
    ProcedureReturn,
    /// `If`
    If,
    /// `ElseIf`
    ElseIf,
    /// `Else`
    Else,
    /// `EndIf`
    EndIf,
    /// `Then`
    Then,
    /// `For`
    For,
    /// `In`
    In,
    /// `Next`
    Next,
    /// `Step`
    Step,
    /// `Not`
    Not,
    /// `And`
    And,
    /// `Or`
    Or,
    /// `True`
    True,
    /// `False`
    False,
    /// `Rotl`
    RotateLeft,
    /// `Rotr`
    RotateRight,
    /// `Mod`
    Mod,
    /// `Xor`
    Xor,

    // =========================================
    // Operators
    // =========================================
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `**`
    Power,
    /// `=`
    Equals,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `<>`
    NotEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `|`
    BitOr,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `!`
    BitNot,
    /// `$`
    Dollar,

    // =========================================
    // Punctuation
    // =========================================
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,

    // =========================================
    // Literals
    // =========================================
    /// `"text"`
    String,
    /// `1234`, `3.14`
    Number,
    /// `; to end of line`
    Comment,

    // =========================================
    // Special
    // =========================================
    /// End of input
    Eof,
}

/// Canonical name of every [`TokenKind`], indexed by discriminant.
///
/// Keyword and operator entries are the exact spellings the lexer matches.
pub static KIND_NAMES: [&str; TokenKind::COUNT] = [
    "Unknown Token",
    "Invalid Token",
    "Identifier",
    // Keywords
    "Procedure",
    "EndProcedure",
    "ProcedureReturn",
    "If",
    "ElseIf",
    "Else",
    "EndIf",
    "Then",
    "For",
    "In",
    "Next",
    "Step",
    "Not",
    "And",
    "Or",
    "True",
    "False",
    "Rotl",
    "Rotr",
    "Mod",
    "Xor",
    // Operators
    "*",
    "/",
    "+",
    "-",
    "**",
    "=",
    ">",
    "<",
    "<>",
    ">=",
    "<=",
    "<<",
    ">>",
    "|",
    "&",
    "^",
    "!",
    "$",
    // Punctuation
    "Open Paren",
    "Close Paren",
    "Comma",
    // Literals
    "String",
    "Number",
    "Comment",
    "End of File",
];

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Iterate over every kind in discriminant order.
    pub fn all() -> impl Iterator<Item = TokenKind> {
        (0..Self::COUNT as u8).filter_map(|ordinal| TokenKind::try_from(ordinal).ok())
    }

    /// The canonical name of this kind.
    #[inline]
    pub fn name(self) -> &'static str {
        KIND_NAMES[self as usize]
    }

    /// Check if this is a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (TokenKind::Procedure as u8..=TokenKind::Xor as u8).contains(&(self as u8))
    }

    /// Check if this is an operator.
    #[inline]
    pub fn is_operator(self) -> bool {
        (TokenKind::Multiply as u8..=TokenKind::Dollar as u8).contains(&(self as u8))
    }

    /// Check if this is a delimiter.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::Comma
        )
    }

    /// Check if this is a literal (identifier, number, string or comment).
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::Comment
        )
    }

    #[inline]
    pub fn is_structural(self) -> bool {
        matches!(self, TokenKind::Unknown | TokenKind::Invalid | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
