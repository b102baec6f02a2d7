//! Keyword recognition.
//!
//! Keywords are matched case-insensitively against their canonical
//! spelling in the kind-name table.

use super::token::TokenKind;

/// Every reserved word, in declaration order. The first match wins.
pub static KEYWORDS: [TokenKind; 21] = [
    TokenKind::Procedure,
    TokenKind::EndProcedure,
    TokenKind::ProcedureReturn,
    TokenKind::If,
    TokenKind::ElseIf,
    TokenKind::Else,
    TokenKind::EndIf,
    TokenKind::Then,
    TokenKind::For,
    TokenKind::In,
    TokenKind::Next,
    TokenKind::Step,
    TokenKind::Not,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::True,
    TokenKind::False,
    TokenKind::RotateLeft,
    TokenKind::RotateRight,
    TokenKind::Mod,
    TokenKind::Xor,
];

/// Map identifier text to its keyword kind, or `None` if it is not a keyword.
pub fn lookup_keyword(text: &[u8]) -> Option<TokenKind> {
    KEYWORDS.iter().copied().find(|kind| {
        let spelling = kind.name().as_bytes();
        // Length first: it rejects most candidates without touching the bytes.
        spelling.len() == text.len() && spelling.eq_ignore_ascii_case(text)
    })
}
