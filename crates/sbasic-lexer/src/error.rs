//! Lexer error types and diagnostic formatting.
//!
//! Every error carries the [`TextPosition`] of the offending token, which
//! is the start of the construct for unterminated strings and comments.

use super::position::TextPosition;
use thiserror::Error;

/// An error encountered during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    /// A byte that cannot start any token.
    #[error("invalid token {} at {position}", describe_byte(.byte))]
    UnexpectedByte { byte: u8, position: TextPosition },

    /// A string with no closing `"` before end of input.
    #[error("unterminated string literal at {position}")]
    UnterminatedString { position: TextPosition },

    /// A comment that runs into end of input without a newline.
    #[error("unterminated comment at {position} (expected newline before end of input)")]
    UnterminatedComment { position: TextPosition },
}

impl LexerError {
    /// Where the offending token starts.
    pub fn position(&self) -> TextPosition {
        match self {
            LexerError::UnexpectedByte { position, .. }
            | LexerError::UnterminatedString { position }
            | LexerError::UnterminatedComment { position } => *position,
        }
    }

    /// Format the error with source context for display.
    pub fn render(&self, source: &[u8]) -> String {
        let position = self.position();
        let mut output = format!("error: {}\n", self);

        if let Some(line) = source_line(source, position.row) {
            let gutter = position.row.to_string();
            let pad = " ".repeat(gutter.len());
            output.push_str(&format!("{pad} |\n"));
            output.push_str(&format!("{gutter} | {line}\n"));
            output.push_str(&format!("{pad} | {}^\n", " ".repeat(position.column)));
        }

        output
    }
}

/// Text of a row (0-based), without its line terminator.
fn source_line(source: &[u8], row: usize) -> Option<String> {
    source.split(|&b| b == b'\n').nth(row).map(|line| {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        String::from_utf8_lossy(line).into_owned()
    })
}

fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii() {
        format!("'{}'", (*byte as char).escape_default())
    } else {
        format!("byte 0x{byte:02X}")
    }
}
