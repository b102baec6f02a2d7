//! Main lexer implementation for sbasic.
//!
//! The [`Lexer`] converts source bytes into a stream of [`Token`]s.
//! It uses direct dispatch based on the first byte of each token.

use std::iter::FusedIterator;

use super::chars::{is_digit, is_ident_continue, is_ident_start, is_number_body, is_whitespace};
use super::cursor::Cursor;
use super::error::LexerError;
use super::keyword::lookup_keyword;
use super::options::{EofPolicy, LexerOptions};
use super::position::TextPosition;
use super::token::{Token, TokenKind};

/// Result of a single scan step, separate from the token's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A token was classified.
    Ok,
    /// The end-of-file token was returned. Further calls return it again.
    EndOfInput,
    /// An invalid token was returned. Scanning can continue after it.
    InvalidToken,
}

/// Lexer for sbasic source code.
///
/// Pull tokens with [`next_token`](Self::next_token) until it reports
/// [`Outcome::EndOfInput`]. Invalid tokens do not stop the scan; the
/// matching [`LexerError`]s are accumulated for the caller.
pub struct Lexer<'src> {
    /// Low-level byte cursor.
    cursor: Cursor<'src>,
    options: LexerOptions,
    /// Accumulated errors.
    errors: Vec<LexerError>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over the given source bytes.
    pub fn new(source: &'src [u8]) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Create a new lexer over source text.
    pub fn from_text(source: &'src str) -> Self {
        Self::new(source.as_bytes())
    }

    pub fn with_options(source: &'src [u8], options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            errors: Vec::new(),
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Position the next scan starts from.
    pub fn position(&self) -> TextPosition {
        self.cursor.position()
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    /// Take accumulated errors, leaving an empty vec.
    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan and return the next token.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn next_token(&mut self) -> (Token<'src>, Outcome) {
        loop {
            self.skip_whitespace();

            let start = self.cursor.position();
            let Some(byte) = self.cursor.current() else {
                return (self.make_token(TokenKind::Eof, start), Outcome::EndOfInput);
            };

            let kind = match byte {
                // Newlines separate tokens but are not tokens themselves
                b'\n' => {
                    self.cursor.advance();
                    continue;
                }

                b if is_digit(b) => self.scan_number(),
                b if is_ident_start(b) => self.scan_identifier(start),

                b';' => {
                    let kind = self.scan_comment(start);
                    if kind == TokenKind::Comment && !self.options.emit_comments {
                        continue;
                    }
                    kind
                }

                b'"' => self.scan_string(start),

                _ => self.scan_operator(byte, start),
            };

            let token = self.make_token(kind, start);
            tracing::trace!(
                kind = %token.kind,
                row = start.row,
                column = start.column,
                "token"
            );

            let outcome = if kind == TokenKind::Invalid {
                Outcome::InvalidToken
            } else {
                Outcome::Ok
            };
            return (token, outcome);
        }
    }

    // =========================================
    // Internal: helpers
    // =========================================

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Create a token from start position to current position.
    fn make_token(&self, kind: TokenKind, start: TextPosition) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(start.offset), start)
    }

    /// Record an error and classify the token as invalid.
    fn report(&mut self, error: LexerError) -> TokenKind {
        tracing::debug!(%error, "lexer error");
        self.errors.push(error);
        TokenKind::Invalid
    }

    /// Consume `len` bytes that make up an operator.
    fn consume(&mut self, len: usize, kind: TokenKind) -> TokenKind {
        for _ in 0..len {
            self.cursor.advance();
        }
        kind
    }

    // =========================================
    // Scanning: literals
    // =========================================

    /// Digits with any number of embedded dots. `1.2.3` is one token.
    fn scan_number(&mut self) -> TokenKind {
        self.cursor.eat_while(is_number_body);
        TokenKind::Number
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self, start: TextPosition) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start.offset);
        lookup_keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// Scan from `;` up to, not including, the end of the line.
    fn scan_comment(&mut self, start: TextPosition) -> TokenKind {
        self.cursor.eat_while(|b| b != b'\n');

        if self.cursor.is_eof() && self.options.comment_at_eof == EofPolicy::Reject {
            return self.report(LexerError::UnterminatedComment { position: start });
        }
        TokenKind::Comment
    }

    /// Scan a string literal. A `"` directly after `\` does not close it.
    fn scan_string(&mut self, start: TextPosition) -> TokenKind {
        self.cursor.advance(); // consume opening quote

        loop {
            match self.cursor.current() {
                None => {
                    return self.report(LexerError::UnterminatedString { position: start });
                }
                Some(b'"') if self.cursor.previous() != Some(b'\\') => {
                    self.cursor.advance();
                    return TokenKind::String;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    // =========================================
    // Scanning: operators
    // =========================================

    /// Scan an operator or punctuation token.
    fn scan_operator(&mut self, byte: u8, start: TextPosition) -> TokenKind {
        use TokenKind::*;

        match byte {
            b'(' => self.consume(1, OpenParen),
            b')' => self.consume(1, CloseParen),
            b',' => self.consume(1, Comma),

            // Star or **
            b'*' => match self.cursor.peek() {
                Some(b'*') => self.consume(2, Power),
                _ => self.consume(1, Multiply),
            },

            b'/' => self.consume(1, Divide),
            b'+' => self.consume(1, Add),
            b'-' => self.consume(1, Subtract),
            b'=' => self.consume(1, Equals),

            // Greater, >=, >>
            b'>' => match self.cursor.peek() {
                Some(b'=') => self.consume(2, GreaterOrEqual),
                Some(b'>') => self.consume(2, ShiftRight),
                _ => self.consume(1, Greater),
            },

            // Less, <>, <=, <<
            b'<' => match self.cursor.peek() {
                Some(b'>') => self.consume(2, NotEqual),
                Some(b'=') => self.consume(2, LessOrEqual),
                Some(b'<') => self.consume(2, ShiftLeft),
                _ => self.consume(1, Less),
            },

            b'|' => self.consume(1, BitOr),
            b'&' => self.consume(1, BitAnd),
            b'^' => self.consume(1, BitXor),
            b'!' => self.consume(1, BitNot),
            b'$' => self.consume(1, Dollar),

            // Unrecognized byte
            _ => {
                self.cursor.advance();
                self.report(LexerError::UnexpectedByte {
                    byte,
                    position: start,
                })
            }
        }
    }
}

/// Implement Iterator for convenient token streaming.
///
/// Yields every token, invalid ones included, and stops at end of input.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            (_, Outcome::EndOfInput) => None,
            (token, _) => Some(token),
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scan a whole buffer, returning every token before end of input and
/// every error found along the way.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn tokenize(source: &[u8]) -> (Vec<Token<'_>>, Vec<LexerError>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.take_errors())
}
