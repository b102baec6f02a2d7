//! Lexical analysis for sbasic, a small embeddable BASIC.
//!
//! This crate turns raw source bytes into a stream of positioned,
//! classified tokens for a parser to consume. It includes:
//! - A byte [`Cursor`] with row/column tracking
//! - The [`Lexer`] and its per-step [`Outcome`]
//! - Case-insensitive keyword recognition
//! - Error types with source-context rendering
//!
//! # Example
//!
//! ```
//! use sbasic_lexer::{Lexer, Outcome, TokenKind};
//!
//! let mut lexer = Lexer::from_text("If D >= 100 Then");
//! let mut kinds = Vec::new();
//! loop {
//!     let (token, outcome) = lexer.next_token();
//!     if outcome == Outcome::EndOfInput {
//!         break;
//!     }
//!     kinds.push(token.kind);
//! }
//!
//! assert_eq!(
//!     kinds,
//!     [TokenKind::If, TokenKind::Identifier, TokenKind::GreaterOrEqual, TokenKind::Number, TokenKind::Then]
//! );
//! ```

mod chars;
mod cursor;
mod error;
mod keyword;
mod lexer;
mod options;
mod position;
mod token;

pub use chars::{CharClass, char_class};
pub use cursor::Cursor;
pub use error::LexerError;
pub use keyword::{KEYWORDS, lookup_keyword};
pub use lexer::{Lexer, Outcome, tokenize};
pub use options::{EofPolicy, LexerOptions};
pub use position::TextPosition;
pub use token::{KIND_NAMES, Token, TokenKind};
