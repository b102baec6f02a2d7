//! sbasic: a small embeddable BASIC.
//!
//! The language front end currently consists of the tokeniser, provided by
//! the [`lexer`] crate and re-exported here, plus the pieces behind the
//! `sbasic-tokens` driver.
//!
//! # Example
//!
//! ```
//! use sbasic::prelude::*;
//!
//! let (tokens, errors) = tokenize(b"Print \"Hello\" + D ; greet\n");
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[4].kind, TokenKind::Comment);
//! ```

pub use sbasic_lexer as lexer;

pub mod cli;
pub mod dump;
pub mod logging;

// Re-export main types
pub mod prelude {
    pub use crate::dump::{DumpConfig, DumpFormat, DumpSummary, dump_tokens};
    pub use sbasic_lexer::{
        EofPolicy, Lexer, LexerError, LexerOptions, Outcome, TextPosition, Token, TokenKind,
        tokenize,
    };
}
