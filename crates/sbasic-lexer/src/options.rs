//! Lexer configuration.

/// What to do with a comment that reaches end of input without a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// Report an unterminated comment as an invalid token.
    #[default]
    Reject,
    /// Treat end of input as the end of the comment.
    Accept,
}

/// Options controlling how the lexer classifies input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Handling of a trailing comment with no newline.
    pub comment_at_eof: EofPolicy,
    /// Return comment tokens. When off, comments are skipped like whitespace.
    pub emit_comments: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            comment_at_eof: EofPolicy::Reject,
            emit_comments: true,
        }
    }
}

impl LexerOptions {
    pub fn with_comment_at_eof(mut self, policy: EofPolicy) -> Self {
        self.comment_at_eof = policy;
        self
    }

    pub fn with_emit_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }
}
