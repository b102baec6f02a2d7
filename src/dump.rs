//! Token dump output for the `sbasic-tokens` driver.

use std::io::{self, Write};

use sbasic_lexer::{Lexer, LexerError, LexerOptions, Outcome, Token};

/// How each token is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// `row:column<TAB>Name<TAB>text`
    #[default]
    Detailed,
    /// Only the kind name.
    Names,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpConfig {
    pub format: DumpFormat,
    /// Continue past invalid tokens instead of stopping at the first one.
    pub keep_going: bool,
}

/// What a dump saw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DumpSummary {
    /// Number of valid tokens written.
    pub tokens: usize,
    /// Errors in source order.
    pub errors: Vec<LexerError>,
}

impl DumpSummary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenize `source` and write one line per token to `out`.
///
/// Invalid tokens are not written; they end up in [`DumpSummary::errors`].
/// The end-of-file token is never written.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn dump_tokens(
    source: &[u8],
    options: LexerOptions,
    config: &DumpConfig,
    out: &mut impl Write,
) -> io::Result<DumpSummary> {
    let mut lexer = Lexer::with_options(source, options);
    let mut summary = DumpSummary::default();

    loop {
        let (token, outcome) = lexer.next_token();
        match outcome {
            Outcome::EndOfInput => break,
            Outcome::InvalidToken => {
                if !config.keep_going {
                    break;
                }
            }
            Outcome::Ok => {
                write_token(&token, config.format, out)?;
                summary.tokens += 1;
            }
        }
    }

    summary.errors = lexer.take_errors();
    tracing::debug!(
        tokens = summary.tokens,
        errors = summary.errors.len(),
        "dump finished"
    );
    Ok(summary)
}

fn write_token(token: &Token<'_>, format: DumpFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        DumpFormat::Names => writeln!(out, "{}", token.kind),
        DumpFormat::Detailed => writeln!(
            out,
            "{}\t{}\t{}",
            token.position,
            token.kind,
            token.text.escape_ascii()
        ),
    }
}
