//! Command-line handling for the `sbasic-tokens` driver.

use std::io::{self, Read};
use std::path::PathBuf;

use sbasic_lexer::{EofPolicy, LexerOptions};
use thiserror::Error;

use crate::dump::{DumpConfig, DumpFormat};

pub const USAGE: &str = "\
Usage: sbasic-tokens [OPTIONS] [FILE]

Print the tokens of an sbasic source file. Reads stdin when FILE is
omitted or `-`. Positions are 0-based row:column.

Options:
  --keep-going          Report every invalid token instead of stopping at the first
  --names               Print only token kind names
  --no-comments         Do not print comment tokens
  --allow-eof-comment   Accept a final comment with no trailing newline
  -h, --help            Show this message
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraArgument(String),
}

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            Input::File(path) => std::fs::read(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub input: Input,
    pub lexer: LexerOptions,
    pub dump: DumpConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Dump(CliOptions),
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--keep-going" => options.dump.keep_going = true,
            "--names" => options.dump.format = DumpFormat::Names,
            "--no-comments" => options.lexer = options.lexer.with_emit_comments(false),
            "--allow-eof-comment" => {
                options.lexer = options.lexer.with_comment_at_eof(EofPolicy::Accept)
            }
            "-" if input.is_none() => input = Some(Input::Stdin),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
            other if input.is_some() => return Err(CliError::ExtraArgument(other.to_string())),
            path => input = Some(Input::File(PathBuf::from(path))),
        }
    }

    options.input = input.unwrap_or_default();
    Ok(Command::Dump(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(parse(&[]), Ok(Command::Dump(CliOptions::default())));
        assert_eq!(parse(&["-"]), Ok(Command::Dump(CliOptions::default())));
    }

    #[test]
    fn file_and_flags() {
        let Ok(Command::Dump(options)) =
            parse(&["--keep-going", "prog.bas", "--names", "--allow-eof-comment"])
        else {
            panic!("expected dump command");
        };
        assert_eq!(options.input, Input::File(PathBuf::from("prog.bas")));
        assert!(options.dump.keep_going);
        assert_eq!(options.dump.format, DumpFormat::Names);
        assert_eq!(options.lexer.comment_at_eof, EofPolicy::Accept);
        assert!(options.lexer.emit_comments);
    }

    #[test]
    fn no_comments_flag() {
        let Ok(Command::Dump(options)) = parse(&["--no-comments"]) else {
            panic!("expected dump command");
        };
        assert!(!options.lexer.emit_comments);
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["a.bas", "--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
    }

    #[test]
    fn rejects_unknown_option() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(CliError::UnknownOption("--verbose".to_string()))
        );
    }

    #[test]
    fn rejects_second_input() {
        assert_eq!(
            parse(&["a.bas", "b.bas"]),
            Err(CliError::ExtraArgument("b.bas".to_string()))
        );
        assert_eq!(
            parse(&["-", "-"]),
            Err(CliError::ExtraArgument("-".to_string()))
        );
    }
}
