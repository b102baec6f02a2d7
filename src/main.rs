//! `sbasic-tokens`: print the token stream of an sbasic source file.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use sbasic::cli::{self, Command, Input, USAGE};
use sbasic::dump::dump_tokens;
use sbasic::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            eprintln!("Try `sbasic-tokens --help`.");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let options = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Command::Dump(options) => options,
    };

    let source = options.input.read().with_context(|| match &options.input {
        Input::Stdin => "failed to read stdin".to_string(),
        Input::File(path) => format!("failed to read {}", path.display()),
    })?;

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = dump_tokens(&source, options.lexer, &options.dump, &mut out)?;
    out.flush()?;

    for error in &summary.errors {
        eprint!("{}", error.render(&source));
    }

    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
