//! `dtcalc`: date and duration calculator.
//!
//! Evaluates the expression given as arguments, otherwise every line of
//! piped stdin, otherwise starts an interactive prompt.

mod cli;
mod history;
mod output;
mod repl;

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use cli::Args;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(expression) = args.expression() {
        debug!("argument mode");
        let ok = run_once(&expression, args.json)?;
        return Ok(exit_code(ok));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        debug!("piped mode");
        return run_piped(stdin.lock(), args.json);
    }

    debug!("interactive mode");
    repl::run(&args)
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print the result on stdout or the error on stderr; `false` on error.
fn run_once(expression: &str, json: bool) -> serde_json::Result<bool> {
    match dtcalc::evaluate(expression) {
        Ok(value) => {
            println!("{}", output::render(&value, json)?);
            Ok(true)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(false)
        }
    }
}

/// Evaluate each non-empty line; the exit code reports whether any failed.
fn run_piped(input: impl BufRead, json: bool) -> anyhow::Result<ExitCode> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line.context("failed to read standard input")?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        all_ok &= run_once(expression, json)?;
    }
    Ok(exit_code(all_ok))
}
