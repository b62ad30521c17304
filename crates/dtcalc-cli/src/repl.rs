//! Interactive prompt.

use std::process::ExitCode;

use anyhow::Context;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::cli::Args;
use crate::history::HistoryStore;
use crate::output;

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Skip,
    Help,
    Quit,
    Evaluate(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Skip,
        "help" => Command::Help,
        "exit" | "quit" => Command::Quit,
        expression => Command::Evaluate(expression),
    }
}

pub fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = Config::builder()
        .max_history_size(args.history_size)
        .context("invalid history size")?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(config).context("failed to start line editor")?;

    let history = HistoryStore::new(args.history_path());
    debug!("history file: {:?}", history.path());
    history.load(&mut editor);

    let outcome = prompt_loop(&mut editor, args.json);
    history.save(&mut editor);
    outcome?;

    println!("\nBye!");
    Ok(ExitCode::SUCCESS)
}

fn prompt_loop(editor: &mut DefaultEditor, json: bool) -> anyhow::Result<()> {
    loop {
        let line = match editor.readline(&output::prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err).context("failed to read input"),
        };

        let command = parse_command(&line);
        if command != Command::Skip {
            editor.add_history_entry(line.trim())?;
        }

        match command {
            Command::Skip => {}
            Command::Help => println!("{}", output::HELP),
            Command::Quit => return Ok(()),
            Command::Evaluate(expression) => match dtcalc::evaluate(expression) {
                Ok(value) => println!("{}", output::result_line(&output::render(&value, json)?)),
                Err(err) => println!("{}", output::error_line(&err)),
            },
        }
    }
}
