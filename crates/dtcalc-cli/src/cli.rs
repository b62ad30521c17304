//! Command-line arguments.

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::output::HELP;

const HISTORY_FILE_NAME: &str = ".dtcalc_history";

#[derive(Parser, Debug)]
#[command(
    name = "dtcalc",
    version,
    about = "Date and duration calculator",
    after_help = HELP
)]
pub struct Args {
    /// Expression to evaluate (words are joined with spaces). Omit to read
    /// from piped stdin or to start the interactive prompt.
    #[arg(value_name = "EXPRESSION", trailing_var_arg = true, allow_hyphen_values = true)]
    pub expression: Vec<String>,

    /// Print results as JSON objects instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Interactive history file [default: ~/.dtcalc_history]
    #[arg(long, env = "DTCALC_HISTORY_FILE", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Maximum number of interactive history entries kept
    #[arg(long, default_value_t = 1000, value_name = "N")]
    pub history_size: usize,

    /// Log evaluation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The expression given on the command line, if any.
    pub fn expression(&self) -> Option<String> {
        let joined = self.expression.join(" ");
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Where interactive history lives; `None` disables persistence.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE_NAME))
        })
    }
}
