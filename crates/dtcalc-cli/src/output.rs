//! Prompt, result and error rendering.

use std::fmt::Display;

use colored::Colorize;
use dtcalc::{Report, Value};

pub const HELP: &str = "\
Usage:
  dtcalc                      # Launch interactive mode
  dtcalc \"today + 3d\"         # Command-line argument mode
  echo \"today + 3d\" | dtcalc  # Piped input

Expression format:
  [datetime] [+|-] [duration]
  [duration] [+|-] [duration]
  [datetime] - [datetime]

Examples:
  today + 5d
  2024-01-01 - 2023-01-01
  now + 3h 15m";

pub fn prompt() -> String {
    format!("{} ", ">".bright_blue())
}

pub fn result_line(result: &str) -> String {
    format!("{} {result}", "=".bright_blue())
}

pub fn error_line(err: &dyn Display) -> String {
    format!("{} Error: {err}", "!".bright_red())
}

/// Render a value as text or as a single-line JSON [`Report`].
pub fn render(value: &Value, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&Report::from(value))
    } else {
        Ok(value.to_string())
    }
}
