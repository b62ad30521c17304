//! # dtcalc
//!
//! Date and duration arithmetic over free-form expressions.
//!
//! An expression is a left-to-right chain of `+`/`-` operations whose
//! operands are either durations (`3w4d`, `2 hours`, `3h 15m`) or instants
//! (`2024-01-01`, `Jan/15/2024 14:30`, `today`, `now`). Evaluation yields a
//! single [`Value`], which renders to a human-readable string.
//!
//! ```
//! use chrono::NaiveDate;
//! use dtcalc::{evaluate_with_clock, FixedClock};
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap().and_hms_opt(9, 0, 0).unwrap());
//! let value = evaluate_with_clock("today + 5d", &clock).unwrap();
//! assert_eq!(value.to_string(), "2026-02-22");
//! ```
//!
//! ## Modules
//!
//! - [`duration`] — duration literals → [`chrono::TimeDelta`]
//! - [`datetime`] — datetime literals and the `today`/`now` keywords
//! - [`token`] — expression tokenizer
//! - [`eval`] — evaluator and the [`Value`] result type
//! - [`format`] — display strings and serializable reports
//! - [`clock`] — injected wall-clock access
//! - [`error`] — error types

pub mod clock;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod eval;
pub mod format;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::parse_datetime;
pub use duration::{parse_duration, parse_duration_parts, DurationParts};
pub use error::{EvaluationError, Result};
pub use eval::{evaluate, evaluate_tokens, evaluate_with_clock, Value};
pub use format::{format_duration, format_instant, format_value, DurationInfo, InstantInfo, Report};
pub use token::{tokenize, Op, Token};
