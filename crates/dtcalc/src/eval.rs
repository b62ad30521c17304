//! Expression evaluation.
//!
//! Evaluates a strict left-to-right chain of `+`/`-` operations over
//! durations and instants. Each operand is classified by trying the
//! duration parser first and the datetime parser second; the running result
//! (the accumulator) then combines with it according to the kinds involved:
//!
//! | Accumulator | Operand  | `+`      | `-`      |
//! |-------------|----------|----------|----------|
//! | Duration    | Duration | Duration | Duration |
//! | Instant     | Duration | Instant  | Instant  |
//! | Instant     | Instant  | error    | Duration |
//! | Duration    | Instant  | Instant  | error    |
//!
//! Evaluation is all-or-nothing: the first error aborts the expression.
//! The only ambient input is the [`Clock`] used for `today` and `now`.

use chrono::{NaiveDateTime, TimeDelta};
use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::datetime::parse_datetime;
use crate::duration::{find_unsupported_unit, parse_duration};
use crate::error::{EvaluationError, Result};
use crate::format::format_value;
use crate::token::{tokenize, Op, Token};

/// The result of an evaluation, or of classifying a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Signed elapsed time.
    Duration(TimeDelta),
    /// A point in time, without timezone.
    Instant(NaiveDateTime),
}

impl Value {
    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Duration(_) => "duration",
            Value::Instant(_) => "instant",
        }
    }

    /// Combine `self` with `rhs` using `op`.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::CannotAddTwoDates`] for `instant + instant`,
    /// [`EvaluationError::CannotSubtractDateFromDuration`] for
    /// `duration - instant`, and [`EvaluationError::OutOfRange`] if the result
    /// overflows.
    pub fn apply(self, op: Op, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Duration(lhs), Value::Duration(rhs)) => {
                let combined = match op {
                    Op::Add => lhs.checked_add(&rhs),
                    Op::Sub => lhs.checked_sub(&rhs),
                };
                combined.map(Value::Duration).ok_or_else(|| {
                    EvaluationError::OutOfRange(format!(
                        "{} {op} {}",
                        Value::Duration(lhs),
                        Value::Duration(rhs)
                    ))
                })
            }
            (Value::Instant(instant), Value::Duration(delta)) => {
                shift(instant, op, delta).map(Value::Instant)
            }
            (Value::Instant(lhs), Value::Instant(rhs)) => match op {
                Op::Sub => Ok(Value::Duration(lhs.signed_duration_since(rhs))),
                Op::Add => Err(EvaluationError::CannotAddTwoDates),
            },
            (Value::Duration(delta), Value::Instant(instant)) => match op {
                Op::Add => shift(instant, Op::Add, delta).map(Value::Instant),
                Op::Sub => Err(EvaluationError::CannotSubtractDateFromDuration),
            },
        }
    }
}

/// Move an instant forwards or backwards by a duration.
fn shift(instant: NaiveDateTime, op: Op, delta: TimeDelta) -> Result<NaiveDateTime> {
    let shifted = match op {
        Op::Add => instant.checked_add_signed(delta),
        Op::Sub => instant.checked_sub_signed(delta),
    };
    shifted.ok_or_else(|| {
        EvaluationError::OutOfRange(format!(
            "{} {op} {}",
            Value::Instant(instant),
            Value::Duration(delta)
        ))
    })
}

/// Evaluate an expression against the system clock.
///
/// # Examples
///
/// ```
/// use dtcalc::eval::evaluate;
///
/// let value = evaluate("2024-01-01 - 2023-01-01").unwrap();
/// assert_eq!(value.to_string(), "366 days");
/// ```
pub fn evaluate(expression: &str) -> Result<Value> {
    evaluate_with_clock(expression, &SystemClock)
}

/// Evaluate an expression, resolving `today` and `now` through `clock`.
///
/// # Errors
///
/// Any [`EvaluationError`]; see [`evaluate_tokens`] for the ordering rules
/// and [`tokenize`] for [`EvaluationError::InvalidExpression`].
pub fn evaluate_with_clock<C: Clock + ?Sized>(expression: &str, clock: &C) -> Result<Value> {
    let tokens = tokenize(expression)?;
    evaluate_tokens(&tokens, clock)
}

/// Evaluate an already-tokenized expression.
///
/// Operands and operators must alternate, starting and ending with an
/// operand.
///
/// # Errors
///
/// - [`EvaluationError::UnparseableToken`] if an operand is neither a
///   duration nor a datetime.
/// - [`EvaluationError::UnsupportedUnit`] for a duration with an unknown unit,
///   including one buried in an otherwise unparseable operand.
/// - [`EvaluationError::ConsecutiveOperators`] if two operators meet.
/// - [`EvaluationError::MissingOperator`] if two operands meet.
/// - [`EvaluationError::InvalidExpression`] if the first token is an operator.
/// - [`EvaluationError::TrailingOperator`] if the last token is an operator.
/// - [`EvaluationError::NoOperandsFound`] if there are no operands.
/// - Type errors from [`Value::apply`].
pub fn evaluate_tokens<C: Clock + ?Sized>(tokens: &[Token<'_>], clock: &C) -> Result<Value> {
    let mut acc: Option<Value> = None;
    let mut pending: Option<Op> = None;

    for token in tokens {
        match *token {
            Token::Operator(op) => {
                if pending.is_some() {
                    return Err(EvaluationError::ConsecutiveOperators);
                }
                pending = Some(op);
            }
            Token::Operand(text) => {
                let operand = classify(text, clock)?;
                let next = match (acc, pending.take()) {
                    (None, None) => operand,
                    (None, Some(op)) => {
                        return Err(EvaluationError::InvalidExpression(format!(
                            "expression cannot start with '{op}'"
                        )));
                    }
                    (Some(_), None) => return Err(EvaluationError::MissingOperator),
                    (Some(lhs), Some(op)) => {
                        let result = lhs.apply(op, operand)?;
                        debug!(
                            "{} {op} {} = {}",
                            format_value(&lhs),
                            format_value(&operand),
                            format_value(&result)
                        );
                        result
                    }
                };
                acc = Some(next);
            }
        }
    }

    if pending.is_some() {
        return Err(EvaluationError::TrailingOperator);
    }
    acc.ok_or(EvaluationError::NoOperandsFound)
}

/// Decide whether an operand is a duration or an instant.
fn classify<C: Clock + ?Sized>(token: &str, clock: &C) -> Result<Value> {
    let value = if let Some(delta) = parse_duration(token)? {
        Value::Duration(delta)
    } else if let Some(instant) = parse_datetime(token, clock) {
        Value::Instant(instant)
    } else if let Some(unit) = find_unsupported_unit(token) {
        return Err(EvaluationError::UnsupportedUnit(unit.to_string()));
    } else {
        return Err(EvaluationError::UnparseableToken(token.to_string()));
    };

    debug!("'{token}' is {} {}", value.kind(), format_value(&value));
    Ok(value)
}

// ── Tests ───────────────────────────────────────────────────────────────────
