//! Error types for expression evaluation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Unsupported duration unit: {0}")]
    UnsupportedUnit(String),

    #[error("Could not parse token: '{0}'")]
    UnparseableToken(String),

    #[error("Expecting an operand after an operator")]
    ConsecutiveOperators,

    #[error("Missing operator")]
    MissingOperator,

    #[error("Last token can not be an operator")]
    TrailingOperator,

    #[error("No operands found")]
    NoOperandsFound,

    #[error("Cannot add two dates")]
    CannotAddTwoDates,

    #[error("Cannot subtract date from duration")]
    CannotSubtractDateFromDuration,

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
