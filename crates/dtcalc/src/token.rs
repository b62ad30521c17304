//! Expression tokenizer.
//!
//! An expression is a chain of operands joined by `+` or `-`. Operators only
//! count when surrounded by whitespace, so the dashes in `2024-01-01` or a
//! sign glued to `-3d` stay part of their operand.

use std::fmt;

use log::trace;

use crate::error::{EvaluationError, Result};

/// A binary operator between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token borrowed from the expression being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// An operand, trimmed of surrounding whitespace.
    Operand(&'a str),
    Operator(Op),
}

/// Split an expression into operand and operator tokens.
///
/// The start and end of the trimmed input count as whitespace, so a lone
/// trailing `+` is still an operator. Empty operand fragments are dropped.
/// Ordering rules (alternation, leading/trailing operators) are left to the
/// evaluator.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidExpression`] if no operand remains.
///
/// # Examples
///
/// ```
/// use dtcalc::token::{tokenize, Op, Token};
///
/// let tokens = tokenize("2024-01-01 - 3d").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Operand("2024-01-01"), Token::Operator(Op::Sub), Token::Operand("3d")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token<'_>>> {
    let input = expression.trim();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_is_space = true;

    let mut chars = input.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next_is_space = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if let Some(op) = Op::from_char(c).filter(|_| prev_is_space && next_is_space) {
            push_operand(&mut tokens, &input[start..i]);
            tokens.push(Token::Operator(op));
            start = i + c.len_utf8();
        }
        prev_is_space = c.is_whitespace();
    }
    push_operand(&mut tokens, &input[start..]);

    if !tokens.iter().any(|t| matches!(t, Token::Operand(_))) {
        return Err(EvaluationError::InvalidExpression(format!(
            "no operands in '{input}'"
        )));
    }

    trace!("tokenized '{input}' into {tokens:?}");
    Ok(tokens)
}

fn push_operand<'a>(tokens: &mut Vec<Token<'a>>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        tokens.push(Token::Operand(fragment));
    }
}
