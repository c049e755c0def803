//! Evaluation errors.
//!
//! These abort a run. Domain errors (division by zero, `asin(2)`, `ln(-1)`)
//! are not represented here: they produce the in-band sentinel and the run
//! continues.
//!
//! Positions are zero-based indices into the caller's token slice. A `None`
//! position refers to the final pop after the last token was consumed.

use ecow::EcoString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The token sequence was empty.
    #[error("cannot evaluate an empty token sequence")]
    PreconditionFailure,

    /// An operator, function, negation or the final pop found no operand.
    #[error("{}", underflow_message(.position))]
    StackUnderflow { position: Option<usize> },

    /// More than one value remained once every token was consumed.
    #[error("{remaining} values left on the stack, expected exactly one")]
    ExtraOperands { remaining: usize },

    #[error("unknown operator `{symbol}` at token {position}")]
    UnknownOperator { symbol: EcoString, position: usize },

    #[error("unknown function `{name}` at token {position}")]
    UnknownFunction { name: EcoString, position: usize },

    /// An operand's text is not a finite number literal.
    #[error("{}", parse_failure_message(.text, .position))]
    NumericParseFailure {
        text: EcoString,
        position: Option<usize>,
    },

    /// The working copy or the stack could not be allocated.
    #[error("failed to allocate room for {requested} tokens")]
    AllocationFailure { requested: usize },

    /// A push exceeded the configured stack capacity.
    #[error("evaluation stack overflow at token {position}: capacity is {capacity}")]
    StackOverflow { capacity: usize, position: usize },
}

fn underflow_message(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!("missing operand at token {}", position),
        None => "expression produced no value".to_string(),
    }
}

fn parse_failure_message(text: &str, position: &Option<usize>) -> String {
    match position {
        Some(position) => format!("invalid number `{}` consumed at token {}", text, position),
        None => format!("invalid number `{}` as final result", text),
    }
}

impl EvalError {
    /// Token position the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::StackUnderflow { position } => *position,
            EvalError::NumericParseFailure { position, .. } => *position,
            EvalError::UnknownOperator { position, .. }
            | EvalError::UnknownFunction { position, .. }
            | EvalError::StackOverflow { position, .. } => Some(*position),
            EvalError::PreconditionFailure
            | EvalError::ExtraOperands { .. }
            | EvalError::AllocationFailure { .. } => None,
        }
    }
}
