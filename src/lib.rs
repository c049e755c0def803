//! rpn - A bounded postfix expression evaluator
//!
//! # Overview
//!
//! `rpn` evaluates numeric expressions that have already been tokenized and
//! converted to postfix (reverse Polish) order. Expressions may use one free
//! variable, unary negation, `+ - * / ^`, and the functions `sin cos tan
//! sinh cosh tanh asin acos atan abs log ln exp`.
//!
//! Results are always bounded: values saturate at [`MIN`] and [`MAX`], and
//! operations that are undefined for their operands (division by zero,
//! `asin(2)`, `ln(-1)`) produce [`SENTINEL`] instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use rpn::{Token, evaluate};
//!
//! // sin(x)^2 + cos(x)^2
//! let tokens = [
//!     Token::variable("x"),
//!     Token::function("sin"),
//!     Token::number(2.0),
//!     Token::operator("^"),
//!     Token::variable("x"),
//!     Token::function("cos"),
//!     Token::number(2.0),
//!     Token::operator("^"),
//!     Token::operator("+"),
//! ];
//! let value = evaluate(&tokens, 0.3).unwrap();
//! assert!((value - 1.0).abs() < 1e-12);
//! ```
//!
//! # Errors
//!
//! Malformed token streams are rejected with an [`EvalError`]: missing
//! operands, leftover operands, unknown operator symbols or function names,
//! and number tokens whose text is not a finite literal. Callers that only
//! want a status flag can use [`evaluate_or_sentinel`].

// Re-export public API from rpn_core
pub use rpn_core::api::{EvalOptions, LiteralFormat};
pub use rpn_core::evaluator::{
    EvalOutcome, Evaluator, FunctionKind, MAX, MIN, OperatorKind, SENTINEL, evaluate,
    evaluate_or_sentinel, evaluate_with_options, resolve_function, resolve_operator,
};
pub use rpn_core::stack::Stack;
pub use rpn_core::token::{Token, TokenKind};

// Re-export errors
pub use rpn_core::evaluator::EvalError;
