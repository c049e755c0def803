//! Postfix evaluator.
//!
//! A stack machine over already-classified tokens. Numbers and the
//! substituted variable are pushed; negation and functions rewrite the top
//! operand; binary operators fold the top two into one. The run succeeds
//! when exactly one value remains.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed token streams are reported as [`EvalError`]
//! - **Bounded**: every result is clamped to `[MIN, MAX]`
//! - **Domain errors flow on**: an undefined operation yields [`SENTINEL`],
//!   which later operations treat as an ordinary number
//!
//! ## Example
//!
//! ```
//! use rpn_core::evaluator::{SENTINEL, evaluate};
//! use rpn_core::token::Token;
//!
//! // x * 2 + 1
//! let tokens = [
//!     Token::variable("x"),
//!     Token::number(2.0),
//!     Token::operator("*"),
//!     Token::number(1.0),
//!     Token::operator("+"),
//! ];
//! assert_eq!(evaluate(&tokens, 3.0), Ok(7.0));
//!
//! let tokens = [Token::number(5.0), Token::number(0.0), Token::operator("/")];
//! assert_eq!(evaluate(&tokens, 0.0), Ok(SENTINEL));
//! ```

mod error;
mod eval;
pub mod functions;
pub mod operators;
mod outcome;


pub use error::EvalError;
pub use eval::Evaluator;
pub use functions::{FunctionKind, resolve_function};
pub use operators::{OperatorKind, resolve_operator};
pub use outcome::{EvalOutcome, MAX, MIN, SENTINEL};

use crate::{api::EvalOptions, token::Token};

/// Evaluate a postfix token sequence with default options.
///
/// ## Arguments
///
/// - `tokens`: Postfix token sequence; must not be empty
/// - `variable_value`: Value substituted for every variable token
///
/// ## Returns
///
/// The final value, or the first error encountered.
pub fn evaluate(tokens: &[Token], variable_value: f64) -> Result<f64, EvalError> {
    evaluate_with_options(tokens, variable_value, EvalOptions::default())
}

/// Evaluate a postfix token sequence with custom options.
///
/// ## Example
///
/// ```
/// use rpn_core::api::EvalOptions;
/// use rpn_core::evaluator::{EvalError, evaluate_with_options};
/// use rpn_core::token::Token;
///
/// let options = EvalOptions {
///     max_stack_depth: Some(1),
///     ..EvalOptions::default()
/// };
/// let tokens = [Token::number(1.0), Token::number(2.0), Token::operator("+")];
/// assert!(matches!(
///     evaluate_with_options(&tokens, 0.0, options),
///     Err(EvalError::StackOverflow { capacity: 1, position: 1 })
/// ));
/// ```
pub fn evaluate_with_options(
    tokens: &[Token],
    variable_value: f64,
    options: EvalOptions,
) -> Result<f64, EvalError> {
    Evaluator::new(options).evaluate(tokens, variable_value)
}

/// Evaluate and report the outcome as a `(success, result)` pair.
///
/// On failure the result is [`SENTINEL`]. Note that a successful run can also
/// return the sentinel when its last operation was a domain error.
pub fn evaluate_or_sentinel(tokens: &[Token], variable_value: f64) -> (bool, f64) {
    match evaluate(tokens, variable_value) {
        Ok(value) => (true, value),
        Err(_) => (false, SENTINEL),
    }
}
