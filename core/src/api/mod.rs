//! Public configuration surface for the postfix evaluator.
//!
//! # Example
//!
//! ```
//! use rpn_core::api::{EvalOptions, LiteralFormat};
//! use rpn_core::evaluator::evaluate_with_options;
//! use rpn_core::token::Token;
//!
//! let options = EvalOptions {
//!     literal_format: LiteralFormat::Fixed(6),
//!     ..EvalOptions::default()
//! };
//! let tokens = [Token::number(0.5), Token::function("asin")];
//! let result = evaluate_with_options(&tokens, 0.0, options).unwrap();
//! assert_eq!(result, 0.523599);
//! ```

pub mod options;

pub use options::{EvalOptions, LiteralFormat};
