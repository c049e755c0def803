//! Token model consumed by the postfix evaluator.
//!
//! Tokens arrive already classified by an external tokenizer and already in
//! postfix order. The evaluator only inspects `kind`; `text` carries either a
//! numeric literal (numbers) or a symbol/name (operators and functions).
//!
//! Number literals are the evaluator's operand representation: every
//! intermediate result is written back into a token as text and parsed again
//! when consumed, so [`format_literal`] and [`parse_literal`] must agree.

use core::fmt;

use ecow::{EcoString, eco_format};
use serde::{Deserialize, Serialize};

use crate::api::LiteralFormat;

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A numeric literal.
    Number,
    /// The free variable, replaced by the run's variable value.
    Variable,
    /// Prefix minus, already disambiguated from binary subtraction.
    UnaryNegate,
    /// One of `+ - * / ^`.
    BinaryOperator,
    /// A named one-argument function such as `sin` or `ln`.
    Function,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Variable => "variable",
            TokenKind::UnaryNegate => "unary negation",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// A classified token with its textual payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: EcoString,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<EcoString>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A number token holding `value` in the shortest round-trip form.
    pub fn number(value: f64) -> Self {
        Self::new(TokenKind::Number, format_literal(value, LiteralFormat::Shortest))
    }

    /// A number token holding `text` verbatim.
    ///
    /// The text is not validated here; a malformed literal is reported by the
    /// evaluator when the token is consumed.
    pub fn literal(text: impl Into<EcoString>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn variable(name: impl Into<EcoString>) -> Self {
        Self::new(TokenKind::Variable, name)
    }

    pub fn negate() -> Self {
        Self::new(TokenKind::UnaryNegate, "-")
    }

    pub fn operator(symbol: impl Into<EcoString>) -> Self {
        Self::new(TokenKind::BinaryOperator, symbol)
    }

    pub fn function(name: impl Into<EcoString>) -> Self {
        Self::new(TokenKind::Function, name)
    }

    /// Parsed numeric value, if this is a number token with a valid literal.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => parse_literal(&self.text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse a number literal.
///
/// The whole text must be consumed and the value must be finite, so `inf`,
/// `NaN`, the empty string and anything with surrounding whitespace are all
/// rejected.
pub fn parse_literal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render `value` as a number literal.
pub fn format_literal(value: f64, format: LiteralFormat) -> EcoString {
    match format {
        LiteralFormat::Shortest => eco_format!("{}", value),
        LiteralFormat::Fixed(digits) => eco_format!("{:.*}", usize::from(digits), value),
    }
}
