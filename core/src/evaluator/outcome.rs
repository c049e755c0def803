//! Results of a single operator or function application.

use ecow::EcoString;

use crate::{api::LiteralFormat, token::format_literal};

/// Reserved value standing for an undefined result.
///
/// It lies outside `[MIN, MAX]`, so no clamped value can be mistaken for it,
/// but it is an ordinary number to every later operation.
pub const SENTINEL: f64 = 100_001.0;

/// Smallest value a computation can produce.
pub const MIN: f64 = -100_000.0;

/// Largest value a computation can produce.
pub const MAX: f64 = 100_000.0;

/// Literal text of [`SENTINEL`], independent of the configured format.
const SENTINEL_LITERAL: &str = "100001";

/// Outcome of applying an operator or function to valid operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    /// A computed value, already clamped to `[MIN, MAX]`.
    Value(f64),
    /// The operation is undefined for its operands.
    DomainError,
}

impl EvalOutcome {
    /// Clamp a raw result into `[MIN, MAX]`.
    ///
    /// Infinities saturate to the nearest bound. NaN has no nearest bound and
    /// is classified as a domain error.
    pub fn saturate(raw: f64) -> Self {
        if raw.is_nan() {
            EvalOutcome::DomainError
        } else {
            EvalOutcome::Value(raw.clamp(MIN, MAX))
        }
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, EvalOutcome::DomainError)
    }

    /// Number literal written back into the result token.
    pub fn to_literal(self, format: LiteralFormat) -> EcoString {
        match self {
            EvalOutcome::Value(value) => format_literal(value, format),
            EvalOutcome::DomainError => EcoString::from(SENTINEL_LITERAL),
        }
    }
}
