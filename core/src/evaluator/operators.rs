//! Binary operator resolution and evaluation.

use core::fmt;

use crate::evaluator::EvalOutcome;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// The symbol did not name an operator.
    Undefined,
}

impl OperatorKind {
    /// Resolve an operator symbol. Never fails: unknown symbols resolve to
    /// `Undefined`.
    pub fn resolve(symbol: &str) -> Self {
        match symbol {
            "+" => OperatorKind::Add,
            "-" => OperatorKind::Sub,
            "*" => OperatorKind::Mul,
            "/" => OperatorKind::Div,
            "^" => OperatorKind::Pow,
            _ => OperatorKind::Undefined,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Pow => "^",
            OperatorKind::Undefined => "?",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Shorthand for [`OperatorKind::resolve`].
pub fn resolve_operator(symbol: &str) -> OperatorKind {
    OperatorKind::resolve(symbol)
}

/// Apply a binary operator to two finite operands.
///
/// Division by zero is a domain error; every other result is clamped to
/// `[MIN, MAX]`. Returns `None` only for `OperatorKind::Undefined`.
pub fn apply(left: f64, right: f64, op: OperatorKind) -> Option<EvalOutcome> {
    let raw = match op {
        OperatorKind::Add => left + right,
        OperatorKind::Sub => left - right,
        OperatorKind::Mul => left * right,
        OperatorKind::Div => {
            if right == 0.0 {
                return Some(EvalOutcome::DomainError);
            }
            left / right
        }
        OperatorKind::Pow => left.powf(right),
        OperatorKind::Undefined => return None,
    };
    Some(EvalOutcome::saturate(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{MAX, MIN};

    fn value(left: f64, right: f64, op: OperatorKind) -> f64 {
        match apply(left, right, op) {
            Some(EvalOutcome::Value(v)) => v,
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve_operator("+"), OperatorKind::Add);
        assert_eq!(resolve_operator("-"), OperatorKind::Sub);
        assert_eq!(resolve_operator("*"), OperatorKind::Mul);
        assert_eq!(resolve_operator("/"), OperatorKind::Div);
        assert_eq!(resolve_operator("^"), OperatorKind::Pow);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_operator("%"), OperatorKind::Undefined);
        assert_eq!(resolve_operator(""), OperatorKind::Undefined);
        assert_eq!(resolve_operator("++"), OperatorKind::Undefined);
        assert_eq!(resolve_operator(" +"), OperatorKind::Undefined);
    }

    #[test]
    fn test_symbol_resolves_back() {
        for op in [
            OperatorKind::Add,
            OperatorKind::Sub,
            OperatorKind::Mul,
            OperatorKind::Div,
            OperatorKind::Pow,
        ] {
            assert_eq!(OperatorKind::resolve(op.symbol()), op);
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(value(3.0, 4.0, OperatorKind::Add), 7.0);
        assert_eq!(value(-5.0, 3.0, OperatorKind::Add), -2.0);
    }

    #[test]
    fn test_sub() {
        assert_eq!(value(10.0, 4.0, OperatorKind::Sub), 6.0);
        assert_eq!(value(3.0, 10.0, OperatorKind::Sub), -7.0);
    }

    #[test]
    fn test_mul() {
        assert_eq!(value(3.0, 4.0, OperatorKind::Mul), 12.0);
        assert_eq!(value(-2.0, 5.0, OperatorKind::Mul), -10.0);
    }

    #[test]
    fn test_div() {
        assert_eq!(value(10.0, 4.0, OperatorKind::Div), 2.5);
        assert_eq!(value(0.0, 3.0, OperatorKind::Div), 0.0);
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            apply(5.0, 0.0, OperatorKind::Div),
            Some(EvalOutcome::DomainError)
        );
        assert_eq!(
            apply(0.0, -0.0, OperatorKind::Div),
            Some(EvalOutcome::DomainError)
        );
    }

    #[test]
    fn test_pow() {
        assert_eq!(value(2.0, 3.0, OperatorKind::Pow), 8.0);
        assert_eq!(value(5.0, 0.0, OperatorKind::Pow), 1.0);
        assert_eq!(value(4.0, 0.5, OperatorKind::Pow), 2.0);
    }

    #[test]
    fn test_pow_zero_to_negative_saturates() {
        // 0^-1 is +inf
        assert_eq!(value(0.0, -1.0, OperatorKind::Pow), MAX);
    }

    #[test]
    fn test_pow_nan_is_domain_error() {
        assert_eq!(
            apply(-8.0, 1.0 / 3.0, OperatorKind::Pow),
            Some(EvalOutcome::DomainError)
        );
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(value(99_999.0, 2.0, OperatorKind::Add), MAX);
        assert_eq!(value(-1000.0, 1000.0, OperatorKind::Mul), MIN);
        assert_eq!(value(10.0, 10.0, OperatorKind::Pow), MAX);
    }

    #[test]
    fn test_sentinel_valued_result_is_clamped() {
        // A legitimate 100001 is a number, not a domain error
        assert_eq!(
            apply(200_002.0, 2.0, OperatorKind::Div),
            Some(EvalOutcome::Value(MAX))
        );
    }

    #[test]
    fn test_undefined() {
        assert_eq!(apply(1.0, 2.0, OperatorKind::Undefined), None);
    }
}
