#![allow(dead_code)]

use once_cell::sync::Lazy;
use rpn::{EvalError, SENTINEL};

pub use rpn_core::test_utils::postfix;

/// Defines a test that evaluates `input` and compares against `expected`.
///
/// Every case also checks that the caller's tokens are left untouched.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        expected: $expected:expr $(,)?
    ) => {
        test_case! {
            name: $name,
            input: $input,
            x: 0.0,
            expected: $expected,
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        x: $x:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let tokens = $crate::cases::postfix($input);
            let snapshot = tokens.clone();
            let expected: Result<f64, rpn::EvalError> = $expected;
            pretty_assertions::assert_eq!(rpn::evaluate(&tokens, $x), expected);
            pretty_assertions::assert_eq!(tokens, snapshot);
        }
    };
}

pub struct TestCase {
    pub name: &'static str,
    pub input: &'static str,
    pub x: f64,
    pub expected: Result<f64, EvalError>,
}

/// Well-known expressions shared by the property tests.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "simple_addition",
            input: "3 4 +",
            x: 0.0,
            expected: Ok(7.0),
        },
        TestCase {
            name: "power",
            input: "2 3 ^",
            x: 0.0,
            expected: Ok(8.0),
        },
        TestCase {
            name: "division_by_zero",
            input: "5 0 /",
            x: 0.0,
            expected: Ok(SENTINEL),
        },
        TestCase {
            name: "polynomial",
            input: "x 3 ^ x 2 ^ 2 * - x + 7 -",
            x: 2.5,
            expected: Ok(2.5f64.powf(3.0) - 2.5f64.powf(2.0) * 2.0 + 2.5 - 7.0),
        },
        TestCase {
            name: "pythagorean_identity",
            input: "x sin 2 ^ x cos 2 ^ +",
            x: 0.0,
            expected: Ok(1.0),
        },
        TestCase {
            name: "log_of_exp",
            input: "x exp log",
            x: 1.0,
            expected: Ok(1f64.exp().log10()),
        },
        TestCase {
            name: "saturating_product",
            input: "x x * x *",
            x: 1000.0,
            expected: Ok(100_000.0),
        },
        TestCase {
            name: "leftover_operands",
            input: "1 2",
            x: 0.0,
            expected: Err(EvalError::ExtraOperands { remaining: 2 }),
        },
        TestCase {
            name: "missing_operand",
            input: "+",
            x: 0.0,
            expected: Err(EvalError::StackUnderflow { position: Some(0) }),
        },
        TestCase {
            name: "unknown_function",
            input: "x sqrt",
            x: 4.0,
            expected: Err(EvalError::UnknownFunction {
                name: "sqrt".into(),
                position: 1,
            }),
        },
    ]
});
