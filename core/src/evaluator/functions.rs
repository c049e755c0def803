//! Named one-argument functions.
//!
//! Functions: sin, cos, tan, sinh, cosh, tanh, asin, acos, atan, abs,
//!            log (base 10), ln, exp

use core::fmt;

use crate::evaluator::EvalOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
    Abs,
    Log,
    Ln,
    Exp,
    /// The name did not match any function.
    Undefined,
}

impl FunctionKind {
    /// Every resolvable function, in declaration order.
    pub const ALL: [FunctionKind; 13] = [
        FunctionKind::Sin,
        FunctionKind::Cos,
        FunctionKind::Tan,
        FunctionKind::Sinh,
        FunctionKind::Cosh,
        FunctionKind::Tanh,
        FunctionKind::Asin,
        FunctionKind::Acos,
        FunctionKind::Atan,
        FunctionKind::Abs,
        FunctionKind::Log,
        FunctionKind::Ln,
        FunctionKind::Exp,
    ];

    /// Resolve a function name (exact, case-sensitive). Unknown names resolve
    /// to `Undefined`.
    pub fn resolve(name: &str) -> Self {
        match name {
            "sin" => FunctionKind::Sin,
            "cos" => FunctionKind::Cos,
            "tan" => FunctionKind::Tan,
            "sinh" => FunctionKind::Sinh,
            "cosh" => FunctionKind::Cosh,
            "tanh" => FunctionKind::Tanh,
            "asin" => FunctionKind::Asin,
            "acos" => FunctionKind::Acos,
            "atan" => FunctionKind::Atan,
            "abs" => FunctionKind::Abs,
            "log" => FunctionKind::Log,
            "ln" => FunctionKind::Ln,
            "exp" => FunctionKind::Exp,
            _ => FunctionKind::Undefined,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Sin => "sin",
            FunctionKind::Cos => "cos",
            FunctionKind::Tan => "tan",
            FunctionKind::Sinh => "sinh",
            FunctionKind::Cosh => "cosh",
            FunctionKind::Tanh => "tanh",
            FunctionKind::Asin => "asin",
            FunctionKind::Acos => "acos",
            FunctionKind::Atan => "atan",
            FunctionKind::Abs => "abs",
            FunctionKind::Log => "log",
            FunctionKind::Ln => "ln",
            FunctionKind::Exp => "exp",
            FunctionKind::Undefined => "<undefined>",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shorthand for [`FunctionKind::resolve`].
pub fn resolve_function(name: &str) -> FunctionKind {
    FunctionKind::resolve(name)
}

/// Apply a function to a finite argument.
///
/// `asin`/`acos` outside `[-1, 1]` and `log`/`ln` of a non-positive argument
/// are domain errors and are never computed. Every other result is clamped to
/// `[MIN, MAX]`. Returns `None` only for `FunctionKind::Undefined`.
pub fn apply(arg: f64, function: FunctionKind) -> Option<EvalOutcome> {
    let raw = match function {
        FunctionKind::Sin => arg.sin(),
        FunctionKind::Cos => arg.cos(),
        FunctionKind::Tan => arg.tan(),
        FunctionKind::Sinh => arg.sinh(),
        FunctionKind::Cosh => arg.cosh(),
        FunctionKind::Tanh => arg.tanh(),
        FunctionKind::Asin | FunctionKind::Acos if !(-1.0..=1.0).contains(&arg) => {
            return Some(EvalOutcome::DomainError);
        }
        FunctionKind::Asin => arg.asin(),
        FunctionKind::Acos => arg.acos(),
        FunctionKind::Atan => arg.atan(),
        FunctionKind::Abs => arg.abs(),
        FunctionKind::Log | FunctionKind::Ln if arg <= 0.0 => {
            return Some(EvalOutcome::DomainError);
        }
        FunctionKind::Log => arg.log10(),
        FunctionKind::Ln => arg.ln(),
        FunctionKind::Exp => arg.exp(),
        FunctionKind::Undefined => return None,
    };
    Some(EvalOutcome::saturate(raw))
}
