//! Configuration options for the postfix evaluator.

/// How intermediate results are rendered back into number tokens.
///
/// Every operand pushed on the evaluation stack is a number literal, so this
/// choice decides how much precision survives between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralFormat {
    /// Shortest decimal that parses back to the same `f64`. Lossless.
    Shortest,
    /// A fixed number of fractional digits.
    ///
    /// `Fixed(6)` matches the classic `%f` rendering, rounding every
    /// intermediate result to six decimals.
    Fixed(u16),
}

/// Configuration options for an evaluation run.
///
/// # Example
///
/// ```
/// use rpn_core::api::{EvalOptions, LiteralFormat};
///
/// let options = EvalOptions {
///     literal_format: LiteralFormat::Fixed(6),
///     max_stack_depth: Some(64),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Rendering of substituted variables and intermediate results.
    ///
    /// Default: `LiteralFormat::Shortest`
    pub literal_format: LiteralFormat,

    /// Upper bound on the evaluation stack (if Some).
    ///
    /// The stack never holds more operands than there are input tokens, so
    /// the effective capacity is the smaller of the two. Pushing past it
    /// fails the run with `EvalError::StackOverflow`.
    ///
    /// Default: None
    pub max_stack_depth: Option<usize>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            literal_format: LiteralFormat::Shortest,
            max_stack_depth: None,
        }
    }
}

impl EvalOptions {
    /// Stack capacity for a run over `token_count` tokens.
    pub fn stack_capacity(&self, token_count: usize) -> usize {
        match self.max_stack_depth {
            Some(max) => token_count.min(max),
            None => token_count,
        }
    }
}
