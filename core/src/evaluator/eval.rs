//! Core evaluation logic.

use tracing::{debug, trace};

use crate::{
    api::EvalOptions,
    evaluator::{
        EvalError, EvalOutcome,
        functions::{self, FunctionKind},
        operators::{self, OperatorKind},
    },
    stack::Stack,
    token::{Token, TokenKind, format_literal},
};

/// Evaluator for postfix token sequences.
///
/// An `Evaluator` holds nothing but its options, so one instance can serve
/// any number of runs, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Evaluate `tokens`, substituting `variable_value` for every variable.
    ///
    /// The caller's tokens are never modified.
    pub fn evaluate(&self, tokens: &[Token], variable_value: f64) -> Result<f64, EvalError> {
        if tokens.is_empty() {
            debug!("refusing to evaluate an empty token sequence");
            return Err(EvalError::PreconditionFailure);
        }

        debug!(tokens = tokens.len(), variable_value, "evaluating postfix sequence");
        let result = Run::new(&self.options, tokens).and_then(|run| run.execute(variable_value));
        match &result {
            Ok(value) => debug!(value, "evaluation finished"),
            Err(error) => debug!(%error, "evaluation aborted"),
        }
        result
    }
}

/// A single evaluation run.
///
/// The stack holds indices into `working`. Operators write their result into
/// an operand's slot and push that slot back, so the buffer never grows.
/// Dropping the run releases both, whichever way it ends.
struct Run<'o> {
    options: &'o EvalOptions,
    working: Vec<Token>,
    stack: Stack<usize>,
}

impl<'o> Run<'o> {
    fn new(options: &'o EvalOptions, tokens: &[Token]) -> Result<Self, EvalError> {
        let capacity = options.stack_capacity(tokens.len());
        let stack = Stack::try_new(capacity)
            .map_err(|_| EvalError::AllocationFailure { requested: capacity })?;

        let mut working = Vec::new();
        working
            .try_reserve_exact(tokens.len())
            .map_err(|_| EvalError::AllocationFailure {
                requested: tokens.len(),
            })?;
        working.extend_from_slice(tokens);

        Ok(Self {
            options,
            working,
            stack,
        })
    }

    fn execute(mut self, variable_value: f64) -> Result<f64, EvalError> {
        for position in 0..self.working.len() {
            let kind = self.working[position].kind;
            trace!(position, %kind, depth = self.stack.len(), "step");

            match kind {
                TokenKind::Number => self.push(position, position)?,
                TokenKind::Variable => {
                    let token = &mut self.working[position];
                    token.kind = TokenKind::Number;
                    token.text = format_literal(variable_value, self.options.literal_format);
                    self.push(position, position)?;
                }
                TokenKind::UnaryNegate => {
                    let slot = self.pop(position)?;
                    let value = self.operand(slot, position)?;
                    self.working[slot].text = format_literal(-value, self.options.literal_format);
                    self.push(slot, position)?;
                }
                TokenKind::Function => {
                    let slot = self.pop(position)?;
                    let arg = self.operand(slot, position)?;
                    let function = FunctionKind::resolve(&self.working[position].text);
                    let Some(outcome) = functions::apply(arg, function) else {
                        return Err(EvalError::UnknownFunction {
                            name: self.working[position].text.clone(),
                            position,
                        });
                    };
                    if outcome.is_domain_error() {
                        debug!(position, %function, arg, "domain error");
                    }
                    self.store(slot, outcome);
                    self.push(slot, position)?;
                }
                TokenKind::BinaryOperator => {
                    let right = self.pop(position)?;
                    let left = self.pop(position)?;
                    let lhs = self.operand(left, position)?;
                    let rhs = self.operand(right, position)?;
                    let op = OperatorKind::resolve(&self.working[position].text);
                    let Some(outcome) = operators::apply(lhs, rhs, op) else {
                        return Err(EvalError::UnknownOperator {
                            symbol: self.working[position].text.clone(),
                            position,
                        });
                    };
                    if outcome.is_domain_error() {
                        debug!(position, %op, lhs, rhs, "domain error");
                    }
                    self.store(left, outcome);
                    self.push(left, position)?;
                }
            }
        }

        self.finish()
    }

    /// Pop the single remaining value.
    fn finish(mut self) -> Result<f64, EvalError> {
        let slot = self
            .stack
            .pop()
            .ok_or(EvalError::StackUnderflow { position: None })?;

        if !self.stack.is_empty() {
            let remaining = self.stack.len() + 1;
            debug!(
                remaining,
                leftover = ?self.stack.iter().map(|&i| self.working[i].text.as_str()).collect::<Vec<_>>(),
                "values left on the stack"
            );
            return Err(EvalError::ExtraOperands { remaining });
        }

        let token = &self.working[slot];
        token.value().ok_or_else(|| EvalError::NumericParseFailure {
            text: token.text.clone(),
            position: None,
        })
    }

    fn push(&mut self, slot: usize, position: usize) -> Result<(), EvalError> {
        if self.stack.push(slot) {
            Ok(())
        } else {
            Err(EvalError::StackOverflow {
                capacity: self.stack.capacity(),
                position,
            })
        }
    }

    fn pop(&mut self, position: usize) -> Result<usize, EvalError> {
        self.stack.pop().ok_or(EvalError::StackUnderflow {
            position: Some(position),
        })
    }

    /// Parse the operand held in `slot`, consumed by the token at `position`.
    fn operand(&self, slot: usize, position: usize) -> Result<f64, EvalError> {
        let token = &self.working[slot];
        token.value().ok_or_else(|| EvalError::NumericParseFailure {
            text: token.text.clone(),
            position: Some(position),
        })
    }

    fn store(&mut self, slot: usize, outcome: EvalOutcome) {
        self.working[slot].text = outcome.to_literal(self.options.literal_format);
    }
}
