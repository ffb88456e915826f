use std::fmt;

use crate::error::EvaluationError;

mod batch;
mod cache;
mod evaluator;
mod tokenizer;

pub use cache::CachedEvaluator;
pub use evaluator::{format_outcome, Evaluator};

/// Binary arithmetic operators understood by the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator with `left` as the earlier operand.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvaluationError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvaluationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            _ => Err(EvaluationError::UnknownOperator(value.to_string())),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvaluationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(EvaluationError::UnknownOperator(value.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One slot of the evaluation stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StackEntry {
    Operator(Operator),
    Number(f64),
}

impl fmt::Display for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEntry::Operator(operator) => write!(f, "{}", operator),
            StackEntry::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Returns the operator a token stands for, if it is one.
///
/// A token is an operator only when it is a single `+`, `-`, `*` or `/`
/// character; `-5` and `--` are numerals (the latter an invalid one).
pub fn classify(token: &str) -> Option<Operator> {
    Operator::try_from(token).ok()
}

/// Applies an operator given by its symbol.
pub fn apply(operator: &str, a: f64, b: f64) -> Result<f64, EvaluationError> {
    Operator::try_from(operator)?.apply(a, b)
}

/// Renders a stack the way error messages show it, e.g. `[+, 1]`.
pub(crate) fn render_stack(stack: &[StackEntry]) -> String {
    let entries: Vec<String> = stack.iter().map(StackEntry::to_string).collect();
    format!("[{}]", entries.join(", "))
}
