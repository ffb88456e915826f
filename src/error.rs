use thiserror::Error;

/// Reasons an expression can fail to evaluate.
///
/// Every variant is terminal for the evaluation call that produced it; a
/// failure inside a parenthesized group fails the whole outer expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Parenthesis depth did not return to zero, or a `)` had no matching `(`.
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// A non-operator token that does not parse as a number.
    #[error("Invalid number token: {0}")]
    InvalidNumberToken(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// Only reachable through the string-level `apply` helper.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// The stack did not collapse to exactly one number.
    #[error("Malformed expression: stack={stack} after processing")]
    MalformedExpression { stack: String },

    #[error("Parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
