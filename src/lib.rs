pub mod config;
pub mod error;
pub mod polish;

pub use config::EvaluatorConfig;
pub use error::EvaluationError;
pub use polish::{apply, CachedEvaluator, Evaluator, Operator, StackEntry};

/// Evaluates a prefix expression with the default configuration.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    Evaluator::new().evaluate(expression)
}

/// Tokenizes a prefix expression, reducing parenthesized groups to numerals.
pub fn tokenize(expression: &str) -> Result<Vec<String>, EvaluationError> {
    Evaluator::new().tokenize(expression)
}

/// Returns the `"<expression> = <result>"` or `"Invalid expression: ..."` line.
pub fn calc(expression: &str) -> String {
    Evaluator::new().calc(expression)
}
