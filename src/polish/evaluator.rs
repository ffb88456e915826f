use crate::config::EvaluatorConfig;
use crate::error::EvaluationError;
use crate::polish::{classify, render_stack, StackEntry};
use log::{debug, trace};

/// Stack machine for prefix-notation arithmetic.
///
/// Holds only configuration, so one instance can be shared freely across
/// threads; every call builds its own stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates a prefix expression such as `* (- 5 6) 7`.
    ///
    /// # Arguments
    ///
    /// * `expression` - The expression text. Surrounding whitespace is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the expression reduces to a single number.
    /// * `Err(EvaluationError)` on the first tokenizing or arithmetic failure.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        let expression = expression.trim();
        debug!("Evaluating expression: {}", expression);

        let tokens = self.tokenize(expression)?;
        trace!("Tokens: {:?}", tokens);

        self.evaluate_tokens(&tokens)
    }

    /// Runs the stack machine over already tokenized input.
    pub fn evaluate_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<f64, EvaluationError> {
        let mut stack: Vec<StackEntry> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let token = token.as_ref();
            match classify(token) {
                Some(operator) => stack.push(StackEntry::Operator(operator)),
                None => {
                    let value: f64 = token
                        .parse()
                        .map_err(|_| EvaluationError::InvalidNumberToken(token.to_string()))?;
                    stack.push(StackEntry::Number(value));
                    reduce(&mut stack)?;
                }
            }
        }

        match stack.as_slice() {
            [StackEntry::Number(value)] => Ok(*value),
            _ => Err(EvaluationError::MalformedExpression {
                stack: render_stack(&stack),
            }),
        }
    }

    /// Formats the outcome of an evaluation as a single display line.
    ///
    /// `"<expression> = <result>"` on success, `"Invalid expression: <reason>"`
    /// otherwise.
    pub fn calc(&self, expression: &str) -> String {
        let expression = expression.trim();
        format_outcome(expression, &self.evaluate(expression))
    }
}

/// Renders an evaluation result the way `Evaluator::calc` reports it.
pub fn format_outcome(expression: &str, outcome: &Result<f64, EvaluationError>) -> String {
    match outcome {
        Ok(result) => format!("{} = {}", expression, result),
        Err(err) => format!("Invalid expression: {}", err),
    }
}

/// Collapses trailing `operator, number, number` triples until none is left.
fn reduce(stack: &mut Vec<StackEntry>) -> Result<(), EvaluationError> {
    loop {
        let (operator, a, b) = match stack.as_slice() {
            [.., StackEntry::Operator(operator), StackEntry::Number(a), StackEntry::Number(b)] => {
                (*operator, *a, *b)
            }
            _ => return Ok(()),
        };

        stack.truncate(stack.len() - 3);
        let result = operator.apply(a, b)?;
        trace!("reduce {a:?} {operator} {b:?} = {result:?}");
        stack.push(StackEntry::Number(result));
    }
}
