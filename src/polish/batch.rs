use crate::error::EvaluationError;
use crate::polish::Evaluator;
use log::debug;
use rayon::prelude::*;

impl Evaluator {
    /// Evaluates independent expressions in parallel.
    ///
    /// Results are returned in input order; one failing expression does not
    /// affect the others.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, EvaluationError>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
