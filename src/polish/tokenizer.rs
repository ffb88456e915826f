use crate::error::EvaluationError;
use crate::polish::Evaluator;
use log::trace;
use std::mem;

impl Evaluator {
    /// Splits a prefix expression into operator and numeral tokens.
    ///
    /// Parenthesized groups are evaluated eagerly with this same evaluator
    /// and replaced by the display string of their result, so the returned
    /// tokens never contain parentheses.
    pub fn tokenize(&self, expression: &str) -> Result<Vec<String>, EvaluationError> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut depth: usize = 0;

        for ch in expression.chars() {
            match ch {
                '(' => {
                    if depth == 0 && !current.is_empty() {
                        tokens.push(mem::take(&mut current));
                    }
                    depth += 1;
                    let limit = self.config().depth_limit();
                    if depth > limit {
                        return Err(EvaluationError::NestingTooDeep { limit });
                    }
                    if depth > 1 {
                        current.push(ch);
                    }
                }
                ')' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(EvaluationError::UnbalancedParentheses)?;
                    if depth > 0 {
                        current.push(ch);
                    } else {
                        let inner = mem::take(&mut current);
                        trace!("Evaluating group: ({})", inner);
                        let value = self.evaluate(&inner)?;
                        tokens.push(value.to_string());
                    }
                }
                ' ' if depth == 0 => {
                    if !current.is_empty() {
                        tokens.push(mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        if depth != 0 {
            return Err(EvaluationError::UnbalancedParentheses);
        }

        Ok(tokens)
    }
}
