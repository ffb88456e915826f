use crate::config::EvaluatorConfig;
use crate::error::EvaluationError;
use crate::polish::Evaluator;
use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Evaluator that remembers the results of recently seen expressions.
///
/// Only successful results are stored. With a cache size of zero every
/// call goes straight to the wrapped `Evaluator`.
pub struct CachedEvaluator {
    evaluator: Evaluator,
    cache: Option<LruCache<String, f64>>,
}

impl CachedEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            evaluator: Evaluator::with_config(config),
            cache: NonZeroUsize::new(config.cache_size).map(LruCache::new),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvaluationError> {
        let expression = expression.trim();
        let Some(cache) = self.cache.as_mut() else {
            return self.evaluator.evaluate(expression);
        };

        if let Some(value) = cache.get(expression) {
            trace!("Cache hit: {}", expression);
            return Ok(*value);
        }

        let value = self.evaluator.evaluate(expression)?;
        cache.put(expression.to_string(), value);
        Ok(value)
    }

    /// Number of expressions currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}

impl Default for CachedEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}
