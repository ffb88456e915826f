/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard upper bound on parenthesis nesting; larger limits are clamped to it.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Default number of results kept by a `CachedEvaluator`.
pub const DEFAULT_CACHE_SIZE: usize = 128;

/// Tunables shared by `Evaluator` and `CachedEvaluator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Deepest parenthesis nesting accepted before evaluation is refused.
    pub max_depth: usize,
    /// Capacity of the result cache. `0` disables caching.
    pub cache_size: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl EvaluatorConfig {
    /// Sets the nesting limit, clamped to `MAX_DEPTH_CEILING`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Nesting limit the tokenizer enforces.
    ///
    /// `max_depth` is a public field, so it is clamped again here.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }

    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }
}
