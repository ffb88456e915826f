use polish_calc::{CachedEvaluator, EvaluatorConfig};

fn main() {
    pretty_env_logger::init();

    let mut evaluator = CachedEvaluator::new(EvaluatorConfig::default().with_cache_size(16));

    for expression in ["+ (* 2 3) 4", "+ (* 2 3) 4", "/ 1 (- 2 2)"] {
        match evaluator.evaluate(expression) {
            Ok(result) => println!("Result: {}", result),
            Err(err) => println!("Error: {}", err),
        }
    }
    println!("cached: {}", evaluator.cached_len());
}
