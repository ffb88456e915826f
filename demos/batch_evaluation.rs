use polish_calc::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expressions = vec!["+ 3 4", "* (- 5 6) 7", "/ 10 0", "+ 1 2 3"];

    let evaluator = Evaluator::new();
    let results = evaluator.evaluate_batch(&expressions);
    for (expression, result) in expressions.iter().zip(results) {
        println!("{}: {:?}", expression, result);
    }
}
