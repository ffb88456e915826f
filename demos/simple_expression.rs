use log::debug;
use polish_calc::{evaluate, tokenize};

fn main() {
    pretty_env_logger::init();

    let expression = "* (- 5 6) 7";
    let tokens = tokenize(expression).unwrap();
    debug!("tokens: {tokens:?}");

    match evaluate(expression) {
        Ok(result) => println!("{} = {}", expression, result),
        Err(err) => println!("Error: {}", err),
    }
}
