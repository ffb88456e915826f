//! # polish-calc
//!
//! Command-line front end for the prefix-notation evaluator.
//!
//! ```bash
//! polish-calc '+ 3 4'
//! polish-calc "* (- 5 6) 7"
//! polish-calc --max-depth 8 '+ (+ 1 2) 3'
//! RUST_LOG=trace polish-calc '/ 1 3'
//! ```

use clap::Parser;
use polish_calc::config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
use polish_calc::polish::format_outcome;
use polish_calc::{Evaluator, EvaluatorConfig};
use std::process::ExitCode;

const USAGE: &str = "Polish Notation Calculator
Usage: polish-calc '<expression>'
Example: polish-calc '+ 3 4'
Example: polish-calc \"* (- 5 6) 7\"";

#[derive(Parser)]
#[command(name = "polish-calc")]
#[command(about = "Polish Notation Calculator")]
#[command(version)]
struct Cli {
    /// Deepest parenthesis nesting to accept
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_CEILING as u64)
    )]
    max_depth: u64,

    /// Expression words; joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

/// Builds the line to print. `Err` carries the line for a failed evaluation.
fn run(cli: &Cli) -> Result<String, String> {
    if cli.expression.is_empty() {
        return Ok(USAGE.to_string());
    }

    let expression = cli.expression.join(" ");
    let expression = expression.trim();
    let config = EvaluatorConfig::default().with_max_depth(cli.max_depth as usize);
    let outcome = Evaluator::with_config(config).evaluate(expression);

    let line = format_outcome(expression, &outcome);
    match outcome {
        Ok(_) => Ok(line),
        Err(_) => Err(line),
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(line) => {
            println!("{}", line);
            ExitCode::FAILURE
        }
    }
}
