//! Interest Calculator CLI
//!
//! Command-line interface for calculating monthly interest over a CSV file
//! of accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv > interest.csv
//! cargo run -- --strategy sync accounts.csv > interest.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 accounts.csv > interest.csv
//! cargo run -- --summary accounts.csv > interest.csv 2> summary.csv
//! ```
//!
//! Input rows are `account,category,balance`; output rows are
//! `account,category,balance,interest` in input order.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use interest_calculator::cli;
use interest_calculator::io::write_summary_csv;
use interest_calculator::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout();
    let summary = match strategy.process(&args.input_file, &mut output) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        if let Err(e) = write_summary_csv(&summary, &mut std::io::stderr()) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
