//! money-parser CLI
//!
//! Converts a CSV of locale formatted money amounts into integer minor units.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- amounts.csv > converted.csv
//! cargo run -- --allow-currency-symbol --strict-grouping amounts.csv > converted.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 amounts.csv > converted.csv
//! RUST_LOG=info cargo run -- amounts.csv > converted.csv
//! ```
//!
//! Each input row `amount,currency` produces one output row
//! `amount,currency,minor_units,normalized,error`, in input order.
//!
//! # Exit Codes
//!
//! - 0: Success (rejected amounts are reported in the output, not as failures)
//! - 1: Error (file not found, file not readable, output not writable)

use money_parser::cli;
use money_parser::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config, args.to_parse_options())
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
