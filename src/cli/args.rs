use crate::strategy::BatchConfig;
use crate::types::ParseOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert locale formatted money amounts to integer minor units
#[derive(Parser, Debug)]
#[command(name = "money-parser")]
#[command(about = "Convert locale formatted money amounts to integer minor units", long_about = None)]
pub struct CliArgs {
    /// Input CSV file with `amount,currency` columns
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for streaming or 'async' for parallel batches"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Worker threads and chunks per batch (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Accept currency symbols in amounts
    #[arg(long = "allow-currency-symbol")]
    pub allow_currency_symbol: bool,

    /// Reject mixed grouping separators
    #[arg(long = "strict-grouping")]
    pub strict_grouping: bool,

    /// Reject leading plus and minus signs
    #[arg(long = "reject-signs")]
    pub reject_signs: bool,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values use the defaults; zero values are replaced by
    /// `BatchConfig::new` with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create ParseOptions from the parsing flags
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow_currency_symbol: self.allow_currency_symbol,
            strict_grouping: self.strict_grouping,
            accept_signs: !self.reject_signs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000), None)]
    #[case::max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], None, Some(8))]
    #[case::no_options(&["program", "input.csv"], None, None)]
    #[case::all_options(
        &["program", "--strategy", "async", "--batch-size", "2000", "--max-concurrent", "8", "input.csv"],
        Some(2000),
        Some(8)
    )]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] max_concurrent: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.max_concurrent_batches, max_concurrent);
    }

    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    #[case::zero_max_concurrent(&["program", "--max-concurrent", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[rstest]
    #[case::defaults(&["program", "input.csv"], ParseOptions::default())]
    #[case::symbols(
        &["program", "--allow-currency-symbol", "input.csv"],
        ParseOptions { allow_currency_symbol: true, ..Default::default() }
    )]
    #[case::strict(
        &["program", "--strict-grouping", "input.csv"],
        ParseOptions { strict_grouping: true, ..Default::default() }
    )]
    #[case::reject_signs(
        &["program", "--reject-signs", "input.csv"],
        ParseOptions { accept_signs: false, ..Default::default() }
    )]
    #[case::all_flags(
        &["program", "--allow-currency-symbol", "--strict-grouping", "--reject-signs", "input.csv"],
        ParseOptions { allow_currency_symbol: true, strict_grouping: true, accept_signs: false }
    )]
    fn test_parse_options_conversion(#[case] args: &[&str], #[case] expected: ParseOptions) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_parse_options(), expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::invalid_batch_size(&["program", "--batch-size", "many", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
