//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It streams
//! records from `SyncReader`, converts each one with an `AmountParser`, and
//! writes each result as soon as it is produced, so memory use stays constant.

use crate::core::conversion::convert_record;
use crate::core::AmountParser;
use crate::io::csv_format::ResultWriter;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessingStrategy, RunSummary};
use crate::types::{ParseOptions, ProcessingError};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use money_parser::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use money_parser::ParseOptions;
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(ParseOptions::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("amounts.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    options: ParseOptions,
}

impl SyncProcessingStrategy {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ProcessingError> {
        let parser = AmountParser::new(self.options);
        let reader = SyncReader::new(input_path)?;
        let mut writer = ResultWriter::new(output)?;
        let mut summary = RunSummary::default();

        for record in reader {
            match record {
                Ok(record) => {
                    let converted = convert_record(&parser, record);
                    summary.record(&converted);
                    writer.write(&converted)?;
                }
                Err(ProcessingError::Csv { line, message }) => {
                    tracing::warn!(?line, error = %message, "skipping malformed row");
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        writer.flush()?;
        summary.log("sync");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(strategy: SyncProcessingStrategy, content: &str) -> String {
        let file = create_temp_csv(content);
        let mut output = Vec::new();
        strategy.process(file.path(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sync_strategy_converts_amounts() {
        let output = run(
            SyncProcessingStrategy::default(),
            "amount,currency\n\"1,455.00\",EUR\n100,JPY\n",
        );

        assert_eq!(
            output,
            "amount,currency,minor_units,normalized,error\n\
             \"1,455.00\",EUR,145500,1455.00,\n\
             100,JPY,100,100,\n"
        );
    }

    #[test]
    fn test_sync_strategy_applies_options() {
        let strategy = SyncProcessingStrategy::new(ParseOptions {
            allow_currency_symbol: true,
            ..Default::default()
        });
        let output = run(strategy, "amount,currency\n\"€1,455.00\",EUR\n\"€1,455.00\",USD\n");

        assert_eq!(
            output,
            "amount,currency,minor_units,normalized,error\n\
             \"€1,455.00\",EUR,145500,1455.00,\n\
             \"€1,455.00\",USD,,,input does not contain the USD currency symbol '$'\n"
        );
    }

    #[test]
    fn test_sync_strategy_skips_malformed_rows() {
        let output = run(
            SyncProcessingStrategy::default(),
            "amount,currency\n5\n7,EUR\n",
        );

        assert_eq!(
            output,
            "amount,currency,minor_units,normalized,error\n7,EUR,700,7.00,\n"
        );
    }

    #[test]
    fn test_sync_strategy_fails_on_unreadable_input() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(dir.path(), &mut output);
        assert!(matches!(result, Err(ProcessingError::Io { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(ProcessingError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
