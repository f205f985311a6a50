//! CSV format handling for amount records and conversion output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Result serialization through `ResultWriter`
//!
//! Nothing here opens files; callers hand in readers and writers.

use crate::core::format::format_minor_units;
use crate::types::{AmountRecord, ConversionResult, ProcessingError};
use csv::Writer;
use serde::Deserialize;
use std::io::Write;

/// Column names of the output CSV, in order
pub const OUTPUT_HEADER: [&str; 5] = ["amount", "currency", "minor_units", "normalized", "error"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: amount, currency.
/// Empty fields are kept; the parser decides what they mean.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub amount: String,
    pub currency: String,
}

impl From<CsvRecord> for AmountRecord {
    fn from(csv_record: CsvRecord) -> Self {
        AmountRecord {
            amount: csv_record.amount,
            currency: csv_record.currency,
        }
    }
}

/// Render one conversion result as an output row
///
/// Successful rows carry the resolved alpha-3 code, the minor units and the
/// normalized amount. Rejected rows carry the trimmed currency query and the
/// error text.
pub fn result_row(converted: &ConversionResult) -> [String; 5] {
    let amount = converted.record.amount.clone();

    match &converted.result {
        Ok(parsed) => [
            amount,
            parsed.currency.code().to_string(),
            parsed.minor_units.to_string(),
            format_minor_units(parsed.minor_units, &parsed.currency),
            String::new(),
        ],
        Err(e) => [
            amount,
            converted.record.currency.trim().to_string(),
            String::new(),
            String::new(),
            e.to_string(),
        ],
    }
}

/// Streaming writer for conversion results
///
/// Writes the header on creation, then one row per result in call order.
pub struct ResultWriter<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl<W: Write> ResultWriter<W> {
    /// Create a writer and emit the header row
    pub fn new(output: W) -> Result<Self, ProcessingError> {
        let mut writer = Writer::from_writer(output);
        writer.write_record(OUTPUT_HEADER)?;

        Ok(Self { writer, rows: 0 })
    }

    /// Write one result row
    pub fn write(&mut self, converted: &ConversionResult) -> Result<(), ProcessingError> {
        self.writer.write_record(result_row(converted))?;
        self.rows += 1;
        Ok(())
    }

    /// Write every result of a batch, in order
    pub fn write_all(&mut self, results: &[ConversionResult]) -> Result<(), ProcessingError> {
        results.iter().try_for_each(|converted| self.write(converted))
    }

    /// Number of data rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<(), ProcessingError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversion::convert_record;
    use crate::core::parser::AmountParser;
    use crate::types::ParseOptions;
    use rstest::rstest;

    fn convert(amount: &str, currency: &str, options: ParseOptions) -> ConversionResult {
        convert_record(
            &AmountParser::new(options),
            AmountRecord::new(amount, currency),
        )
    }

    #[test]
    fn test_csv_record_into_amount_record() {
        let csv_record = CsvRecord {
            amount: "1,455.00".to_string(),
            currency: "EUR".to_string(),
        };

        assert_eq!(
            AmountRecord::from(csv_record),
            AmountRecord::new("1,455.00", "EUR")
        );
    }

    #[rstest]
    #[case::success("1,455.00", "eur", ["1,455.00", "EUR", "145500", "1455.00", ""])]
    #[case::numeric_query("100", "392", ["100", "JPY", "100", "100", ""])]
    #[case::clf("2,28", "CLF", ["2,28", "CLF", "22800", "2,2800", ""])]
    #[case::negative("-0.5", "USD", ["-0.5", "USD", "-50", "-0.50", ""])]
    #[case::unknown_currency("1", " ZZZ ", ["1", "ZZZ", "", "", "invalid ISO currency code 'ZZZ'"])]
    #[case::bad_char("12a", "EUR", ["12a", "EUR", "", "", "invalid character 'a'"])]
    #[case::empty("", "EUR", ["", "EUR", "", "", "empty input"])]
    fn test_result_row(#[case] amount: &str, #[case] currency: &str, #[case] expected: [&str; 5]) {
        let row = result_row(&convert(amount, currency, ParseOptions::default()));
        assert_eq!(row, expected.map(String::from));
    }

    #[test]
    fn test_result_writer_output() {
        let mut output = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut output).unwrap();
            writer
                .write_all(&[
                    convert("1,455.00", "EUR", ParseOptions::default()),
                    convert("10 000,000.00", "USD", ParseOptions {
                        strict_grouping: true,
                        ..Default::default()
                    }),
                ])
                .unwrap();
            assert_eq!(writer.rows(), 2);
            writer.flush().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "amount,currency,minor_units,normalized,error\n\
             \"1,455.00\",EUR,145500,1455.00,\n\
             \"10 000,000.00\",USD,,,\"mixed grouping separators: expected ' ' but found ','\"\n"
        );
    }

    #[test]
    fn test_result_writer_header_only() {
        let mut output = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut output).unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "amount,currency,minor_units,normalized,error\n"
        );
    }
}
