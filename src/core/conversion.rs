//! Conversion of batch records
//!
//! Bridges the batch pipeline and the parser: one `AmountRecord` in, one
//! `ConversionResult` out. Rejected amounts are results, not failures.

use crate::core::parser::AmountParser;
use crate::types::{AmountRecord, ConversionResult};

/// Parse one record with `parser`
pub fn convert_record(parser: &AmountParser, record: AmountRecord) -> ConversionResult {
    let result = parser.parse_amount_detailed(&record.amount, &record.currency);

    if let Err(e) = &result {
        tracing::debug!(
            amount = %record.amount,
            currency = %record.currency,
            error = %e,
            "amount rejected"
        );
    }

    ConversionResult { record, result }
}
