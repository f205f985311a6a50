//! Batch conversion records
//!
//! An `AmountRecord` is one `amount,currency` row of the input; a
//! `ConversionResult` is that row together with the outcome of parsing it.

use crate::types::{ParseError, ParsedAmount};

/// One row of batch input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRecord {
    /// The amount text exactly as read (after CSV field trimming)
    pub amount: String,

    /// Currency query, alpha-3 or numeric
    pub currency: String,
}

impl AmountRecord {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Outcome of converting one `AmountRecord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// The record that was converted
    pub record: AmountRecord,

    /// The parsed amount, or why it was rejected
    pub result: Result<ParsedAmount, ParseError>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
