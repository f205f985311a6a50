//! Core parsing module
//!
//! This module contains the currency resolution and amount parsing components:
//! - `traits` - Seams for currency reference data and parser implementations
//! - `table` - Built-in ISO 4217 reference table
//! - `resolver` - Currency query classification and lookup
//! - `symbols` - Currency symbol detection
//! - `parser` - The amount parsing pipeline
//! - `format` - Rendering minor units back into amount text
//! - `conversion` / `batch_processor` - Record conversion for the batch pipeline

pub mod batch_processor;
pub mod conversion;
pub mod format;
pub mod parser;
pub mod resolver;
pub mod symbols;
pub mod table;
pub mod traits;

pub use batch_processor::BatchProcessor;
pub use conversion::convert_record;
pub use format::format_minor_units;
pub use parser::{parse_amount, AmountParser};
pub use resolver::{classify_query, resolve_currency, CurrencyResolver, QueryKind};
pub use symbols::{is_currency_symbol, SymbolTokens, DEFAULT_SYMBOL_TOKENS};
pub use table::{CurrencyRecord, Iso4217Table, ISO_4217_RECORDS};
pub use traits::{CurrencyLookup, Parser};
