//! Money Parser Library
//! # Overview
//!
//! Converts human-written money amounts such as `"1,455.00"`, `"€1,455.00"` or
//! `"-2,28"` into a signed integer count of the currency's minor units, given
//! an ISO 4217 currency code (`"EUR"`) or numeric code (`"978"`).
//!
//! ```
//! use money_parser::{parse_amount, ParseOptions};
//!
//! assert_eq!(parse_amount("1,455.00", "EUR", ParseOptions::default()), Ok(145500));
//! assert_eq!(parse_amount("2,28", "CLF", ParseOptions::default()), Ok(22800));
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Data types (CurrencyMeta, ParseOptions, errors, batch records)
//! - [`core`] - Parsing components:
//!   - [`core::table`] - Built-in ISO 4217 reference data
//!   - [`core::resolver`] - Currency query resolution
//!   - [`core::symbols`] - Currency symbol detection
//!   - [`core::parser`] - Amount parsing
//!   - [`core::format`] - Rendering minor units as text
//!   - [`core::batch_processor`] - Parallel, order-preserving batch conversion
//! - [`io`] - CSV input and result output
//! - [`strategy`] - Sync and async batch pipelines
//! - [`cli`] - CLI arguments parsing
//!
//! # Separators
//!
//! Each currency carries its own decimal separator (`.` for EUR, `,` for CLF).
//! The first occurrence of it starts the fraction; every other `.`, `,`,
//! space or no-break space is grouping and is skipped. Currencies without
//! minor units treat every separator as grouping.

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{
    format_minor_units, parse_amount, resolve_currency, AmountParser, CurrencyLookup,
    CurrencyResolver, Iso4217Table, Parser, SymbolTokens,
};
pub use types::{
    AmountRecord, ConversionResult, CurrencyError, CurrencyMeta, ParseError, ParseOptions,
    ParsedAmount, ProcessingError,
};
