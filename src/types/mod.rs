//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `currency`: Resolved currency metadata and parsed amounts
//! - `options`: Parser behavioral switches
//! - `record`: Batch conversion input rows and results
//! - `error`: Error types for resolution, parsing and batch processing

pub mod currency;
pub mod error;
pub mod options;
pub mod record;

pub use currency::{CurrencyMeta, ParsedAmount, MAX_FRACTION_DIGITS};
pub use error::{CurrencyError, ParseError, ProcessingError};
pub use options::ParseOptions;
pub use record::{AmountRecord, ConversionResult};
