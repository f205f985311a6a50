//! Error types for the money parser
//!
//! This module defines every error that can occur while resolving a currency,
//! parsing an amount, or running a batch conversion.
//!
//! # Error Categories
//!
//! - **Currency Errors**: the currency query is malformed or unknown
//! - **Parse Errors**: the amount text is rejected for this currency and options
//! - **Processing Errors**: fatal I/O or CSV failures in the batch pipeline
//!
//! Currency and parse errors reject one input and never affect the process;
//! processing errors abort a batch run.

use thiserror::Error;

/// Failure to resolve a currency query to reference data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The query is neither three ASCII letters nor all ASCII digits
    #[error("invalid currency query '{query}'")]
    InvalidCurrencyQuery {
        /// The trimmed query
        query: String,
    },

    /// Alpha-3 shaped query that is not in the reference table
    ///
    /// Also returned for an empty query.
    #[error("invalid ISO currency code '{code}'")]
    InvalidIsoCode {
        /// The code that was looked up
        code: String,
    },

    /// Numeric shaped query that is not in the reference table
    #[error("invalid numeric currency code '{code}'")]
    InvalidNumericCode {
        /// The code that was looked up
        code: String,
    },
}

/// Rejection of an amount string
///
/// Every variant is terminal for the parse call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is empty after trimming whitespace
    #[error("empty input")]
    EmptyInput,

    /// The currency query could not be resolved
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// A sign was found while signs are disabled
    #[error("signs not allowed in input '{input}'")]
    SignsNotAllowed {
        /// The trimmed input
        input: String,
    },

    /// Something that looks like a currency symbol was found while symbols
    /// are disabled
    #[error("currency symbol not allowed in input '{input}'")]
    CurrencySymbolNotAllowed {
        /// The trimmed input
        input: String,
    },

    /// Symbols are enabled but the resolved currency's symbol is missing
    #[error("input does not contain the {code} currency symbol '{symbol}'")]
    InvalidCurrencySymbol {
        /// Alpha-3 code of the resolved currency
        code: String,
        /// The symbol that was expected
        symbol: String,
    },

    /// Two different grouping separators before the decimal point while
    /// strict grouping is enabled
    #[error("mixed grouping separators: expected {previous:?} but found {found:?}")]
    MixedGrouping {
        /// Grouping separator seen before
        previous: char,
        /// The differing separator
        found: char,
    },

    /// More fractional digits than the currency allows
    #[error("too many fractional digits ({found} > {allowed})")]
    TooManyDecimals {
        /// Fraction digits of the currency
        allowed: u8,
        /// Fraction digits found in the input
        found: usize,
    },

    /// No digit remained after removing the symbol and the sign
    #[error("no digits")]
    NoDigits,

    /// A character outside the digit, separator, sign and symbol classes
    #[error("invalid character {ch:?}")]
    BadChar {
        /// The offending character
        ch: char,
    },

    /// The amount in minor units does not fit in 64 bits
    #[error("amount out of range in input '{input}'")]
    Overflow {
        /// The trimmed input
        input: String,
    },
}

/// Fatal error of a batch conversion run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV stream itself is unusable (not a single malformed row)
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },

    /// The async runtime could not be created or a worker failed
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for ProcessingError {
    fn from(error: std::io::Error) -> Self {
        ProcessingError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ProcessingError {
    /// Read failures become [`ProcessingError::Io`]; everything else is a
    /// row-level [`ProcessingError::Csv`]
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return ProcessingError::Io {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        ProcessingError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl ProcessingError {
    /// Create an error for a file that could not be opened
    ///
    /// `NotFound` maps to [`ProcessingError::FileNotFound`], everything else
    /// to [`ProcessingError::Io`].
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            ProcessingError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ProcessingError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl std::fmt::Display) -> Self {
        ProcessingError::Runtime {
            message: message.to_string(),
        }
    }
}
