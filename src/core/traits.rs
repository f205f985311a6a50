//! Core traits for currency lookup and amount parsing
//!
//! These are the seams between the parser and its collaborators: the
//! currency reference data sits behind `CurrencyLookup`, and callers that
//! want to swap the parsing implementation (or mock it) depend on `Parser`.

use crate::types::{CurrencyMeta, ParseError};

/// Read-only currency reference data
///
/// Implementations must be immutable after construction; the resolver and
/// the parser share them freely across threads.
pub trait CurrencyLookup {
    /// Find a currency by its alpha-3 code
    ///
    /// The resolver always passes the code in ASCII uppercase.
    fn by_alpha_code(&self, code: &str) -> Option<CurrencyMeta>;

    /// Find a currency by its numeric code text, e.g. `"978"`
    fn by_numeric_code(&self, code: &str) -> Option<CurrencyMeta>;
}

/// Turns amount text into minor units for a currency query
pub trait Parser {
    /// Parse `input` for the currency identified by `currency`
    /// (alpha-3 or numeric code)
    fn parse(&self, input: &str, currency: &str) -> Result<i64, ParseError>;
}
