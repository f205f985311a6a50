//! Currency metadata consumed by the amount parser
//!
//! `CurrencyMeta` is the resolved, owned view of one entry of a currency
//! reference table. `ParsedAmount` pairs a parsed minor-unit value with the
//! currency it was parsed for.

use serde::Serialize;

/// Largest number of fraction digits a currency may declare.
pub const MAX_FRACTION_DIGITS: u8 = 9;

/// Resolved metadata of a single currency
///
/// Owned by the caller for the duration of a parse call. The parser only
/// reads the symbol, the decimal separator and the fraction digits; the codes
/// are carried along for output and error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyMeta {
    code: String,
    numeric_code: String,
    symbol_grapheme: String,
    decimal_separator: char,
    fraction_digits: u8,
}

impl CurrencyMeta {
    /// Create currency metadata
    ///
    /// # Panics
    ///
    /// Panics if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`]. Currency
    /// metadata comes from trusted reference data, so an out of range value is
    /// a bug in that data rather than an input error.
    pub fn new(
        code: impl Into<String>,
        numeric_code: impl Into<String>,
        symbol_grapheme: impl Into<String>,
        decimal_separator: char,
        fraction_digits: u8,
    ) -> Self {
        assert!(
            fraction_digits <= MAX_FRACTION_DIGITS,
            "fraction digits out of range: {fraction_digits}"
        );

        Self {
            code: code.into(),
            numeric_code: numeric_code.into(),
            symbol_grapheme: symbol_grapheme.into(),
            decimal_separator,
            fraction_digits,
        }
    }

    /// Alpha-3 code, e.g. `EUR`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Three digit numeric code, e.g. `978`
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Display symbol; may be empty or span several characters
    pub fn symbol_grapheme(&self) -> &str {
        &self.symbol_grapheme
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Exact number of minor-unit digits, always in `0..=9`
    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }
}

/// Successfully parsed amount together with its currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAmount {
    /// Signed amount in the currency's smallest unit
    pub minor_units: i64,

    /// Currency the amount was parsed for
    pub currency: CurrencyMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let meta = CurrencyMeta::new("LYD", "434", "\u{0644}.\u{062f}", '.', 3);

        assert_eq!(meta.code(), "LYD");
        assert_eq!(meta.numeric_code(), "434");
        assert_eq!(meta.symbol_grapheme(), "ل.د");
        assert_eq!(meta.decimal_separator(), '.');
        assert_eq!(meta.fraction_digits(), 3);
    }

    #[test]
    fn test_max_fraction_digits_accepted() {
        let meta = CurrencyMeta::new("XXX", "999", "", '.', MAX_FRACTION_DIGITS);
        assert_eq!(meta.fraction_digits(), 9);
    }

    #[test]
    #[should_panic(expected = "fraction digits out of range")]
    fn test_fraction_digits_above_nine_panics() {
        let _ = CurrencyMeta::new("XXX", "999", "", '.', 10);
    }
}
