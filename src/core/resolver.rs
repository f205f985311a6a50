//! Currency query resolution
//!
//! Turns a caller supplied currency query into `CurrencyMeta`. A query is
//! either three ASCII letters (alpha-3, case-insensitive) or a non-empty run
//! of ASCII digits (numeric code). Anything else is rejected before any
//! lookup happens.

use crate::core::table::Iso4217Table;
use crate::core::traits::CurrencyLookup;
use crate::types::{CurrencyError, CurrencyMeta};
use std::fmt;
use std::sync::Arc;

/// Shape of a trimmed currency query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Alpha3,
    Numeric,
}

/// Classify a trimmed query, or `None` if it has neither shape
pub fn classify_query(query: &str) -> Option<QueryKind> {
    if is_alpha3(query) {
        Some(QueryKind::Alpha3)
    } else if is_numeric(query) {
        Some(QueryKind::Numeric)
    } else {
        None
    }
}

fn is_alpha3(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves currency queries against a `CurrencyLookup`
///
/// Cheap to clone; clones share the same lookup.
#[derive(Clone)]
pub struct CurrencyResolver {
    lookup: Arc<dyn CurrencyLookup + Send + Sync>,
}

impl CurrencyResolver {
    /// Resolver backed by a custom table
    pub fn new(lookup: Arc<dyn CurrencyLookup + Send + Sync>) -> Self {
        Self { lookup }
    }

    /// Resolve `query` to currency metadata
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::InvalidIsoCode`] for an empty query or an unknown
    ///   alpha-3 code
    /// - [`CurrencyError::InvalidNumericCode`] for an unknown numeric code
    /// - [`CurrencyError::InvalidCurrencyQuery`] for any other shape
    pub fn resolve(&self, query: &str) -> Result<CurrencyMeta, CurrencyError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CurrencyError::InvalidIsoCode {
                code: String::new(),
            });
        }

        match classify_query(query) {
            Some(QueryKind::Alpha3) => {
                let code = query.to_ascii_uppercase();
                self.lookup
                    .by_alpha_code(&code)
                    .ok_or(CurrencyError::InvalidIsoCode { code })
            }
            Some(QueryKind::Numeric) => {
                self.lookup
                    .by_numeric_code(query)
                    .ok_or_else(|| CurrencyError::InvalidNumericCode {
                        code: query.to_string(),
                    })
            }
            None => Err(CurrencyError::InvalidCurrencyQuery {
                query: query.to_string(),
            }),
        }
    }
}

impl Default for CurrencyResolver {
    fn default() -> Self {
        Self::new(Arc::new(Iso4217Table::global()))
    }
}

impl fmt::Debug for CurrencyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyResolver").finish_non_exhaustive()
    }
}

/// Resolve `query` against the built-in ISO 4217 table
pub fn resolve_currency(query: &str) -> Result<CurrencyMeta, CurrencyError> {
    CurrencyResolver::default().resolve(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::alpha("EUR", "EUR")]
    #[case::lowercase_alpha("eur", "EUR")]
    #[case::mixed_case_alpha("uSd", "USD")]
    #[case::padded_alpha("  JPY \t", "JPY")]
    #[case::numeric("978", "EUR")]
    #[case::padded_numeric(" 975 ", "BGN")]
    #[case::leading_zero_numeric("036", "AUD")]
    fn test_resolve_currency(#[case] query: &str, #[case] expected_code: &str) {
        let meta = resolve_currency(query).unwrap();
        assert_eq!(meta.code(), expected_code);
    }

    #[rstest]
    #[case::empty("", CurrencyError::InvalidIsoCode { code: "".to_string() })]
    #[case::whitespace("   ", CurrencyError::InvalidIsoCode { code: "".to_string() })]
    #[case::unknown_alpha("zzz", CurrencyError::InvalidIsoCode { code: "ZZZ".to_string() })]
    #[case::unknown_numeric("000", CurrencyError::InvalidNumericCode { code: "000".to_string() })]
    #[case::unpadded_numeric("36", CurrencyError::InvalidNumericCode { code: "36".to_string() })]
    #[case::two_letters("EU", CurrencyError::InvalidCurrencyQuery { query: "EU".to_string() })]
    #[case::four_letters("EURO", CurrencyError::InvalidCurrencyQuery { query: "EURO".to_string() })]
    #[case::mixed("EU1", CurrencyError::InvalidCurrencyQuery { query: "EU1".to_string() })]
    #[case::symbol("€", CurrencyError::InvalidCurrencyQuery { query: "€".to_string() })]
    #[case::non_ascii_letters("ЕВР", CurrencyError::InvalidCurrencyQuery { query: "ЕВР".to_string() })]
    fn test_resolve_currency_errors(#[case] query: &str, #[case] expected: CurrencyError) {
        assert_eq!(resolve_currency(query).unwrap_err(), expected);
    }

    #[rstest]
    #[case("ABC", Some(QueryKind::Alpha3))]
    #[case("abc", Some(QueryKind::Alpha3))]
    #[case("1", Some(QueryKind::Numeric))]
    #[case("000978", Some(QueryKind::Numeric))]
    #[case("AB", None)]
    #[case("12A", None)]
    #[case("", None)]
    fn test_classify_query(#[case] query: &str, #[case] expected: Option<QueryKind>) {
        assert_eq!(classify_query(query), expected);
    }

    struct SingleCurrency;

    impl CurrencyLookup for SingleCurrency {
        fn by_alpha_code(&self, code: &str) -> Option<CurrencyMeta> {
            (code == "XTS").then(|| CurrencyMeta::new("XTS", "963", "T", ',', 3))
        }

        fn by_numeric_code(&self, code: &str) -> Option<CurrencyMeta> {
            (code == "963").then(|| CurrencyMeta::new("XTS", "963", "T", ',', 3))
        }
    }

    #[test]
    fn test_custom_lookup() {
        let resolver = CurrencyResolver::new(Arc::new(SingleCurrency));

        assert_eq!(resolver.resolve("xts").unwrap().fraction_digits(), 3);
        assert_eq!(resolver.resolve("963").unwrap().code(), "XTS");
        assert!(matches!(
            resolver.resolve("EUR"),
            Err(CurrencyError::InvalidIsoCode { .. })
        ));
    }

    #[test]
    fn test_resolved_meta_is_independent_copy() {
        let first = resolve_currency("EUR").unwrap();
        let second = resolve_currency("978").unwrap();
        assert_eq!(first, second);
    }
}
