//! Rendering minor units back into amount text
//!
//! The output has no grouping separators and uses the currency's decimal
//! separator, so it always parses back to the same value.

use crate::types::CurrencyMeta;
use rust_decimal::Decimal;

/// Render `minor_units` as a plain decimal amount for `meta`
///
/// ```
/// use money_parser::{format_minor_units, resolve_currency};
///
/// let eur = resolve_currency("EUR").unwrap();
/// assert_eq!(format_minor_units(-145500, &eur), "-1455.00");
///
/// let clf = resolve_currency("CLF").unwrap();
/// assert_eq!(format_minor_units(22800, &clf), "2,2800");
/// ```
pub fn format_minor_units(minor_units: i64, meta: &CurrencyMeta) -> String {
    let amount = Decimal::new(minor_units, u32::from(meta.fraction_digits()));
    let text = amount.to_string();

    match meta.decimal_separator() {
        '.' => text,
        separator => text.replacen('.', &separator.to_string(), 1),
    }
}
