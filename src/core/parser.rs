//! Amount parser
//!
//! Converts locale formatted amount text into an exact number of minor units.
//!
//! The pipeline runs in a fixed order; every step assumes the previous ones
//! succeeded:
//!
//! 1. trim, replace no-break spaces with plain spaces
//! 2. reject empty input
//! 3. reject currency symbols when they are not allowed
//! 4. reject a leading sign when signs are not allowed
//! 5. remove the resolved currency's symbol (symbols allowed)
//! 6. consume a leading sign (signs allowed)
//! 7. reject input with nothing left
//! 8. scan characters into integer and fraction digit buffers
//! 9. reject input without digits
//! 10. pad or reject the fraction against the currency's fraction digits
//! 11. assemble `integer * 10^fraction_digits + fraction` and apply the sign
//!
//! No floating point value is ever produced, and arithmetic is checked.

use crate::core::resolver::CurrencyResolver;
use crate::core::symbols::SymbolTokens;
use crate::core::traits::Parser;
use crate::types::{CurrencyMeta, ParseError, ParseOptions, ParsedAmount};

const NBSP: char = '\u{00A0}';
const SPACE: char = ' ';

const MINUS_SIGN: char = '−';
const PLUS_SIGN: char = '+';
const HYPHEN_SIGN: char = '-';

/// Powers of ten for every valid fraction digit count
const POW10: [u64; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The default `Parser` implementation
///
/// Holds the options, the resolver used for currency queries and the token
/// list used for currency symbol detection. It holds no per-call state, so a
/// single instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use money_parser::{AmountParser, ParseOptions, Parser};
///
/// let parser = AmountParser::default();
/// assert_eq!(parser.parse("1,455.00", "EUR").unwrap(), 145500);
/// assert_eq!(parser.parse("-1,455.00", "EUR").unwrap(), -145500);
///
/// let parser = AmountParser::new(ParseOptions {
///     allow_currency_symbol: true,
///     ..Default::default()
/// });
/// assert_eq!(parser.parse("€1,455.00", "EUR").unwrap(), 145500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AmountParser {
    options: ParseOptions,
    resolver: CurrencyResolver,
    symbols: SymbolTokens,
}

impl AmountParser {
    /// Parser with the given options, the built-in ISO 4217 table and the
    /// default symbol tokens
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            resolver: CurrencyResolver::default(),
            symbols: SymbolTokens::default(),
        }
    }

    /// Use a different currency resolver
    pub fn with_resolver(mut self, resolver: CurrencyResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use a different list of plain-letter symbol tokens
    pub fn with_symbol_tokens(mut self, symbols: SymbolTokens) -> Self {
        self.symbols = symbols;
        self
    }

    /// Resolve `currency` and parse `input`, keeping the resolved metadata
    pub fn parse_amount_detailed(
        &self,
        input: &str,
        currency: &str,
    ) -> Result<ParsedAmount, ParseError> {
        let meta = self.resolver.resolve(currency)?;
        let minor_units = self.parse_with_meta(input, &meta)?;

        Ok(ParsedAmount {
            minor_units,
            currency: meta,
        })
    }

    /// Parse `input` for an already resolved currency
    ///
    /// # Errors
    ///
    /// Returns exactly one [`ParseError`] describing the first rule the input
    /// breaks, in pipeline order.
    pub fn parse_with_meta(&self, input: &str, meta: &CurrencyMeta) -> Result<i64, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if !self.options.allow_currency_symbol && self.symbols.contains_symbol(trimmed) {
            return Err(ParseError::CurrencySymbolNotAllowed {
                input: trimmed.to_string(),
            });
        }

        if !self.options.accept_signs && starts_with_sign(trimmed) {
            return Err(ParseError::SignsNotAllowed {
                input: trimmed.to_string(),
            });
        }

        let normalized = trimmed.replace(NBSP, " ");
        let mut rest = normalized.trim();

        let stripped;
        if self.options.allow_currency_symbol {
            let symbol = meta.symbol_grapheme();
            if !symbol.is_empty() {
                let Some(idx) = rest.find(symbol) else {
                    return Err(ParseError::InvalidCurrencySymbol {
                        code: meta.code().to_string(),
                        symbol: symbol.to_string(),
                    });
                };
                stripped = format!("{}{}", &rest[..idx], &rest[idx + symbol.len()..]);
                rest = stripped.trim();
            }
        }

        let mut negative = false;
        if self.options.accept_signs {
            if let Some(first) = rest.chars().next() {
                match first {
                    HYPHEN_SIGN | MINUS_SIGN => {
                        negative = true;
                        rest = rest[first.len_utf8()..].trim();
                    }
                    PLUS_SIGN => {
                        rest = rest[first.len_utf8()..].trim();
                    }
                    _ => {}
                }
            }
        }

        if rest.is_empty() {
            return Err(ParseError::NoDigits);
        }

        let digits = scan_digits(rest, meta, self.options.strict_grouping)?;
        digits
            .assemble(meta.fraction_digits())
            .and_then(|magnitude| apply_sign(magnitude, negative))
            .ok_or_else(|| ParseError::Overflow {
                input: trimmed.to_string(),
            })
    }
}

impl Parser for AmountParser {
    fn parse(&self, input: &str, currency: &str) -> Result<i64, ParseError> {
        let meta = self.resolver.resolve(currency)?;
        self.parse_with_meta(input, &meta)
    }
}

/// Parse `input` for `currency_query` with the built-in currency table
///
/// This is the primary entry point: it resolves the currency, then parses.
///
/// ```
/// use money_parser::{parse_amount, ParseOptions};
///
/// assert_eq!(parse_amount("2,28", "CLF", ParseOptions::default()).unwrap(), 22800);
/// assert_eq!(parse_amount("100", "JPY", ParseOptions::default()).unwrap(), 100);
/// ```
pub fn parse_amount(
    input: &str,
    currency_query: &str,
    options: ParseOptions,
) -> Result<i64, ParseError> {
    AmountParser::new(options).parse(input, currency_query)
}

fn starts_with_sign(s: &str) -> bool {
    matches!(
        s.chars().next(),
        Some(HYPHEN_SIGN | PLUS_SIGN | MINUS_SIGN)
    )
}

/// ASCII digits collected on either side of the decimal separator
#[derive(Debug, Default)]
struct DigitBuffers {
    integer: Vec<u8>,
    fraction: Vec<u8>,
}

impl DigitBuffers {
    /// `integer * 10^fraction_digits + fraction`, or `None` on overflow
    ///
    /// The fraction must already be padded to `fraction_digits`.
    fn assemble(&self, fraction_digits: u8) -> Option<u64> {
        let integer = digits_value(&self.integer)?;
        let fraction = digits_value(&self.fraction)?;

        integer
            .checked_mul(POW10[usize::from(fraction_digits)])?
            .checked_add(fraction)
    }
}

fn digits_value(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}

/// Signed value of an unsigned magnitude; the negative range reaches `i64::MIN`
fn apply_sign(magnitude: u64, negative: bool) -> Option<i64> {
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Single left to right pass over the sign-free, symbol-free text
///
/// The first decimal separator switches from integer to fraction digits,
/// but only for currencies with fraction digits. Any later occurrence of it
/// is handled like a grouping separator.
fn scan_digits(
    text: &str,
    meta: &CurrencyMeta,
    strict_grouping: bool,
) -> Result<DigitBuffers, ParseError> {
    let decimal = meta.decimal_separator();
    let fraction_digits = usize::from(meta.fraction_digits());

    let mut buffers = DigitBuffers::default();
    let mut seen_decimal = false;
    let mut last_group: Option<char> = None;

    for ch in text.chars() {
        match ch {
            '0'..='9' => {
                let digit = ch as u8;
                if seen_decimal {
                    buffers.fraction.push(digit);
                } else {
                    buffers.integer.push(digit);
                }
            }
            c if c == decimal && !seen_decimal && fraction_digits > 0 => {
                seen_decimal = true;
            }
            SPACE | ',' | '.' => {
                if strict_grouping {
                    let previous = last_group.replace(ch);
                    match previous {
                        Some(previous) if !seen_decimal && previous != ch => {
                            return Err(ParseError::MixedGrouping {
                                previous,
                                found: ch,
                            });
                        }
                        _ => {}
                    }
                }
            }
            other => return Err(ParseError::BadChar { ch: other }),
        }
    }

    if buffers.integer.is_empty() && buffers.fraction.is_empty() {
        return Err(ParseError::NoDigits);
    }

    if buffers.fraction.len() > fraction_digits {
        return Err(ParseError::TooManyDecimals {
            allowed: meta.fraction_digits(),
            found: buffers.fraction.len(),
        });
    }
    buffers.fraction.resize(fraction_digits, b'0');

    Ok(buffers)
}
