//! Behavioral switches for the amount parser

/// Options controlling what the parser accepts
///
/// A plain value type: build it with struct literal syntax and
/// `..Default::default()` for the switches you don't care about.
///
/// ```
/// use money_parser::ParseOptions;
///
/// let options = ParseOptions {
///     allow_currency_symbol: true,
///     ..Default::default()
/// };
/// assert!(options.accept_signs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Accept a currency symbol in the input. When enabled, the symbol of the
    /// resolved currency must be present.
    ///
    /// Default: `false`
    pub allow_currency_symbol: bool,

    /// Require every grouping separator before the decimal point to be the
    /// same character.
    ///
    /// Default: `false`
    pub strict_grouping: bool,

    /// Accept a leading `+`, `-` or `−`.
    ///
    /// Default: `true`
    pub accept_signs: bool,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            allow_currency_symbol: false,
            strict_grouping: false,
            accept_signs: true,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
