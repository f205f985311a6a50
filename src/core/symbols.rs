//! Currency symbol detection
//!
//! Two tests decide whether text "contains a currency symbol":
//!
//! 1. any character in the Unicode `Sc` (currency symbol) general category;
//! 2. any token from a list of symbols that are written with plain letters
//!    (`kr`, `Fr`, `лв`, ...) and so are invisible to the category test.
//!
//! The token test is a case-insensitive substring match, so single-letter
//! tokens such as `r` or `k` match any text containing those letters.

use std::borrow::Cow;

/// Inclusive code point ranges of the Unicode `Sc` general category
const CURRENCY_SYMBOL_RANGES: &[(u32, u32)] = &[
    (0x0024, 0x0024),
    (0x00A2, 0x00A5),
    (0x058F, 0x058F),
    (0x060B, 0x060B),
    (0x07FE, 0x07FF),
    (0x09F2, 0x09F3),
    (0x09FB, 0x09FB),
    (0x0AF1, 0x0AF1),
    (0x0BF9, 0x0BF9),
    (0x0E3F, 0x0E3F),
    (0x17DB, 0x17DB),
    (0x20A0, 0x20C0),
    (0xA838, 0xA838),
    (0xFDFC, 0xFDFC),
    (0xFE69, 0xFE69),
    (0xFF04, 0xFF04),
    (0xFFE0, 0xFFE1),
    (0xFFE5, 0xFFE6),
    (0x11FDD, 0x11FE0),
    (0x1E2FF, 0x1E2FF),
    (0x1ECB0, 0x1ECB0),
];

/// Plain-letter currency symbols, lowercase
#[rustfmt::skip]
pub const DEFAULT_SYMBOL_TOKENS: &[&str] = &[
    ".\u{062f}.\u{0625}", ".\u{062f}.\u{0628}", ".\u{062f}.\u{062a}", ".\u{062f}.\u{062c}",
    ".\u{062f}.\u{0639}", ".\u{062f}.\u{0643}", ".\u{062f}.\u{0644}", ".\u{062f}.\u{0645}",
    "a$", "ar", "b/.", "br", "bs", "bs.", "bs.s", "bz$", "c$", "cf", "cfa", "cg", "chf", "d",
    "db", "fc", "fdj", "fg", "fr", "frw", "ft", "g", "gs", "hk$", "j$", "k", "km", "kn", "kr",
    "ksh", "kz", "k\u{010d}", "l", "le", "lei", "ls", "lt", "mk", "mt", "mvr", "nfk", "nt$",
    "nu.", "oz t", "p", "p.", "q", "r", "r$", "rd$", "rm", "rp", "s$", "s/", "sdr", "sh", "sk",
    "sm", "so\u{2019}m", "t", "t$", "tsh", "tt$", "uf", "um", "ush", "vt", "z$", "zk",
    "z\u{0142}", "\u{0192}", "\u{0434}\u{0435}\u{043d}", "\u{0434}\u{0438}\u{043d}.",
    "\u{043b}\u{0432}", "\u{0441}\u{043e}\u{043c}", "\u{0564}\u{0580}.", "\u{10da}", "\u{5143}",
];

/// Whether `ch` belongs to the Unicode currency symbol category
pub fn is_currency_symbol(ch: char) -> bool {
    let cp = ch as u32;
    CURRENCY_SYMBOL_RANGES
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Extensible list of plain-letter currency symbol tokens
///
/// Tokens are stored lowercase and matched against the lowercased input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTokens {
    tokens: Vec<Cow<'static, str>>,
}

impl SymbolTokens {
    /// An empty list; only the Unicode category test applies
    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Replace the default list entirely
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::empty();
        list.extend(tokens);
        list
    }

    /// Add tokens to the list; empty tokens are ignored
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            let token = token.into().to_lowercase();
            if !token.is_empty() && !self.tokens.iter().any(|t| *t == token) {
                self.tokens.push(Cow::Owned(token));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `text` contains any listed token, ignoring case
    pub fn contains_token(&self, text: &str) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        self.tokens.iter().any(|token| lowered.contains(token.as_ref()))
    }

    /// Whether `text` contains a currency symbol by either test
    pub fn contains_symbol(&self, text: &str) -> bool {
        text.chars().any(is_currency_symbol) || self.contains_token(text)
    }
}

impl Default for SymbolTokens {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_SYMBOL_TOKENS
                .iter()
                .map(|&token| Cow::Borrowed(token))
                .collect(),
        }
    }
}
