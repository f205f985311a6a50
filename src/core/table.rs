//! Built-in ISO 4217 reference table
//!
//! The table is a constant slice of records, indexed by alpha-3 and numeric
//! code on first use. It is never mutated afterwards.

use crate::core::traits::CurrencyLookup;
use crate::types::{CurrencyMeta, MAX_FRACTION_DIGITS};
use std::collections::HashMap;
use std::sync::LazyLock;

/// One static table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub code: &'static str,
    pub numeric_code: &'static str,
    pub grapheme: &'static str,
    pub decimal_separator: char,
    pub fraction_digits: u8,
}

impl CurrencyRecord {
    const fn new(
        code: &'static str,
        numeric_code: &'static str,
        grapheme: &'static str,
        decimal_separator: char,
        fraction_digits: u8,
    ) -> Self {
        Self {
            code,
            numeric_code,
            grapheme,
            decimal_separator,
            fraction_digits,
        }
    }

    pub fn to_meta(&self) -> CurrencyMeta {
        CurrencyMeta::new(
            self.code,
            self.numeric_code,
            self.grapheme,
            self.decimal_separator,
            self.fraction_digits,
        )
    }
}

const fn c(
    code: &'static str,
    numeric_code: &'static str,
    grapheme: &'static str,
    decimal_separator: char,
    fraction_digits: u8,
) -> CurrencyRecord {
    CurrencyRecord::new(code, numeric_code, grapheme, decimal_separator, fraction_digits)
}

#[rustfmt::skip]
pub const ISO_4217_RECORDS: &[CurrencyRecord] = &[
    c("AED", "784", ".\u{062f}.\u{0625}", '.', 2),
    c("AFN", "971", "\u{060b}", '.', 2),
    c("ALL", "008", "L", '.', 2),
    c("AMD", "051", "\u{0564}\u{0580}.", '.', 2),
    c("ANG", "532", "\u{0192}", ',', 2),
    c("AOA", "973", "Kz", '.', 2),
    c("ARS", "032", "$", ',', 2),
    c("AUD", "036", "$", '.', 2),
    c("AWG", "533", "\u{0192}", '.', 2),
    c("AZN", "944", "\u{20bc}", '.', 2),
    c("BAM", "977", "KM", '.', 2),
    c("BBD", "052", "$", '.', 2),
    c("BDT", "050", "\u{09f3}", '.', 2),
    c("BGN", "975", "\u{043b}\u{0432}", '.', 2),
    c("BHD", "048", ".\u{062f}.\u{0628}", '.', 3),
    c("BIF", "108", "Fr", '.', 0),
    c("BMD", "060", "$", '.', 2),
    c("BND", "096", "$", '.', 2),
    c("BOB", "068", "Bs.", '.', 2),
    c("BRL", "986", "R$", ',', 2),
    c("BSD", "044", "$", '.', 2),
    c("BTN", "064", "Nu.", '.', 2),
    c("BWP", "072", "P", '.', 2),
    c("BYN", "933", "p.", ',', 2),
    c("BZD", "084", "BZ$", '.', 2),
    c("CAD", "124", "$", '.', 2),
    c("CDF", "976", "FC", '.', 2),
    c("CHF", "756", "CHF", '.', 2),
    c("CLF", "990", "UF", ',', 4),
    c("CLP", "152", "$", ',', 0),
    c("CNY", "156", "\u{5143}", '.', 2),
    c("COP", "170", "$", ',', 2),
    c("CRC", "188", "\u{20a1}", '.', 2),
    c("CUP", "192", "$MN", '.', 2),
    c("CVE", "132", "$", '.', 2),
    c("CZK", "203", "K\u{010d}", ',', 2),
    c("DJF", "262", "Fdj", '.', 0),
    c("DKK", "208", "kr", '.', 2),
    c("DOP", "214", "RD$", '.', 2),
    c("DZD", "012", ".\u{062f}.\u{062c}", '.', 2),
    c("EGP", "818", "\u{00a3}", '.', 2),
    c("ERN", "232", "Nfk", '.', 2),
    c("ETB", "230", "Br", '.', 2),
    c("EUR", "978", "\u{20ac}", '.', 2),
    c("FJD", "242", "$", '.', 2),
    c("FKP", "238", "\u{00a3}", '.', 2),
    c("GBP", "826", "\u{00a3}", '.', 2),
    c("GEL", "981", "\u{10da}", '.', 2),
    c("GHS", "936", "\u{20b5}", '.', 2),
    c("GIP", "292", "\u{00a3}", '.', 2),
    c("GMD", "270", "D", '.', 2),
    c("GNF", "324", "FG", '.', 0),
    c("GTQ", "320", "Q", '.', 2),
    c("GYD", "328", "$", '.', 2),
    c("HKD", "344", "HK$", '.', 2),
    c("HNL", "340", "L", '.', 2),
    c("HTG", "332", "G", '.', 2),
    c("HUF", "348", "Ft", '.', 2),
    c("IDR", "360", "Rp", '.', 2),
    c("ILS", "376", "\u{20aa}", '.', 2),
    c("INR", "356", "\u{20b9}", '.', 2),
    c("IQD", "368", ".\u{062f}.\u{0639}", '.', 3),
    c("IRR", "364", "\u{fdfc}", '.', 2),
    c("ISK", "352", "kr", '.', 0),
    c("JMD", "388", "J$", '.', 2),
    c("JOD", "400", ".\u{062f}.\u{0627}", '.', 3),
    c("JPY", "392", "\u{00a5}", '.', 0),
    c("KES", "404", "KSh", '.', 2),
    c("KGS", "417", "\u{0441}\u{043e}\u{043c}", '.', 2),
    c("KHR", "116", "\u{17db}", '.', 2),
    c("KMF", "174", "CF", '.', 0),
    c("KPW", "408", "\u{20a9}", '.', 0),
    c("KRW", "410", "\u{20a9}", '.', 0),
    c("KWD", "414", ".\u{062f}.\u{0643}", '.', 3),
    c("KYD", "136", "$", '.', 2),
    c("KZT", "398", "\u{20b8}", '.', 2),
    c("LAK", "418", "\u{20ad}", '.', 2),
    c("LBP", "422", "\u{00a3}", '.', 2),
    c("LKR", "144", "\u{20a8}", '.', 2),
    c("LRD", "430", "$", '.', 2),
    c("LSL", "426", "L", '.', 2),
    c("LYD", "434", "\u{0644}.\u{062f}", '.', 3),
    c("MAD", "504", ".\u{062f}.\u{0645}", '.', 2),
    c("MDL", "498", "lei", '.', 2),
    c("MGA", "969", "Ar", '.', 2),
    c("MKD", "807", "\u{0434}\u{0435}\u{043d}", '.', 2),
    c("MMK", "104", "K", '.', 2),
    c("MNT", "496", "\u{20ae}", '.', 2),
    c("MOP", "446", "P", '.', 2),
    c("MRU", "929", "UM", '.', 2),
    c("MUR", "480", "\u{20a8}", '.', 2),
    c("MVR", "462", "MVR", '.', 2),
    c("MWK", "454", "MK", '.', 2),
    c("MXN", "484", "$", '.', 2),
    c("MYR", "458", "RM", '.', 2),
    c("MZN", "943", "MT", '.', 2),
    c("NAD", "516", "$", '.', 2),
    c("NGN", "566", "\u{20a6}", '.', 2),
    c("NIO", "558", "C$", '.', 2),
    c("NOK", "578", "kr", '.', 2),
    c("NPR", "524", "\u{20a8}", '.', 2),
    c("NZD", "554", "$", '.', 2),
    c("OMR", "512", "\u{fdfc}", '.', 3),
    c("PAB", "590", "B/.", '.', 2),
    c("PEN", "604", "S/", '.', 2),
    c("PGK", "598", "K", '.', 2),
    c("PHP", "608", "\u{20b1}", '.', 2),
    c("PKR", "586", "\u{20a8}", '.', 2),
    c("PLN", "985", "z\u{0142}", ',', 2),
    c("PYG", "600", "Gs", '.', 0),
    c("QAR", "634", "\u{fdfc}", '.', 2),
    c("RON", "946", "lei", ',', 2),
    c("RSD", "941", "\u{0434}\u{0438}\u{043d}.", ',', 2),
    c("RUB", "643", "\u{20bd}", ',', 2),
    c("RWF", "646", "FRw", '.', 0),
    c("SAR", "682", "\u{fdfc}", '.', 2),
    c("SBD", "090", "$", '.', 2),
    c("SCR", "690", "\u{20a8}", '.', 2),
    c("SDG", "938", "\u{00a3}", '.', 2),
    c("SEK", "752", "kr", ',', 2),
    c("SGD", "702", "S$", '.', 2),
    c("SHP", "654", "\u{00a3}", '.', 2),
    c("SLE", "925", "Le", '.', 2),
    c("SOS", "706", "Sh", '.', 2),
    c("SRD", "968", "$", '.', 2),
    c("SSP", "728", "\u{00a3}", '.', 2),
    c("STN", "930", "Db", '.', 2),
    c("SVC", "222", "\u{20a1}", '.', 2),
    c("SYP", "760", "\u{00a3}", '.', 2),
    c("SZL", "748", "L", '.', 2),
    c("THB", "764", "\u{0e3f}", '.', 2),
    c("TJS", "972", "SM", '.', 2),
    c("TMT", "934", "T", '.', 2),
    c("TND", "788", ".\u{062f}.\u{062a}", '.', 3),
    c("TOP", "776", "T$", '.', 2),
    c("TRY", "949", "\u{20ba}", '.', 2),
    c("TTD", "780", "TT$", '.', 2),
    c("TWD", "901", "NT$", '.', 2),
    c("TZS", "834", "TSh", '.', 2),
    c("UAH", "980", "\u{20b4}", '.', 2),
    c("UGX", "800", "USh", '.', 0),
    c("USD", "840", "$", '.', 2),
    c("UYU", "858", "$", ',', 2),
    c("UZS", "860", "so\u{2019}m", '.', 2),
    c("VES", "928", "Bs.S", ',', 2),
    c("VND", "704", "\u{20ab}", ',', 0),
    c("VUV", "548", "Vt", '.', 0),
    c("WST", "882", "T", '.', 2),
    c("XAF", "950", "CFA", '.', 0),
    c("XAG", "961", "oz t", '.', 0),
    c("XAU", "959", "oz t", '.', 0),
    c("XCD", "951", "$", '.', 2),
    c("XDR", "960", "SDR", '.', 0),
    c("XOF", "952", "CFA", '.', 0),
    c("XPF", "953", "\u{20a3}", '.', 0),
    c("YER", "886", "\u{fdfc}", '.', 2),
    c("ZAR", "710", "R", '.', 2),
    c("ZMW", "967", "ZK", '.', 2),
    c("ZWL", "932", "Z$", '.', 2),
];

// Out of range fraction digits fail the build instead of the first lookup.
const _: () = {
    let mut i = 0;
    while i < ISO_4217_RECORDS.len() {
        assert!(ISO_4217_RECORDS[i].fraction_digits <= MAX_FRACTION_DIGITS);
        i += 1;
    }
};

static ISO_4217: LazyLock<Iso4217Table> = LazyLock::new(|| Iso4217Table::new(ISO_4217_RECORDS));

/// Currency table indexed by alpha-3 and numeric code
#[derive(Debug)]
pub struct Iso4217Table {
    by_code: HashMap<&'static str, &'static CurrencyRecord>,
    by_numeric: HashMap<&'static str, &'static CurrencyRecord>,
}

impl Iso4217Table {
    /// Index a set of static records
    ///
    /// Later records win when two records share a code.
    pub fn new(records: &'static [CurrencyRecord]) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        let mut by_numeric = HashMap::with_capacity(records.len());

        for record in records {
            by_code.insert(record.code, record);
            by_numeric.insert(record.numeric_code, record);
        }

        Self {
            by_code,
            by_numeric,
        }
    }

    /// The process-wide built-in table
    pub fn global() -> &'static Self {
        &ISO_4217
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl CurrencyLookup for Iso4217Table {
    fn by_alpha_code(&self, code: &str) -> Option<CurrencyMeta> {
        self.by_code.get(code).map(|record| record.to_meta())
    }

    fn by_numeric_code(&self, code: &str) -> Option<CurrencyMeta> {
        self.by_numeric.get(code).map(|record| record.to_meta())
    }
}

impl CurrencyLookup for &Iso4217Table {
    fn by_alpha_code(&self, code: &str) -> Option<CurrencyMeta> {
        (**self).by_alpha_code(code)
    }

    fn by_numeric_code(&self, code: &str) -> Option<CurrencyMeta> {
        (**self).by_numeric_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("EUR", "978", "€", '.', 2)]
    #[case("USD", "840", "$", '.', 2)]
    #[case("JPY", "392", "¥", '.', 0)]
    #[case("CLF", "990", "UF", ',', 4)]
    #[case("LYD", "434", "ل.د", '.', 3)]
    #[case("BGN", "975", "лв", '.', 2)]
    fn test_lookup_by_alpha_code(
        #[case] code: &str,
        #[case] numeric: &str,
        #[case] symbol: &str,
        #[case] decimal: char,
        #[case] fraction: u8,
    ) {
        let meta = Iso4217Table::global().by_alpha_code(code).unwrap();
        assert_eq!(meta.code(), code);
        assert_eq!(meta.numeric_code(), numeric);
        assert_eq!(meta.symbol_grapheme(), symbol);
        assert_eq!(meta.decimal_separator(), decimal);
        assert_eq!(meta.fraction_digits(), fraction);
    }

    #[rstest]
    #[case("978", "EUR")]
    #[case("975", "BGN")]
    #[case("036", "AUD")]
    #[case("008", "ALL")]
    fn test_lookup_by_numeric_code(#[case] numeric: &str, #[case] code: &str) {
        let meta = Iso4217Table::global().by_numeric_code(numeric).unwrap();
        assert_eq!(meta.code(), code);
    }

    #[rstest]
    #[case::lowercase("eur")]
    #[case::unknown("ZZZ")]
    #[case::empty("")]
    fn test_alpha_lookup_misses(#[case] code: &str) {
        assert!(Iso4217Table::global().by_alpha_code(code).is_none());
    }

    #[rstest]
    #[case::unpadded("36")]
    #[case::unknown("000")]
    fn test_numeric_lookup_misses(#[case] code: &str) {
        assert!(Iso4217Table::global().by_numeric_code(code).is_none());
    }

    #[test]
    fn test_codes_are_unique_and_well_formed() {
        let mut codes = HashSet::new();
        let mut numerics = HashSet::new();

        for record in ISO_4217_RECORDS {
            assert_eq!(record.code.len(), 3, "{}", record.code);
            assert!(record.code.bytes().all(|b| b.is_ascii_uppercase()));
            assert_eq!(record.numeric_code.len(), 3, "{}", record.code);
            assert!(record.numeric_code.bytes().all(|b| b.is_ascii_digit()));
            assert!(codes.insert(record.code), "duplicate {}", record.code);
            assert!(
                numerics.insert(record.numeric_code),
                "duplicate {}",
                record.numeric_code
            );
        }

        assert_eq!(Iso4217Table::global().len(), ISO_4217_RECORDS.len());
    }
}
