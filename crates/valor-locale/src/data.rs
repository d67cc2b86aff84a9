//! Curated locale data.
//!
//! A small, static slice of CLDR conventions: number symbols, currency
//! patterns and date/time patterns for the locales valor supports.

/// How integer digits are split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Standard,
    /// Last three, then groups of two: `12,34,567`.
    Indian,
}

impl Grouping {
    pub const fn primary(self) -> usize {
        3
    }

    pub const fn secondary(self) -> usize {
        match self {
            Self::Standard => 3,
            Self::Indian => 2,
        }
    }
}

/// Decimal number conventions for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub group: &'static str,
    pub decimal: &'static str,
    pub grouping: Grouping,
    /// Integers shorter than `primary + min_grouping_digits` are not grouped.
    pub min_grouping_digits: usize,
}

/// Currency layout. `¤` marks the symbol and `#` the formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPattern {
    pub positive: &'static str,
    pub negative: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    H12,
    H23,
}

/// Date/time layout.
///
/// Pattern letters: `y` year, `M` month, `d` day, `H` hour (0-23),
/// `h` hour (1-12), `m` minute, `s` second, `a` day period. Every other
/// character is copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimePattern {
    pub pattern: &'static str,
    pub hour_cycle: HourCycle,
    pub am: &'static str,
    pub pm: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub number: NumberSymbols,
    pub currency: CurrencyPattern,
    /// Symbols that differ from the shared table in this locale.
    pub currency_symbols: &'static [(&'static str, &'static str)],
    pub date_time: DateTimePattern,
}

const COMMA_DOT: NumberSymbols = NumberSymbols {
    group: ",",
    decimal: ".",
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
};

const DOT_COMMA: NumberSymbols = NumberSymbols {
    group: ".",
    decimal: ",",
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
};

const PREFIX: CurrencyPattern = CurrencyPattern {
    positive: "¤#",
    negative: "-¤#",
};

const SUFFIX_SPACED: CurrencyPattern = CurrencyPattern {
    positive: "#\u{a0}¤",
    negative: "-#\u{a0}¤",
};

const fn h23(pattern: &'static str) -> DateTimePattern {
    DateTimePattern {
        pattern,
        hour_cycle: HourCycle::H23,
        am: "",
        pm: "",
    }
}

const fn h12(pattern: &'static str, am: &'static str, pm: &'static str) -> DateTimePattern {
    DateTimePattern {
        pattern,
        hour_cycle: HourCycle::H12,
        am,
        pm,
    }
}

pub static LOCALES: [LocaleData; 15] = [
    LocaleData {
        tag: "en-US",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[],
        date_time: h12("M/d/y, h:m:s a", "AM", "PM"),
    },
    LocaleData {
        tag: "en-GB",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("USD", "US$")],
        date_time: h23("d/M/y, H:m:s"),
    },
    LocaleData {
        tag: "en-CA",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("CAD", "$"), ("USD", "US$")],
        date_time: h12("y-M-d, h:m:s a", "a.m.", "p.m."),
    },
    LocaleData {
        tag: "en-AU",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("AUD", "$"), ("USD", "USD")],
        date_time: h12("d/M/y, h:m:s a", "am", "pm"),
    },
    LocaleData {
        tag: "en-IN",
        number: NumberSymbols {
            group: ",",
            decimal: ".",
            grouping: Grouping::Indian,
            min_grouping_digits: 1,
        },
        currency: PREFIX,
        currency_symbols: &[],
        date_time: h12("d/M/y, h:m:s a", "am", "pm"),
    },
    LocaleData {
        tag: "de-DE",
        number: DOT_COMMA,
        currency: SUFFIX_SPACED,
        currency_symbols: &[],
        date_time: h23("d.M.y, H:m:s"),
    },
    LocaleData {
        tag: "de-CH",
        number: NumberSymbols {
            group: "\u{2019}",
            decimal: ".",
            grouping: Grouping::Standard,
            min_grouping_digits: 1,
        },
        currency: CurrencyPattern {
            positive: "¤\u{a0}#",
            negative: "¤-#",
        },
        currency_symbols: &[],
        date_time: h23("d.M.y, H:m:s"),
    },
    LocaleData {
        tag: "fr-FR",
        number: NumberSymbols {
            group: "\u{202f}",
            decimal: ",",
            grouping: Grouping::Standard,
            min_grouping_digits: 1,
        },
        currency: SUFFIX_SPACED,
        currency_symbols: &[("USD", "$US")],
        date_time: h23("d/M/y H:m:s"),
    },
    LocaleData {
        tag: "es-ES",
        number: NumberSymbols {
            group: ".",
            decimal: ",",
            grouping: Grouping::Standard,
            min_grouping_digits: 2,
        },
        currency: SUFFIX_SPACED,
        currency_symbols: &[("USD", "US$")],
        date_time: h23("d/M/y, H:m:s"),
    },
    LocaleData {
        tag: "it-IT",
        number: DOT_COMMA,
        currency: SUFFIX_SPACED,
        currency_symbols: &[],
        date_time: h23("d/M/y, H:m:s"),
    },
    LocaleData {
        tag: "nl-NL",
        number: DOT_COMMA,
        currency: CurrencyPattern {
            positive: "¤\u{a0}#",
            negative: "¤\u{a0}-#",
        },
        currency_symbols: &[("USD", "US$")],
        date_time: h23("d-M-y, H:m:s"),
    },
    LocaleData {
        tag: "pt-BR",
        number: DOT_COMMA,
        currency: CurrencyPattern {
            positive: "¤\u{a0}#",
            negative: "-¤\u{a0}#",
        },
        currency_symbols: &[("USD", "US$")],
        date_time: h23("d/M/y, H:m:s"),
    },
    LocaleData {
        tag: "ja-JP",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("JPY", "￥"), ("CNY", "元")],
        date_time: h23("y/M/d H:m:s"),
    },
    LocaleData {
        tag: "zh-CN",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("CNY", "¥"), ("JPY", "JP¥"), ("USD", "US$")],
        date_time: h23("y/M/d H:m:s"),
    },
    LocaleData {
        tag: "ko-KR",
        number: COMMA_DOT,
        currency: PREFIX,
        currency_symbols: &[("USD", "US$")],
        date_time: h12("y. M. d. a h:m:s", "오전", "오후"),
    },
];

/// Region chosen when a tag names only a language.
const DEFAULT_REGIONS: [(&str, &str); 10] = [
    ("de", "de-DE"),
    ("en", "en-US"),
    ("es", "es-ES"),
    ("fr", "fr-FR"),
    ("it", "it-IT"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("nl", "nl-NL"),
    ("pt", "pt-BR"),
    ("zh", "zh-CN"),
];

/// ISO 4217 codes valor can format, with their shared display symbol.
/// `None` means the code itself is displayed.
const CURRENCIES: &[(&str, Option<&str>)] = &[
    ("AED", None),
    ("ARS", None),
    ("AUD", Some("A$")),
    ("BGN", None),
    ("BHD", None),
    ("BRL", Some("R$")),
    ("CAD", Some("CA$")),
    ("CHF", None),
    ("CLP", None),
    ("CNY", Some("CN¥")),
    ("COP", None),
    ("CZK", None),
    ("DKK", None),
    ("EGP", None),
    ("EUR", Some("€")),
    ("GBP", Some("£")),
    ("HKD", Some("HK$")),
    ("HUF", None),
    ("IDR", None),
    ("ILS", Some("₪")),
    ("INR", Some("₹")),
    ("ISK", None),
    ("JPY", Some("¥")),
    ("KES", None),
    ("KRW", Some("₩")),
    ("KWD", None),
    ("MXN", Some("MX$")),
    ("MYR", None),
    ("NGN", None),
    ("NOK", None),
    ("NZD", Some("NZ$")),
    ("PEN", None),
    ("PHP", Some("₱")),
    ("PKR", None),
    ("PLN", None),
    ("QAR", None),
    ("RON", None),
    ("SAR", None),
    ("SEK", None),
    ("SGD", None),
    ("THB", None),
    ("TRY", None),
    ("TWD", Some("NT$")),
    ("UAH", None),
    ("USD", Some("$")),
    ("VND", Some("₫")),
    ("XAF", Some("FCFA")),
    ("XOF", Some("F\u{202f}CFA")),
    ("ZAR", None),
];

pub fn find_locale(tag: &str) -> Option<&'static LocaleData> {
    LOCALES.iter().find(|locale| locale.tag == tag)
}

pub fn default_region(language: &str) -> Option<&'static str> {
    DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, tag)| *tag)
}

pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|locale| locale.tag)
}

impl LocaleData {
    /// Display symbol for `code` in this locale, or `None` for unknown codes.
    pub fn currency_symbol(&self, code: &str) -> Option<&'static str> {
        self.currency_symbols
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, symbol)| *symbol)
            .or_else(|| {
                CURRENCIES
                    .iter()
                    .find(|(candidate, _)| *candidate == code)
                    .map(|(known, symbol)| symbol.unwrap_or(*known))
            })
    }
}
