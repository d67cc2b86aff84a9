use thiserror::Error;

/// Failures reported by the locale-formatting capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported locale '{locale}'")]
    UnsupportedLocale { locale: String },
    #[error("unsupported currency code '{code}'")]
    UnsupportedCurrencyCode { code: String },
    #[error("fraction digits must satisfy min <= max <= {max_allowed}: min={min}, max={max}")]
    InvalidFractionDigits { min: u8, max: u8, max_allowed: u8 },
    #[error("cannot format a non-finite number")]
    NonFiniteNumber,
}

/// Text that could not be read as a calendar instant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized date/time text '{value}'")]
pub struct ParseError {
    value: String,
}

impl ParseError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
