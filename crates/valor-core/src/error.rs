use thiserror::Error;
use valor_locale::LocaleError;

use crate::config::ConfigError;

/// Construction-time failures for value objects exposed by `valor-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code must be exactly 3 uppercase letters A-Z: '{value}'")]
    InvalidCurrencyCode { value: String },

    #[error("invalid date format: '{value}'")]
    InvalidTimestampFormat { value: String },
    #[error("date cannot be in the future: '{value}' is after {now}")]
    FutureTimestampRejected { value: String, now: String },
    #[error("instant is outside the years 0000-9999: '{value}'")]
    TimestampOutOfRange { value: String },
}

/// Format-time failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("amount must be finite, got {amount}")]
    NonFiniteAmount { amount: f64 },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
