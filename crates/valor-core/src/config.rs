//! Formatting configuration.
//!
//! Every formatting call takes its locale explicitly. `FormatConfig` is the
//! value callers keep around to supply it; nothing here is global.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `VALOR_LOCALE` | Locale used by [`FormatConfig::from_env`] | `en-US` |

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use valor_locale::resolve_locale;

/// Locale used when a caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variable read by [`FormatConfig::from_env`].
pub const LOCALE_ENV_VAR: &str = "VALOR_LOCALE";

/// Configuration loading errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Locale settings for amount and date/time formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// BCP 47 locale tag.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    String::from(DEFAULT_LOCALE)
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

impl FormatConfig {
    /// Build a config for `locale`, rejecting tags the formatter cannot resolve.
    pub fn new(locale: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            locale: locale.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read the locale from `VALOR_LOCALE`, falling back to [`DEFAULT_LOCALE`]
    /// when it is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(LOCALE_ENV_VAR).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(locale) if !locale.trim().is_empty() => Self::new(locale.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        resolve_locale(&self.locale)
            .map(|_| ())
            .map_err(|err| ConfigError::InvalidValue {
                field: String::from("locale"),
                message: err.to_string(),
            })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
