use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use valor_locale::{BuiltinLocaleFormatter, LocaleFormatter};

use crate::config::{FormatConfig, DEFAULT_LOCALE};
use crate::{FormatError, ValidationError};

const CODE_LEN: usize = 3;
const FRACTION_DIGITS: u8 = 2;

/// Three-letter currency code (`USD`, `EUR`, ...).
///
/// The code is validated once, at construction: exactly three ASCII
/// uppercase letters. Formatting then never sees a malformed code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let valid = code.len() == CODE_LEN && code.bytes().all(|byte| byte.is_ascii_uppercase());
        if !valid {
            tracing::debug!(value = code, "rejected currency code");
            return Err(ValidationError::InvalidCurrencyCode {
                value: code.to_owned(),
            });
        }

        Ok(Self(code.to_owned()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Format `amount` in this currency for `locale`, with exactly two
    /// fraction digits.
    pub fn for_amount(&self, amount: f64, locale: &str) -> Result<String, FormatError> {
        self.for_amount_with(amount, locale, &BuiltinLocaleFormatter)
    }

    /// [`Currency::for_amount`] in the `en-US` locale.
    pub fn for_amount_default(&self, amount: f64) -> Result<String, FormatError> {
        self.for_amount(amount, DEFAULT_LOCALE)
    }

    pub fn for_amount_in(&self, amount: f64, config: &FormatConfig) -> Result<String, FormatError> {
        self.for_amount(amount, config.locale())
    }

    pub fn for_amount_with(
        &self,
        amount: f64,
        locale: &str,
        formatter: &dyn LocaleFormatter,
    ) -> Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFiniteAmount { amount });
        }

        formatter
            .format_currency_amount(amount, self.code(), locale, FRACTION_DIGITS, FRACTION_DIGITS)
            .map_err(FormatError::from)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Currency {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}
