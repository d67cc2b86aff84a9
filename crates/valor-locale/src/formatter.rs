use std::fmt::Debug;
use std::sync::Arc;

use time::OffsetDateTime;

use crate::date_time::{self, DateTimeFields};
use crate::{number, resolve_locale, LocaleError};

/// Locale-aware rendering of amounts and instants.
///
/// Implementations must be pure: the same arguments always produce the same
/// output, and unknown locales or currency codes fail rather than fall back
/// silently.
pub trait LocaleFormatter: Send + Sync + Debug {
    fn format_currency_amount(
        &self,
        amount: f64,
        currency_code: &str,
        locale: &str,
        min_fraction_digits: u8,
        max_fraction_digits: u8,
    ) -> Result<String, LocaleError>;

    fn format_date_time(
        &self,
        instant: OffsetDateTime,
        locale: &str,
        fields: DateTimeFields,
    ) -> Result<String, LocaleError>;
}

impl<T> LocaleFormatter for Arc<T>
where
    T: LocaleFormatter + ?Sized,
{
    fn format_currency_amount(
        &self,
        amount: f64,
        currency_code: &str,
        locale: &str,
        min_fraction_digits: u8,
        max_fraction_digits: u8,
    ) -> Result<String, LocaleError> {
        self.as_ref().format_currency_amount(
            amount,
            currency_code,
            locale,
            min_fraction_digits,
            max_fraction_digits,
        )
    }

    fn format_date_time(
        &self,
        instant: OffsetDateTime,
        locale: &str,
        fields: DateTimeFields,
    ) -> Result<String, LocaleError> {
        self.as_ref().format_date_time(instant, locale, fields)
    }
}

/// Formatter backed by the static locale table in [`crate::data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinLocaleFormatter;

impl LocaleFormatter for BuiltinLocaleFormatter {
    fn format_currency_amount(
        &self,
        amount: f64,
        currency_code: &str,
        locale: &str,
        min_fraction_digits: u8,
        max_fraction_digits: u8,
    ) -> Result<String, LocaleError> {
        let data = resolve_locale(locale)?;
        number::format_currency(
            data,
            amount,
            currency_code,
            min_fraction_digits,
            max_fraction_digits,
        )
    }

    fn format_date_time(
        &self,
        instant: OffsetDateTime,
        locale: &str,
        fields: DateTimeFields,
    ) -> Result<String, LocaleError> {
        let data = resolve_locale(locale)?;
        Ok(date_time::format_date_time(data, instant, fields))
    }
}
