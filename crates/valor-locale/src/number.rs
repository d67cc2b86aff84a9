use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::data::{LocaleData, NumberSymbols};
use crate::LocaleError;

/// Upper bound on requested fraction digits.
pub const MAX_FRACTION_DIGITS: u8 = 20;

const SYMBOL_PLACEHOLDER: char = '¤';
const NUMBER_PLACEHOLDER: char = '#';
const CURRENCY_SPACING: char = '\u{a0}';

pub(crate) fn format_currency(
    locale: &LocaleData,
    amount: f64,
    currency_code: &str,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
) -> Result<String, LocaleError> {
    if min_fraction_digits > max_fraction_digits || max_fraction_digits > MAX_FRACTION_DIGITS {
        return Err(LocaleError::InvalidFractionDigits {
            min: min_fraction_digits,
            max: max_fraction_digits,
            max_allowed: MAX_FRACTION_DIGITS,
        });
    }
    if !amount.is_finite() {
        return Err(LocaleError::NonFiniteNumber);
    }

    let symbol = locale.currency_symbol(currency_code).ok_or_else(|| {
        tracing::debug!(
            code = currency_code,
            locale = locale.tag,
            "currency code has no locale data"
        );
        LocaleError::UnsupportedCurrencyCode {
            code: currency_code.to_owned(),
        }
    })?;

    let (number, is_zero) = format_unsigned(
        amount.abs(),
        &locale.number,
        min_fraction_digits,
        max_fraction_digits,
    );
    let pattern = if amount.is_sign_negative() && !is_zero {
        locale.currency.negative
    } else {
        locale.currency.positive
    };

    Ok(apply_pattern(pattern, symbol, &number))
}

/// Renders a non-negative value, returning the text and whether it rounded to zero.
fn format_unsigned(value: f64, symbols: &NumberSymbols, min: u8, max: u8) -> (String, bool) {
    let fixed = round_half_away(value, max);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction;
    while fraction.len() > usize::from(min) && fraction.ends_with('0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    let is_zero = integer.chars().chain(fraction.chars()).all(|ch| ch == '0');

    let mut out = group_integer(integer, symbols);
    if !fraction.is_empty() {
        out.push_str(symbols.decimal);
        out.push_str(fraction);
    }
    (out, is_zero)
}

/// Rounds the shortest decimal text of `value` to `digits` places, ties away from zero.
///
/// `1.005` is stored as `1.00499999...` in binary but prints as `1.005`, so it
/// rounds to `1.01`. Magnitudes past `Decimal`'s range carry no fraction and
/// are printed directly.
fn round_half_away(value: f64, digits: u8) -> String {
    let prec = usize::from(digits);
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(u32::from(digits), RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.prec$}")
        }
        Err(_) => format!("{value:.prec$}"),
    }
}

fn group_integer(digits: &str, symbols: &NumberSymbols) -> String {
    let primary = symbols.grouping.primary();
    if digits.len() < primary + symbols.min_grouping_digits {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - primary);
    let secondary = symbols.grouping.secondary();

    let mut groups = Vec::with_capacity(head.len() / secondary + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(secondary);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(symbols.group)
}

/// Substitutes symbol and number into a currency pattern.
///
/// A symbol that ends (or starts) with a letter gets a no-break space when
/// it touches the number directly, so `CHF1,234.50` renders as `CHF 1,234.50`.
fn apply_pattern(pattern: &str, symbol: &str, number: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + symbol.len() + number.len() + 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            SYMBOL_PLACEHOLDER => {
                out.push_str(symbol);
                let touches_number = chars.peek() == Some(&NUMBER_PLACEHOLDER);
                if touches_number && symbol.chars().last().is_some_and(char::is_alphabetic) {
                    out.push(CURRENCY_SPACING);
                }
            }
            NUMBER_PLACEHOLDER => {
                out.push_str(number);
                let touches_symbol = chars.peek() == Some(&SYMBOL_PLACEHOLDER);
                if touches_symbol && symbol.chars().next().is_some_and(char::is_alphabetic) {
                    out.push(CURRENCY_SPACING);
                }
            }
            other => out.push(other),
        }
    }
    out
}
