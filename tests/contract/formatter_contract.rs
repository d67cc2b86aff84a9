use std::sync::Mutex;

use time::macros::datetime;
use time::OffsetDateTime;
use valor_tests::{
    supported_tags, Arc, BuiltinLocaleFormatter, Currency, DateTimeFields, FormatError,
    LocaleError, LocaleFormatter, PointInTime,
};

/// Delegates to the builtin formatter and records every request it sees.
#[derive(Debug, Default)]
struct RecordingFormatter {
    currency_calls: Mutex<Vec<(String, String, u8, u8)>>,
    date_time_calls: Mutex<Vec<(String, DateTimeFields)>>,
}

impl LocaleFormatter for RecordingFormatter {
    fn format_currency_amount(
        &self,
        amount: f64,
        currency_code: &str,
        locale: &str,
        min_fraction_digits: u8,
        max_fraction_digits: u8,
    ) -> Result<String, LocaleError> {
        self.currency_calls
            .lock()
            .expect("lock poisoned")
            .push((
                currency_code.to_owned(),
                locale.to_owned(),
                min_fraction_digits,
                max_fraction_digits,
            ));
        BuiltinLocaleFormatter.format_currency_amount(
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
        self.date_time_calls
            .lock()
            .expect("lock poisoned")
            .push((locale.to_owned(), fields));
        BuiltinLocaleFormatter.format_date_time(instant, locale, fields)
    }
}

struct FormatterCase {
    name: &'static str,
    formatter: Arc<dyn LocaleFormatter>,
}

fn formatter_cases() -> Vec<FormatterCase> {
    vec![
        FormatterCase {
            name: "builtin",
            formatter: Arc::new(BuiltinLocaleFormatter),
        },
        FormatterCase {
            name: "recording",
            formatter: Arc::new(RecordingFormatter::default()),
        },
        FormatterCase {
            name: "nested-arc",
            formatter: Arc::new(Arc::new(BuiltinLocaleFormatter)),
        },
    ]
}

#[test]
fn currency_amounts_have_two_fraction_digits_for_all_formatters() {
    let usd = Currency::new("USD").expect("valid code");

    for case in formatter_cases() {
        let formatted = usd
            .for_amount_with(1234.5, "en-US", case.formatter.as_ref())
            .unwrap_or_else(|error| panic!("formatter '{}' failed: {error}", case.name));
        assert_eq!(formatted, "$1,234.50", "formatter '{}'", case.name);
    }
}

#[test]
fn every_supported_locale_formats_for_all_formatters() {
    let eur = Currency::new("EUR").expect("valid code");
    let point = PointInTime::parse("2023-10-05T14:48:00.000Z").expect("valid instant");

    for case in formatter_cases() {
        for tag in supported_tags() {
            let amount = eur
                .for_amount_with(1234.5, tag, case.formatter.as_ref())
                .unwrap_or_else(|error| panic!("formatter '{}' failed for {tag}: {error}", case.name));
            let two_digits = amount.contains("234.50") || amount.contains("234,50");
            assert!(two_digits, "formatter '{}' {tag}: {amount}", case.name);

            let date_time = point
                .format_with(tag, DateTimeFields::NUMERIC_YEAR, case.formatter.as_ref())
                .unwrap_or_else(|error| panic!("formatter '{}' failed for {tag}: {error}", case.name));
            assert!(date_time.contains("2023"), "formatter '{}' {tag}: {date_time}", case.name);
        }
    }
}

#[test]
fn date_times_render_in_locale_order_for_all_formatters() {
    let point = PointInTime::parse("2023-10-05T14:48:00.000Z").expect("valid instant");

    for case in formatter_cases() {
        let formatted = point
            .format_with("de-DE", DateTimeFields::NUMERIC_YEAR, case.formatter.as_ref())
            .unwrap_or_else(|error| panic!("formatter '{}' failed: {error}", case.name));
        assert_eq!(formatted, "05.10.2023, 14:48:00", "formatter '{}'", case.name);
    }
}

#[test]
fn unknown_locales_fail_for_all_formatters() {
    let eur = Currency::new("EUR").expect("valid code");
    let point = PointInTime::parse("2023-10-05").expect("valid instant");

    for case in formatter_cases() {
        let amount_err = eur
            .for_amount_with(1.0, "qq-QQ", case.formatter.as_ref())
            .expect_err("unknown locale");
        assert!(
            matches!(
                amount_err,
                FormatError::Locale(LocaleError::UnsupportedLocale { .. })
            ),
            "formatter '{}': amount error {amount_err:?}",
            case.name
        );

        let date_err = point
            .format_with("qq-QQ", DateTimeFields::NUMERIC_YEAR, case.formatter.as_ref())
            .expect_err("unknown locale");
        assert!(
            matches!(
                date_err,
                FormatError::Locale(LocaleError::UnsupportedLocale { .. })
            ),
            "formatter '{}': date error {date_err:?}",
            case.name
        );
    }
}

#[test]
fn currency_requests_exactly_two_fraction_digits() {
    let recorder = RecordingFormatter::default();
    let chf = Currency::new("CHF").expect("valid code");

    chf.for_amount_with(10.0, "de-CH", &recorder)
        .expect("must format");

    let calls = recorder.currency_calls.lock().expect("lock poisoned");
    assert_eq!(
        calls.as_slice(),
        &[(String::from("CHF"), String::from("de-CH"), 2, 2)]
    );
}

#[test]
fn point_in_time_requests_numeric_year_by_default() {
    let recorder = RecordingFormatter::default();
    let point = PointInTime::parse("2023-10-05T14:48:00Z").expect("valid instant");

    point
        .format_with("ja-JP", DateTimeFields::NUMERIC_YEAR, &recorder)
        .expect("must format");
    point
        .format_with("ja-JP", DateTimeFields::TWO_DIGIT, &recorder)
        .expect("must format");

    let calls = recorder.date_time_calls.lock().expect("lock poisoned");
    assert_eq!(
        calls.as_slice(),
        &[
            (String::from("ja-JP"), DateTimeFields::NUMERIC_YEAR),
            (String::from("ja-JP"), DateTimeFields::TWO_DIGIT),
        ]
    );
}

#[test]
fn non_finite_amounts_never_reach_the_formatter() {
    let recorder = RecordingFormatter::default();
    let usd = Currency::new("USD").expect("valid code");

    let err = usd
        .for_amount_with(f64::NAN, "en-US", &recorder)
        .expect_err("NaN is not an amount");
    assert!(matches!(err, FormatError::NonFiniteAmount { .. }));
    assert!(recorder.currency_calls.lock().expect("lock poisoned").is_empty());
}

#[test]
fn formatter_renders_in_utc() {
    let rendered = BuiltinLocaleFormatter
        .format_date_time(
            datetime!(2023-10-05 23:30:00 -05:00),
            "en-GB",
            DateTimeFields::NUMERIC_YEAR,
        )
        .expect("must format");
    assert_eq!(rendered, "06/10/2023, 04:30:00");
}
