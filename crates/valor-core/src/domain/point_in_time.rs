use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Duration, OffsetDateTime, UtcOffset};
use valor_locale::{
    instant_from_system_time, parse_date_time, BuiltinLocaleFormatter, Clock, DateTimeFields,
    LocaleFormatter, SystemClock,
};

use crate::config::{FormatConfig, DEFAULT_LOCALE};
use crate::{FormatError, ValidationError};

const NANOS_PER_MILLI: u32 = 1_000_000;

/// A validated instant that is never later than the clock reading taken
/// when it was built.
///
/// Stored in UTC at millisecond precision, so [`Display`] output parses back
/// to an equal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointInTime(OffsetDateTime);

impl PointInTime {
    /// Current system time.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    pub fn now_with(clock: &dyn Clock) -> Self {
        Self(truncate_to_millis(clock.now_utc()))
    }

    /// Parse `text` and check it against the system clock.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_with(text, &SystemClock)
    }

    pub fn parse_with(text: &str, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let instant = parse_date_time(text).map_err(|_| ValidationError::InvalidTimestampFormat {
            value: text.to_owned(),
        })?;
        Self::checked(instant, text, clock)
    }

    /// Wrap an existing instant (any offset) checked against the system clock.
    pub fn from_instant(instant: OffsetDateTime) -> Result<Self, ValidationError> {
        Self::from_instant_with(instant, &SystemClock)
    }

    pub fn from_instant_with(
        instant: OffsetDateTime,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self::checked(instant, &canonical_text(instant), clock)
    }

    /// Wrap a `SystemTime` checked against the system clock.
    pub fn from_system_time(value: SystemTime) -> Result<Self, ValidationError> {
        Self::from_system_time_with(value, &SystemClock)
    }

    /// Times beyond what `OffsetDateTime` holds are rejected as future (after
    /// the epoch) or out of range (before it) instead of overflowing.
    pub fn from_system_time_with(
        value: SystemTime,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        if let Some(instant) = instant_from_system_time(value) {
            return Self::from_instant_with(instant, clock);
        }

        match value.duration_since(UNIX_EPOCH) {
            Ok(after) => {
                let value = format!("{}s after the Unix epoch", after.as_secs());
                let now = canonical_text(clock.now_utc());
                tracing::debug!(%value, %now, "rejected system time beyond the supported range");
                Err(ValidationError::FutureTimestampRejected { value, now })
            }
            Err(before) => {
                let value = format!("{}s before the Unix epoch", before.duration().as_secs());
                tracing::debug!(%value, "rejected system time before the supported range");
                Err(ValidationError::TimestampOutOfRange { value })
            }
        }
    }

    fn checked(
        instant: OffsetDateTime,
        value: &str,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let instant = instant.to_offset(UtcOffset::UTC);
        if instant.year() < 0 {
            tracing::debug!(value, "rejected instant before year 0000");
            return Err(ValidationError::TimestampOutOfRange {
                value: value.to_owned(),
            });
        }

        let now = clock.now_utc();
        if instant > now {
            let now = canonical_text(now);
            tracing::debug!(value, %now, "rejected future instant");
            return Err(ValidationError::FutureTimestampRejected {
                value: value.to_owned(),
                now,
            });
        }

        Ok(Self(truncate_to_millis(instant)))
    }

    /// The wrapped instant, in UTC.
    pub fn value(self) -> OffsetDateTime {
        self.0
    }

    pub fn unix_timestamp_millis(self) -> i128 {
        self.0.unix_timestamp_nanos() / i128::from(NANOS_PER_MILLI)
    }

    /// Human-readable date and time for `locale`: full year, other fields
    /// two digits, rendered in UTC.
    pub fn format(&self, locale: &str) -> Result<String, FormatError> {
        self.format_with(locale, DateTimeFields::NUMERIC_YEAR, &BuiltinLocaleFormatter)
    }

    /// [`PointInTime::format`] in the `en-US` locale.
    pub fn format_default(&self) -> Result<String, FormatError> {
        self.format(DEFAULT_LOCALE)
    }

    pub fn format_in(&self, config: &FormatConfig) -> Result<String, FormatError> {
        self.format(config.locale())
    }

    pub fn format_with(
        &self,
        locale: &str,
        fields: DateTimeFields,
        formatter: &dyn LocaleFormatter,
    ) -> Result<String, FormatError> {
        formatter
            .format_date_time(self.0, locale, fields)
            .map_err(FormatError::from)
    }
}

fn canonical_text(instant: OffsetDateTime) -> String {
    PointInTime(truncate_to_millis(instant.to_offset(UtcOffset::UTC))).to_string()
}

fn truncate_to_millis(instant: OffsetDateTime) -> OffsetDateTime {
    instant - Duration::nanoseconds(i64::from(instant.nanosecond() % NANOS_PER_MILLI))
}

impl Default for PointInTime {
    fn default() -> Self {
        Self::now()
    }
}

/// ISO 8601 with milliseconds and a `Z` designator: `2023-10-05T14:48:00.000Z`.
impl Display for PointInTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let t = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            t.year(),
            u8::from(t.month()),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.millisecond()
        )
    }
}

impl FromStr for PointInTime {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for PointInTime {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<OffsetDateTime> for PointInTime {
    type Error = ValidationError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        Self::from_instant(value)
    }
}

impl TryFrom<SystemTime> for PointInTime {
    type Error = ValidationError;

    fn try_from(value: SystemTime) -> Result<Self, Self::Error> {
        Self::from_system_time(value)
    }
}

impl From<PointInTime> for OffsetDateTime {
    fn from(value: PointInTime) -> Self {
        value.0
    }
}

impl Serialize for PointInTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PointInTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use time::macros::datetime;
    use time::{Date, Month};
    use valor_locale::{FieldStyle, FixedClock, LocaleError};

    use super::*;

    fn clock() -> FixedClock {
        FixedClock::new(datetime!(2024-06-01 12:00:00 UTC))
    }

    #[test]
    fn canonical_string_round_trips() {
        let point = PointInTime::parse("2023-10-05T14:48:00.000Z").expect("must parse");
        assert_eq!(point.to_string(), "2023-10-05T14:48:00.000Z");
        assert_eq!(point.value(), datetime!(2023-10-05 14:48:00 UTC));
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let point = PointInTime::parse("2023-10-05T16:48:00+02:00").expect("must parse");
        assert_eq!(point.to_string(), "2023-10-05T14:48:00.000Z");
        assert_eq!(point.value().offset(), UtcOffset::UTC);
    }

    #[test]
    fn truncates_below_milliseconds() {
        let point = PointInTime::parse("2023-10-05T14:48:00.123987Z").expect("must parse");
        assert_eq!(point.to_string(), "2023-10-05T14:48:00.123Z");
        assert_eq!(point.value(), datetime!(2023-10-05 14:48:00.123 UTC));
    }

    #[rstest]
    #[case("garbage")]
    #[case("not-a-date")]
    #[case("")]
    #[case("2023-02-30T00:00:00Z")]
    fn rejects_unparseable_text(#[case] input: &str) {
        let err = PointInTime::parse(input).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidTimestampFormat {
                value: input.to_owned()
            }
        );
    }

    #[test]
    fn rejects_far_future() {
        let err = PointInTime::parse("2999-01-01T00:00:00.000Z").expect_err("must fail");
        assert!(matches!(err, ValidationError::FutureTimestampRejected { .. }));
    }

    #[test]
    fn accepts_the_exact_clock_reading() {
        let point = PointInTime::parse_with("2024-06-01T12:00:00.000Z", &clock()).expect("valid");
        assert_eq!(point.value(), clock().now_utc());
    }

    #[test]
    fn rejects_one_millisecond_past_the_clock() {
        let err = PointInTime::parse_with("2024-06-01T12:00:00.001Z", &clock()).expect_err("future");
        assert_eq!(
            err,
            ValidationError::FutureTimestampRejected {
                value: String::from("2024-06-01T12:00:00.001Z"),
                now: String::from("2024-06-01T12:00:00.000Z"),
            }
        );
    }

    #[test]
    fn rejects_future_instant_values() {
        let err = PointInTime::from_instant_with(datetime!(2024-06-02 00:00:00 UTC), &clock())
            .expect_err("future");
        assert!(matches!(err, ValidationError::FutureTimestampRejected { .. }));
    }

    #[test]
    fn rejected_instants_are_reported_in_canonical_form() {
        let err = PointInTime::from_instant_with(datetime!(2024-06-01 15:00:00.25 +02:00), &clock())
            .expect_err("future");
        assert_eq!(
            err,
            ValidationError::FutureTimestampRejected {
                value: String::from("2024-06-01T13:00:00.250Z"),
                now: String::from("2024-06-01T12:00:00.000Z"),
            }
        );
        assert_eq!(
            err.to_string(),
            "date cannot be in the future: '2024-06-01T13:00:00.250Z' is after 2024-06-01T12:00:00.000Z"
        );
    }

    #[test]
    fn accepts_past_system_times() {
        let value = UNIX_EPOCH + std::time::Duration::from_millis(1_500);
        let point = PointInTime::from_system_time_with(value, &clock()).expect("past");
        assert_eq!(point.to_string(), "1970-01-01T00:00:01.500Z");
    }

    #[test]
    fn system_times_beyond_range_are_rejected_without_panicking() {
        let far_future = UNIX_EPOCH + std::time::Duration::from_secs(400_000_000_000);
        let err = PointInTime::from_system_time_with(far_future, &clock()).expect_err("future");
        assert_eq!(
            err,
            ValidationError::FutureTimestampRejected {
                value: String::from("400000000000s after the Unix epoch"),
                now: String::from("2024-06-01T12:00:00.000Z"),
            }
        );
        assert!(matches!(
            PointInTime::try_from(far_future),
            Err(ValidationError::FutureTimestampRejected { .. })
        ));
    }

    #[test]
    fn rejects_negative_years() {
        let instant = Date::from_calendar_date(-1, Month::January, 1)
            .expect("valid date")
            .midnight()
            .assume_utc();
        let err = PointInTime::from_instant_with(instant, &clock()).expect_err("out of range");
        assert!(matches!(err, ValidationError::TimestampOutOfRange { .. }));
    }

    #[test]
    fn now_uses_the_injected_clock() {
        let fixed = FixedClock::new(datetime!(2024-06-01 12:00:00.999999 UTC));
        let point = PointInTime::now_with(&fixed);
        assert_eq!(point.to_string(), "2024-06-01T12:00:00.999Z");
    }

    #[test]
    fn now_never_exceeds_a_later_reading() {
        let point = PointInTime::now();
        let after = OffsetDateTime::now_utc();
        assert!(point.value() <= after);
    }

    #[test]
    fn formats_for_locales() {
        let point = PointInTime::parse("2023-10-05T14:48:00.000Z").expect("must parse");
        assert_eq!(
            point.format_default().expect("must format"),
            "10/05/2023, 02:48:00 PM"
        );
        assert_eq!(
            point.format("en-GB").expect("must format"),
            "05/10/2023, 14:48:00"
        );
        assert_eq!(
            point
                .format_with("en-GB", DateTimeFields::TWO_DIGIT, &BuiltinLocaleFormatter)
                .expect("must format"),
            "05/10/23, 14:48:00"
        );
    }

    #[test]
    fn numeric_fields_can_be_requested() {
        let point = PointInTime::parse("2023-01-05T04:48:00Z").expect("must parse");
        let fields = DateTimeFields {
            day: FieldStyle::Numeric,
            month: FieldStyle::Numeric,
            ..DateTimeFields::NUMERIC_YEAR
        };
        assert_eq!(
            point
                .format_with("de-DE", fields, &BuiltinLocaleFormatter)
                .expect("must format"),
            "5.1.2023, 04:48:00"
        );
    }

    #[test]
    fn unknown_locale_is_surfaced() {
        let point = PointInTime::parse("2023-10-05").expect("must parse");
        let err = point.format("xx-XX").expect_err("must fail");
        assert_eq!(
            err,
            FormatError::Locale(LocaleError::UnsupportedLocale {
                locale: String::from("xx-XX")
            })
        );
    }

    #[test]
    fn unix_millis_matches_instant() {
        let point = PointInTime::parse("1970-01-01T00:00:01.500Z").expect("must parse");
        assert_eq!(point.unix_timestamp_millis(), 1_500);
    }

    #[test]
    fn serde_uses_canonical_string() {
        let point = PointInTime::parse("2023-10-05T14:48:00.000Z").expect("must parse");
        let json = serde_json::to_string(&point).expect("serialize");
        assert_eq!(json, "\"2023-10-05T14:48:00.000Z\"");

        let parsed: PointInTime = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, point);

        let err = serde_json::from_str::<PointInTime>("\"2999-01-01T00:00:00Z\"")
            .expect_err("must fail");
        assert!(err.to_string().contains("future"));
    }
}
