use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ParseError;

/// Date-times without an offset; read as UTC.
const NAIVE_DATE_TIMES: [&[BorrowedFormatItem<'static>]; 6] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse text into an absolute UTC instant.
///
/// Accepted, in order: RFC 3339 (`2023-10-05T14:48:00.000Z`, numeric offsets
/// included), ISO 8601 date-times without an offset, a bare `YYYY-MM-DD`
/// date (UTC midnight), and RFC 2822. Surrounding whitespace is ignored.
pub fn parse_date_time(text: &str) -> Result<OffsetDateTime, ParseError> {
    let trimmed = text.trim();

    let parsed = OffsetDateTime::parse(trimmed, &Rfc3339)
        .ok()
        .or_else(|| {
            NAIVE_DATE_TIMES.iter().find_map(|format| {
                PrimitiveDateTime::parse(trimmed, *format)
                    .ok()
                    .map(PrimitiveDateTime::assume_utc)
            })
        })
        .or_else(|| {
            Date::parse(trimmed, DATE_ONLY)
                .ok()
                .map(|date| date.midnight().assume_utc())
        })
        .or_else(|| OffsetDateTime::parse(trimmed, &Rfc2822).ok());

    match parsed {
        Some(instant) => Ok(instant.to_offset(UtcOffset::UTC)),
        None => {
            tracing::debug!(value = text, "text is not a recognized date/time");
            Err(ParseError::new(text))
        }
    }
}
