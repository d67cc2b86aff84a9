use time::{OffsetDateTime, UtcOffset};

use crate::data::{HourCycle, LocaleData};

/// Width requested for a single date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStyle {
    /// Minimal digits (`5`, `2023`).
    Numeric,
    /// Exactly two digits, zero padded; years keep their last two digits.
    TwoDigit,
}

/// The date/time fields to render and how wide each one is.
///
/// Minutes and seconds are always two digits when rendered next to an hour,
/// whatever style is requested for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeFields {
    pub year: FieldStyle,
    pub month: FieldStyle,
    pub day: FieldStyle,
    pub hour: FieldStyle,
    pub minute: FieldStyle,
    pub second: FieldStyle,
}

impl DateTimeFields {
    /// Full year, every other field two digits.
    pub const NUMERIC_YEAR: Self = Self {
        year: FieldStyle::Numeric,
        month: FieldStyle::TwoDigit,
        day: FieldStyle::TwoDigit,
        hour: FieldStyle::TwoDigit,
        minute: FieldStyle::TwoDigit,
        second: FieldStyle::TwoDigit,
    };

    /// Every field two digits, including the year.
    pub const TWO_DIGIT: Self = Self {
        year: FieldStyle::TwoDigit,
        ..Self::NUMERIC_YEAR
    };
}

impl Default for DateTimeFields {
    fn default() -> Self {
        Self::NUMERIC_YEAR
    }
}

pub(crate) fn format_date_time(
    locale: &LocaleData,
    instant: OffsetDateTime,
    fields: DateTimeFields,
) -> String {
    let instant = instant.to_offset(UtcOffset::UTC);
    let pattern = &locale.date_time;
    let hour = instant.hour();

    let mut out = String::with_capacity(pattern.pattern.len() + 8);
    for ch in pattern.pattern.chars() {
        match ch {
            'y' => push_year(&mut out, instant.year(), fields.year),
            'M' => push_field(&mut out, u8::from(instant.month()).into(), fields.month),
            'd' => push_field(&mut out, instant.day().into(), fields.day),
            'H' => push_field(&mut out, hour.into(), fields.hour),
            'h' => {
                let hour12 = match hour % 12 {
                    0 => 12,
                    other => other,
                };
                push_field(&mut out, hour12.into(), fields.hour);
            }
            'm' => push_field(&mut out, instant.minute().into(), FieldStyle::TwoDigit),
            's' => push_field(&mut out, instant.second().into(), FieldStyle::TwoDigit),
            'a' => match pattern.hour_cycle {
                HourCycle::H12 if hour < 12 => out.push_str(pattern.am),
                HourCycle::H12 => out.push_str(pattern.pm),
                HourCycle::H23 => {}
            },
            other => out.push(other),
        }
    }
    out
}

fn push_year(out: &mut String, year: i32, style: FieldStyle) {
    match style {
        FieldStyle::Numeric => out.push_str(&year.to_string()),
        FieldStyle::TwoDigit => out.push_str(&format!("{:02}", year.rem_euclid(100))),
    }
}

fn push_field(out: &mut String, value: u32, style: FieldStyle) {
    match style {
        FieldStyle::Numeric => out.push_str(&value.to_string()),
        FieldStyle::TwoDigit => out.push_str(&format!("{value:02}")),
    }
}
