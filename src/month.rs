//! Calendar helpers for budget months and record timestamps.

use time::{Date, Duration, Month, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

/// Format the month containing `date` as `YYYY-MM`.
pub fn format_month(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// The calendar month of `now` as `YYYY-MM`.
pub fn current_month(now: OffsetDateTime) -> String {
    format_month(now.date())
}

/// Format `date_time` as an RFC 3339 timestamp with whole seconds, e.g.
/// `2025-03-14T09:26:53+13:00`.
///
/// # Errors
/// Returns [Error::InvalidTimestamp] if the offset has a seconds component or
/// the year does not have four digits.
pub fn format_timestamp(date_time: OffsetDateTime) -> Result<String, Error> {
    let whole_seconds = date_time - Duration::nanoseconds(i64::from(date_time.nanosecond()));

    Ok(whole_seconds.format(&Rfc3339)?)
}

/// Move `date_time` by `months` calendar months.
///
/// The day of the month is clamped to the length of the target month, so
/// 31 August plus six months is 28 (or 29) February.
///
/// # Errors
/// Returns [Error::InvalidTimestamp] if the result is outside the supported
/// year range.
pub fn add_months(date_time: OffsetDateTime, months: i32) -> Result<OffsetDateTime, Error> {
    let month_index = date_time.year() * 12 + i32::from(u8::from(date_time.month())) - 1 + months;
    let year = month_index.div_euclid(12);
    let month = Month::try_from((month_index.rem_euclid(12) + 1) as u8)?;

    let mut day = date_time.day();
    let date = loop {
        match Date::from_calendar_date(year, month, day) {
            Ok(date) => break date,
            Err(_) if day > 28 => day -= 1,
            Err(error) => return Err(error.into()),
        }
    };

    Ok(date_time.replace_date(date))
}
