//! Week numbering, weekends, business days and fixed-date holidays.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::arithmetic::{add_days, out_of_range, shift_days};
use crate::error::DateResult;

/// Holidays observed every year, as `MM-DD`.
const BUILTIN_HOLIDAYS: [&str; 2] = [
    "01-01", // New Year's Day
    "12-25", // Christmas Day
];

/// Weekday of January 1 of the date's year, Sunday = 0.
fn jan1_weekday(date: &impl Datelike) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    (weekday + 7 - date.ordinal0() % 7) % 7
}

/// ## Summary
/// Week of the year, counting Sunday-started weeks from January 1.
///
/// Computed as `ceil((days_since_jan1 + jan1_weekday + 1) / 7)` with Sunday
/// as weekday 0. The week containing January 1 is week 1 whatever weekday it
/// falls on, so this is not ISO-8601 week numbering and differs from it
/// around the turn of the year.
#[must_use]
pub fn get_week_number(date: &impl Datelike) -> u32 {
    (date.ordinal0() + jan1_weekday(date) + 1).div_ceil(7)
}

/// ## Summary
/// Date reached by stepping `(week - 1) * 7 + day - jan1_weekday` days from
/// January 1 of `year`, at midnight.
///
/// With `day = 1` this is the Monday of the given week when January 1 is a
/// Sunday through Monday, and can fall in the previous year otherwise. It is
/// not an exact inverse of [`get_week_number`].
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the year or the result is not
/// representable.
pub fn get_date_from_week_number(year: i32, week: i64, day: i64) -> DateResult<NaiveDateTime> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| out_of_range(format!("year {year}")))?;
    let offset = week
        .checked_sub(1)
        .and_then(|w| w.checked_mul(7))
        .and_then(|days| days.checked_add(day))
        .and_then(|days| days.checked_sub(i64::from(jan1.weekday().num_days_from_sunday())))
        .ok_or_else(|| out_of_range(format!("week {week} day {day}")))?;
    Ok(shift_days(jan1, offset)?.and_time(NaiveTime::MIN))
}

/// Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: &impl Datelike) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// The first day after `date` that is not a Saturday or Sunday, keeping the
/// time of day. Holidays are not considered.
///
/// ## Errors
/// Returns `DateError::OutOfRange` at the end of the representable range.
pub fn get_next_business_day(date: NaiveDateTime) -> DateResult<NaiveDateTime> {
    let mut next = add_days(date, 1)?;
    while is_weekend(&next) {
        next = add_days(next, 1)?;
    }
    Ok(next)
}

/// ## Summary
/// Counts weekdays stepping one day at a time from `start` while the step is
/// not later than `end`.
///
/// Both endpoints are included when they are weekdays. The comparison uses
/// the full date-time, so Monday 10:00 to Friday 09:00 counts four days, not
/// five. Returns 0 when `start` is after `end`.
#[must_use]
pub fn calculate_business_days(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if !is_weekend(&current) {
            count += 1;
        }
        match add_days(current, 1) {
            Ok(next) => current = next,
            Err(_) => break,
        }
    }
    count
}

/// ## Summary
/// Whether the month and day of `date` is a holiday.
///
/// January 1 and December 25 are always holidays; `extra_holidays` adds more
/// as `MM-DD` strings. The year is ignored, so a holiday recurs every year.
/// Strings not in `MM-DD` form never match.
#[must_use]
pub fn is_public_holiday<S: AsRef<str>>(date: &impl Datelike, extra_holidays: &[S]) -> bool {
    let key = format!("{:02}-{:02}", date.month(), date.day());
    BUILTIN_HOLIDAYS.contains(&key.as_str())
        || extra_holidays.iter().any(|holiday| holiday.as_ref() == key)
}
