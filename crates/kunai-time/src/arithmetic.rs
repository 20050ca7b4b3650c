//! Calendar-field arithmetic with natural overflow.
//!
//! Every operation here adds a signed delta to a calendar field and lets the
//! excess carry into the next field instead of clamping. `roll_date` is the
//! single place where that carry happens.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{DateError, DateResult};

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Sunday 00:00:00.000 through Saturday 23:59:59.999 of one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Midnight of the first and of the last day of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

pub(crate) fn out_of_range(what: impl Display) -> DateError {
    DateError::OutOfRange(what.to_string())
}

/// Last representable millisecond of a day.
pub(crate) fn end_of_day() -> NaiveTime {
    NaiveTime::MIN + TimeDelta::milliseconds(MS_PER_DAY - 1)
}

/// ## Summary
/// Builds a date from possibly out-of-range fields, carrying the excess.
///
/// `month0` is zero-based and may be negative or above 11; `day` may be zero
/// or negative (day 0 is the last day of the previous month) or larger than
/// the month.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub(crate) fn roll_date(year: i64, month0: i64, day: i64) -> DateResult<NaiveDate> {
    let carried_year = year
        .checked_add(month0.div_euclid(12))
        .ok_or_else(|| out_of_range(format!("year {year} + month {month0}")))?;
    let month = month0.rem_euclid(12) + 1;

    let first = i32::try_from(carried_year)
        .ok()
        .zip(u32::try_from(month).ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
        .ok_or_else(|| out_of_range(format!("year {carried_year}")))?;

    let offset = day
        .checked_sub(1)
        .ok_or_else(|| out_of_range(format!("day {day}")))?;
    shift_days(first, offset)
}

/// Moves `date` by a signed number of days.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> DateResult<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| out_of_range(format!("{date} + {days} days")))
}

fn negate(value: i64) -> DateResult<i64> {
    value
        .checked_neg()
        .ok_or_else(|| out_of_range(format!("-({value})")))
}

/// Gregorian leap year: divisible by 4 and not by 100, unless by 400.
#[must_use]
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of a month; `month` must be in `1..=12`.
pub(crate) const fn month_length(year: i64, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// ## Summary
/// Number of days in `month` (1-based) of `year`.
///
/// Months past 12 carry into following years, so month 13 of 2024 is
/// January 2025.
///
/// The month is 1-based, unlike 0-based month APIs such as `Datelike::month0`:
/// `get_days_in_month(2024, 2)` is February (29), and `(2024, 1)` is January
/// (31). Month 0 is December of the previous year.
#[must_use]
pub fn get_days_in_month(year: i32, month: u32) -> u32 {
    let month0 = i64::from(month) - 1;
    let year = i64::from(year) + month0.div_euclid(12);
    let month = month0.rem_euclid(12) + 1;
    // rem_euclid(12) + 1 is always in 1..=12
    month_length(year, u32::try_from(month).unwrap_or(1))
}

/// Total milliseconds in the given hours, minutes and seconds, saturating at
/// the bounds of `i64`.
#[must_use]
pub const fn convert_to_milliseconds(hours: i64, minutes: i64, seconds: i64) -> i64 {
    hours
        .saturating_mul(MS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(MS_PER_MINUTE))
        .saturating_add(seconds.saturating_mul(MS_PER_SECOND))
}

/// ## Summary
/// Adds a signed number of days, keeping the time of day.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn add_days(date: NaiveDateTime, days: i64) -> DateResult<NaiveDateTime> {
    Ok(shift_days(date.date(), days)?.and_time(date.time()))
}

/// ## Summary
/// The date `days` days after `date`.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn get_next_date(date: NaiveDateTime, days: i64) -> DateResult<NaiveDateTime> {
    add_days(date, days)
}

/// ## Summary
/// The date `days` days before `date`.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn get_previous_date(date: NaiveDateTime, days: i64) -> DateResult<NaiveDateTime> {
    get_next_date(date, negate(days)?)
}

/// ## Summary
/// Adds signed hours, minutes and seconds, rolling over into days, months
/// and years as needed.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn add_time(
    date: NaiveDateTime,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> DateResult<NaiveDateTime> {
    hours
        .checked_mul(3_600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| out_of_range(format!("{date} + {hours}h {minutes}m {seconds}s")))
}

/// ## Summary
/// Subtracts hours, minutes and seconds; [`add_time`] with negated inputs.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn subtract_time(
    date: NaiveDateTime,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> DateResult<NaiveDateTime> {
    add_time(date, negate(hours)?, negate(minutes)?, negate(seconds)?)
}

fn shift_months(date: NaiveDateTime, months: i64) -> DateResult<NaiveDateTime> {
    let month0 = i64::from(date.month0()) + months;
    let rolled = roll_date(i64::from(date.year()), month0, i64::from(date.day()))?;
    Ok(rolled.and_time(date.time()))
}

/// ## Summary
/// Same day-of-month one month later, overflowing into the month after when
/// the target month is shorter: January 31, 2023 becomes March 3, 2023.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn get_next_month(date: NaiveDateTime) -> DateResult<NaiveDateTime> {
    shift_months(date, 1)
}

/// ## Summary
/// Same day-of-month one month earlier, with the same overflow rule as
/// [`get_next_month`]: March 31, 2023 becomes March 3, 2023.
///
/// ## Errors
/// Returns `DateError::OutOfRange` if the result is not representable.
pub fn get_previous_month(date: NaiveDateTime) -> DateResult<NaiveDateTime> {
    shift_months(date, -1)
}

/// Midnight at the start of the same day.
#[must_use]
pub fn get_start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of the same day.
#[must_use]
pub fn get_end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(end_of_day())
}

/// ## Summary
/// Sunday-to-Saturday week containing `date`.
///
/// ## Errors
/// Returns `DateError::OutOfRange` at the edges of the representable range.
pub fn get_week_start_and_end(date: NaiveDateTime) -> DateResult<WeekBounds> {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let start = shift_days(date.date(), -weekday)?.and_time(NaiveTime::MIN);
    let end = shift_days(date.date(), 6 - weekday)?.and_time(end_of_day());
    Ok(WeekBounds { start, end })
}

/// ## Summary
/// First and last day of the month containing `date`, both at midnight.
///
/// ## Errors
/// Returns `DateError::OutOfRange` at the edges of the representable range.
pub fn get_first_and_last_day_of_month(date: NaiveDateTime) -> DateResult<MonthBounds> {
    let year = i64::from(date.year());
    let month0 = i64::from(date.month0());
    let first = roll_date(year, month0, 1)?.and_time(NaiveTime::MIN);
    let last = roll_date(year, month0 + 1, 0)?.and_time(NaiveTime::MIN);
    Ok(MonthBounds { first, last })
}
