//! Differences between dates and age calculations.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone};

use crate::arithmetic::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, month_length};

/// Whole hours and the remaining minutes between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDifference {
    pub hours: i64,
    pub minutes: i64,
}

/// Whole days, remaining hours and remaining minutes between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedTimeDifference {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Signed milliseconds from `start` to `end`, unrounded.
#[must_use]
pub fn get_difference_in_milliseconds(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_milliseconds()
}

/// ## Summary
/// Days from `start` to `end`, rounded up.
///
/// The millisecond difference is divided by the length of a day and rounded
/// towards positive infinity, so any partial day forward counts as a full
/// day: January 1 00:00 to January 2 01:00 is 2 days, and the reverse is -1.
#[must_use]
pub fn difference_in_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let ms = get_difference_in_milliseconds(start, end);
    ms.div_euclid(MS_PER_DAY) + i64::from(ms.rem_euclid(MS_PER_DAY) != 0)
}

/// ## Summary
/// Splits the span from `start` to `end` into hours and minutes.
///
/// Hours are floored. Minutes are the truncated remainder of the hour,
/// floored, so a span of minus 90 minutes is `{ hours: -2, minutes: -30 }`.
#[must_use]
pub fn calculate_time_difference(start: NaiveDateTime, end: NaiveDateTime) -> TimeDifference {
    let ms = get_difference_in_milliseconds(start, end);
    TimeDifference {
        hours: ms.div_euclid(MS_PER_HOUR),
        minutes: (ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
    }
}

/// Same as [`calculate_time_difference`] with whole days split off first.
#[must_use]
pub fn calculate_detailed_time_difference(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> DetailedTimeDifference {
    let ms = get_difference_in_milliseconds(start, end);
    DetailedTimeDifference {
        days: ms.div_euclid(MS_PER_DAY),
        hours: (ms % MS_PER_DAY).div_euclid(MS_PER_HOUR),
        minutes: (ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
    }
}

/// ## Summary
/// Age in whole years on `today`.
///
/// The year difference, minus one when the birthday has not yet come round
/// in `today`'s year.
#[must_use]
pub fn calculate_age_on(birth: &impl Datelike, today: &impl Datelike) -> i32 {
    let age = today.year() - birth.year();
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    if before_birthday { age - 1 } else { age }
}

/// ## Summary
/// Age in years, months and days on `today`.
///
/// When the day of month has not been reached, one month is borrowed and the
/// length of the month immediately before `today`'s month is added to the
/// days. The birth month plays no part in the borrow, so a borrow from a
/// short February can still leave a negative day count for late-month
/// birthdays.
#[must_use]
pub fn calculate_detailed_age_on(birth: &impl Datelike, today: &impl Datelike) -> DetailedAge {
    let mut years = today.year() - birth.year();
    let mut months = signed(today.month()) - signed(birth.month());
    let mut days = signed(today.day()) - signed(birth.day());

    if days < 0 {
        months -= 1;
        let (year, month) = if today.month() == 1 {
            (i64::from(today.year()) - 1, 12)
        } else {
            (i64::from(today.year()), today.month() - 1)
        };
        days += signed(month_length(year, month));
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    DetailedAge {
        years,
        months,
        days,
    }
}

/// Month and day numbers are tiny, so the conversion never saturates.
fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Whole seconds since the Unix epoch, floored.
#[must_use]
pub fn to_unix_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    instant.timestamp()
}

/// Whether `date` falls on the same calendar day as `today`.
#[must_use]
pub fn is_today_on(date: &impl Datelike, today: &impl Datelike) -> bool {
    date.year() == today.year() && date.month() == today.month() && date.day() == today.day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::tests::{at, day};
    use chrono::Utc;

    #[test]
    fn test_difference_in_days_rounds_up() {
        assert_eq!(difference_in_days(day(2024, 1, 1), day(2024, 1, 3)), 2);
        assert_eq!(difference_in_days(day(2024, 1, 1), at(2024, 1, 2, 1, 0, 0)), 2);
        assert_eq!(difference_in_days(day(2024, 1, 3), day(2024, 1, 1)), -2);
        assert_eq!(difference_in_days(at(2024, 1, 2, 1, 0, 0), day(2024, 1, 1)), -1);
        assert_eq!(difference_in_days(day(2024, 1, 1), day(2024, 1, 1)), 0);
    }

    #[test]
    fn test_difference_in_milliseconds_is_signed() {
        let start = at(2024, 1, 1, 0, 0, 0);
        let end = at(2024, 1, 1, 0, 0, 2);

        assert_eq!(get_difference_in_milliseconds(start, end), 2_000);
        assert_eq!(get_difference_in_milliseconds(end, start), -2_000);
    }

    #[test]
    fn test_time_difference() {
        let start = at(2024, 1, 1, 10, 0, 0);

        assert_eq!(
            calculate_time_difference(start, at(2024, 1, 1, 11, 30, 0)),
            TimeDifference {
                hours: 1,
                minutes: 30
            }
        );
        assert_eq!(
            calculate_time_difference(start, at(2024, 1, 1, 8, 30, 0)),
            TimeDifference {
                hours: -2,
                minutes: -30
            }
        );
    }

    #[test]
    fn test_detailed_time_difference() {
        assert_eq!(
            calculate_detailed_time_difference(day(2024, 1, 1), at(2024, 1, 3, 5, 45, 0)),
            DetailedTimeDifference {
                days: 2,
                hours: 5,
                minutes: 45
            }
        );
    }

    #[test]
    fn test_age_before_and_on_birthday() {
        let birth = day(2000, 6, 15);

        assert_eq!(calculate_age_on(&birth, &day(2024, 6, 14)), 23);
        assert_eq!(calculate_age_on(&birth, &day(2024, 6, 15)), 24);
        assert_eq!(calculate_age_on(&birth, &day(2024, 12, 1)), 24);
    }

    #[test]
    fn test_detailed_age_borrows_month_before_today() {
        let birth = day(2000, 1, 20);

        // February 2024 has 29 days; January (the birth month) would give 21
        assert_eq!(
            calculate_detailed_age_on(&birth, &day(2024, 3, 10)),
            DetailedAge {
                years: 24,
                months: 1,
                days: 19
            }
        );
        assert_eq!(
            calculate_detailed_age_on(&birth, &day(2023, 3, 10)),
            DetailedAge {
                years: 23,
                months: 1,
                days: 18
            }
        );
    }

    #[test]
    fn test_detailed_age_borrows_december_in_january() {
        assert_eq!(
            calculate_detailed_age_on(&day(1990, 8, 25), &day(2024, 1, 5)),
            DetailedAge {
                years: 33,
                months: 4,
                days: 11
            }
        );
    }

    #[test]
    fn test_detailed_age_can_go_negative_after_short_month() {
        assert_eq!(
            calculate_detailed_age_on(&day(1990, 3, 31), &day(2024, 3, 1)),
            DetailedAge {
                years: 33,
                months: 11,
                days: -1
            }
        );
    }

    #[test]
    fn test_unix_timestamp_floors() {
        let after = Utc.timestamp_millis_opt(1_500).single().expect("instant");
        let before = Utc.timestamp_millis_opt(-500).single().expect("instant");

        assert_eq!(to_unix_timestamp(&after), 1);
        assert_eq!(to_unix_timestamp(&before), -1);
    }

    #[test]
    fn test_is_today_on_ignores_time() {
        let today = at(2026, 10, 16, 8, 0, 0);

        assert!(is_today_on(&at(2026, 10, 16, 23, 59, 0), &today));
        assert!(!is_today_on(&day(2025, 10, 16), &today));
    }
}
