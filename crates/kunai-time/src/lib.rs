//! Calendar arithmetic, formatting and timezone projection.
//!
//! ## Summary
//! Calendar values are wall-clock [`chrono::NaiveDateTime`]s. Arithmetic adds
//! a signed delta to one calendar field and lets the result roll over into
//! the neighbouring fields, so January 31 plus one month is March 3 (or
//! March 2 in a leap year) rather than being clamped to the end of February.
//! Absolute instants are [`chrono::DateTime`]s and are only used for ISO
//! rendering, Unix timestamps and projection into a named IANA zone.

pub mod arithmetic;
pub mod calendar;
pub mod difference;
pub mod error;
pub mod format;
pub mod week;
pub mod zone;

pub use arithmetic::{
    MonthBounds, WeekBounds, add_days, add_time, convert_to_milliseconds, get_days_in_month,
    get_end_of_day, get_first_and_last_day_of_month, get_next_date, get_next_month,
    get_previous_date, get_previous_month, get_start_of_day, get_week_start_and_end,
    is_leap_year, subtract_time,
};
pub use calendar::CalendarConfig;
pub use difference::{
    DetailedAge, DetailedTimeDifference, TimeDifference, calculate_age_on,
    calculate_detailed_age_on, calculate_detailed_time_difference, calculate_time_difference,
    difference_in_days, get_difference_in_milliseconds, is_today_on, to_unix_timestamp,
};
pub use error::{DateError, DateResult};
pub use format::{
    DisplayFormat, convert_to_utc_offset, format_as_iso, format_date, get_day_of_week,
    get_month_name, parse_date, parse_iso,
};
pub use week::{
    calculate_business_days, get_date_from_week_number, get_next_business_day, get_week_number,
    is_public_holiday, is_weekend,
};
pub use zone::{
    format_in_locale, get_time_in_time_zone, resolve_default_time_zone, resolve_time_zone,
};
