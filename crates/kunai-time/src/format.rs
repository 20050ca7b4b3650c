//! Date display formats, ISO-8601 rendering and name lookups.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc, Weekday,
};

use crate::arithmetic::roll_date;
use crate::error::{DateError, DateResult};

/// The three supported day/month/year layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayFormat {
    /// `YYYY-MM-DD`
    #[default]
    Ymd,
    /// `DD/MM/YYYY`
    Dmy,
    /// `MM-DD-YYYY`
    Mdy,
}

impl DisplayFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ymd => "YYYY-MM-DD",
            Self::Dmy => "DD/MM/YYYY",
            Self::Mdy => "MM-DD-YYYY",
        }
    }

    /// Parses a tag, falling back to [`DisplayFormat::Ymd`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_err: DateError| {
            tracing::trace!(tag, "Unknown display format, using YYYY-MM-DD");
            Self::default()
        })
    }

    const fn separator(self) -> char {
        match self {
            Self::Ymd | Self::Mdy => '-',
            Self::Dmy => '/',
        }
    }

    /// Positions of (year, month, day) among the separated components.
    const fn positions(self) -> (usize, usize, usize) {
        match self {
            Self::Ymd => (0, 1, 2),
            Self::Dmy => (2, 1, 0),
            Self::Mdy => (2, 0, 1),
        }
    }

    /// ## Summary
    /// Renders the calendar date of `date` in this layout.
    ///
    /// Month and day are zero-padded to two digits; the year is printed as is.
    #[must_use]
    pub fn format(self, date: &impl Datelike) -> String {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        match self {
            Self::Ymd => format!("{year}-{month:02}-{day:02}"),
            Self::Dmy => format!("{day:02}/{month:02}/{year}"),
            Self::Mdy => format!("{month:02}-{day:02}-{year}"),
        }
    }

    /// ## Summary
    /// Parses a date written in this layout, at midnight.
    ///
    /// Components are trimmed and an empty component reads as zero. Values
    /// outside their natural range roll over: month 13 is January of the
    /// following year and day 0 is the last day of the previous month.
    /// Components beyond the third are ignored.
    ///
    /// ## Errors
    /// Returns `DateError::InvalidComponent` if a component is missing or is
    /// not an integer, and `DateError::OutOfRange` if the rolled-over date is
    /// not representable.
    pub fn parse(self, input: &str) -> DateResult<NaiveDateTime> {
        let components: Vec<&str> = input.split(self.separator()).collect();
        let (year_at, month_at, day_at) = self.positions();

        let year = component(input, &components, year_at)?;
        let month = component(input, &components, month_at)?;
        let day = component(input, &components, day_at)?;

        let month0 = month
            .checked_sub(1)
            .ok_or_else(|| DateError::OutOfRange(format!("month {month}")))?;
        Ok(roll_date(year, month0, day)?.and_time(NaiveTime::MIN))
    }
}

fn component(input: &str, components: &[&str], index: usize) -> DateResult<i64> {
    let invalid = |component: &str| DateError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };

    let raw = components.get(index).ok_or_else(|| invalid(""))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<i64>().map_err(|_e| invalid(trimmed))
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YYYY-MM-DD" => Ok(Self::Ymd),
            "DD/MM/YYYY" => Ok(Self::Dmy),
            "MM-DD-YYYY" => Ok(Self::Mdy),
            other => Err(DateError::InvalidFormat(other.to_string())),
        }
    }
}

/// ## Summary
/// Formats `date` with the layout named by `format`.
///
/// Unrecognized tags are not an error: they silently render as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: &impl Datelike, format: &str) -> String {
    DisplayFormat::from_tag_or_default(format).format(date)
}

/// ## Summary
/// Parses `input` with the layout named by `format`.
///
/// ## Errors
/// Returns `DateError::InvalidFormat` for an unrecognized tag, otherwise the
/// errors of [`DisplayFormat::parse`].
pub fn parse_date(input: &str, format: &str) -> DateResult<NaiveDateTime> {
    let format: DisplayFormat = format.parse()?;
    format.parse(input)
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, always in UTC.
#[must_use]
pub fn format_as_iso<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

const NAIVE_ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// ## Summary
/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a date-time without offset (read as UTC)
/// and a bare `YYYY-MM-DD` date (UTC midnight).
///
/// ## Errors
/// Returns `DateError::InvalidIso` if none of the accepted shapes match.
pub fn parse_iso(input: &str) -> DateResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_ISO_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|error| {
            tracing::debug!(input, %error, "Unparseable ISO-8601 timestamp");
            DateError::InvalidIso(input.to_string())
        })
}

/// English name of the weekday, e.g. `"Sunday"`.
#[must_use]
pub fn get_day_of_week(date: &impl Datelike) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// English name of the month, e.g. `"January"`.
#[must_use]
pub fn get_month_name(date: &impl Datelike) -> &'static str {
    match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// `UTC±HH:MM` for an offset given in minutes east of UTC.
#[must_use]
pub fn convert_to_utc_offset(offset_minutes: i64) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let magnitude = offset_minutes.unsigned_abs();
    format!("UTC{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::tests::{at, day};

    #[test]
    fn test_format_date_layouts() {
        let date = day(2024, 1, 5);

        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date, "DD/MM/YYYY"), "05/01/2024");
        assert_eq!(format_date(&date, "MM-DD-YYYY"), "01-05-2024");
    }

    #[test_log::test]
    fn test_format_date_falls_back_silently() {
        assert_eq!(format_date(&day(2024, 1, 5), "YYYY/DD/MM"), "2024-01-05");
        assert_eq!(format_date(&day(2024, 1, 5), ""), "2024-01-05");
    }

    #[test]
    fn test_format_date_does_not_pad_year() {
        assert_eq!(format_date(&day(999, 3, 7), "YYYY-MM-DD"), "999-03-07");
    }

    #[test]
    fn test_parse_date_layouts() {
        let expected = day(2024, 1, 5);

        assert_eq!(parse_date("2024-01-05", "YYYY-MM-DD").expect("ymd"), expected);
        assert_eq!(parse_date("05/01/2024", "DD/MM/YYYY").expect("dmy"), expected);
        assert_eq!(parse_date("01-05-2024", "MM-DD-YYYY").expect("mdy"), expected);
    }

    #[test]
    fn test_parse_date_unknown_format_fails() {
        assert!(matches!(
            parse_date("x", "UNKNOWN"),
            Err(DateError::InvalidFormat(tag)) if tag == "UNKNOWN"
        ));
    }

    #[test]
    fn test_parse_date_rolls_over_out_of_range_fields() {
        assert_eq!(parse_date("2024-13-01", "YYYY-MM-DD").expect("roll"), day(2025, 1, 1));
        assert_eq!(parse_date("2024-03-00", "YYYY-MM-DD").expect("roll"), day(2024, 2, 29));
        assert_eq!(parse_date("31/02/2023", "DD/MM/YYYY").expect("roll"), day(2023, 3, 3));
        assert_eq!(parse_date("2024--05", "YYYY-MM-DD").expect("roll"), day(2023, 12, 5));
    }

    #[test]
    fn test_parse_date_is_lenient_about_whitespace_and_extras() {
        assert_eq!(parse_date(" 2024 - 1 - 5 ", "YYYY-MM-DD").expect("trim"), day(2024, 1, 5));
        assert_eq!(parse_date("2024-01-05-99", "YYYY-MM-DD").expect("extra"), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_date_rejects_bad_components() {
        assert!(matches!(
            parse_date("2024-01", "YYYY-MM-DD"),
            Err(DateError::InvalidComponent { .. })
        ));
        assert!(matches!(
            parse_date("2024-jan-05", "YYYY-MM-DD"),
            Err(DateError::InvalidComponent { component, .. }) if component == "jan"
        ));
    }

    #[test]
    fn test_display_format_round_trip_of_tags() {
        for format in [DisplayFormat::Ymd, DisplayFormat::Dmy, DisplayFormat::Mdy] {
            assert_eq!(format.to_string().parse::<DisplayFormat>().ok(), Some(format));
        }
        assert_eq!(DisplayFormat::from_tag_or_default("nope"), DisplayFormat::Ymd);
    }

    #[test]
    fn test_iso_format_and_parse() {
        let instant = at(2024, 1, 5, 0, 0, 0).and_utc();

        assert_eq!(format_as_iso(&instant), "2024-01-05T00:00:00.000Z");
        assert_eq!(parse_iso("2024-01-05T00:00:00.000Z").expect("iso"), instant);
        assert_eq!(parse_iso("2024-01-05").expect("date only"), instant);
        assert_eq!(
            parse_iso("2024-01-05T10:00:00+02:00").expect("offset"),
            at(2024, 1, 5, 8, 0, 0).and_utc()
        );
        assert_eq!(
            parse_iso("2024-01-05T10:30").expect("no seconds"),
            at(2024, 1, 5, 10, 30, 0).and_utc()
        );
        assert!(matches!(parse_iso("yesterday"), Err(DateError::InvalidIso(_))));
    }

    #[test]
    fn test_names() {
        assert_eq!(get_day_of_week(&day(2024, 1, 5)), "Friday");
        assert_eq!(get_day_of_week(&day(2023, 1, 1)), "Sunday");
        assert_eq!(get_month_name(&day(2024, 1, 5)), "January");
        assert_eq!(get_month_name(&day(2024, 12, 5)), "December");
    }

    #[test]
    fn test_utc_offset() {
        assert_eq!(convert_to_utc_offset(330), "UTC+05:30");
        assert_eq!(convert_to_utc_offset(-480), "UTC-08:00");
        assert_eq!(convert_to_utc_offset(0), "UTC+00:00");
        assert_eq!(convert_to_utc_offset(-30), "UTC-00:30");
    }
}
