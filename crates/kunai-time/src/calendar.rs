//! A display format and a timezone resolved once, and the operations that
//! depend on "now" evaluated against them.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use kunai_core::config::CalendarSettings;
use kunai_core::error::CoreError;

use crate::difference::{DetailedAge, calculate_age_on, calculate_detailed_age_on, is_today_on};
use crate::error::DateResult;
use crate::format::DisplayFormat;
use crate::zone::{format_in_locale, resolve_time_zone};

/// ## Summary
/// Immutable calendar settings: how dates are displayed and which zone
/// "today" is evaluated in.
///
/// The zone is resolved when the value is built, so an unknown zone name
/// fails there and never later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    display_format: DisplayFormat,
    time_zone: Tz,
}

impl CalendarConfig {
    /// ## Summary
    /// Builds a config for the given format and IANA zone name.
    ///
    /// ## Errors
    /// Returns `DateError::UnknownTimeZone` if `time_zone` is not an IANA name.
    pub fn new(display_format: DisplayFormat, time_zone: &str) -> DateResult<Self> {
        Ok(Self {
            display_format,
            time_zone: resolve_time_zone(time_zone)?,
        })
    }

    /// ## Summary
    /// Builds a config from loaded settings.
    ///
    /// The configured zone wins; `host_zone` is used when the settings leave
    /// it unset.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` (wrapped in `DateError`) for
    /// an unrecognized display format, and `DateError::UnknownTimeZone` if the
    /// chosen zone is not an IANA name.
    pub fn from_settings(settings: &CalendarSettings, host_zone: &str) -> DateResult<Self> {
        let display_format: DisplayFormat = settings.display_format.parse().map_err(|_e| {
            CoreError::InvalidConfiguration(format!(
                "calendar.display_format: unknown format {:?}",
                settings.display_format
            ))
        })?;
        let time_zone = settings.time_zone.as_deref().unwrap_or(host_zone);

        tracing::debug!(%display_format, time_zone, "Calendar configured");
        Self::new(display_format, time_zone)
    }

    #[must_use]
    pub const fn display_format(&self) -> DisplayFormat {
        self.display_format
    }

    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The current instant in the configured zone.
    #[must_use]
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.time_zone)
    }

    /// Today's calendar date in the configured zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The current date and time as `M/D/YYYY, h:mm:ss AM` in the configured
    /// zone.
    #[must_use]
    pub fn get_current_date_time(&self) -> String {
        self.date_time_at(&Utc::now())
    }

    /// `instant` as `M/D/YYYY, h:mm:ss AM` in the configured zone.
    #[must_use]
    pub fn date_time_at(&self, instant: &DateTime<Utc>) -> String {
        format_in_locale(instant, self.time_zone)
    }

    #[must_use]
    pub fn format(&self, date: &impl Datelike) -> String {
        self.display_format.format(date)
    }

    /// ## Summary
    /// Parses a date in the configured display format.
    ///
    /// ## Errors
    /// See [`DisplayFormat::parse`].
    pub fn parse(&self, input: &str) -> DateResult<NaiveDateTime> {
        self.display_format.parse(input)
    }

    #[must_use]
    pub fn is_today(&self, date: &impl Datelike) -> bool {
        is_today_on(date, &self.today())
    }

    /// Age in whole years as of today.
    #[must_use]
    pub fn calculate_age(&self, birth: &impl Datelike) -> i32 {
        calculate_age_on(birth, &self.today())
    }

    #[must_use]
    pub fn calculate_detailed_age(&self, birth: &impl Datelike) -> DetailedAge {
        calculate_detailed_age_on(birth, &self.today())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            display_format: DisplayFormat::default(),
            time_zone: Tz::UTC,
        }
    }
}
