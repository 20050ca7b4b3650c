//! IANA timezone resolution and wall-clock rendering in a zone.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use kunai_core::constants::DEFAULT_TIME_ZONE;

use crate::error::{DateError, DateResult};

const LOCALTIME_LINK: &str = "/etc/localtime";
const ZONEINFO_MARKER: &str = "zoneinfo/";

/// ## Summary
/// Resolves an IANA timezone name such as `America/New_York`.
///
/// ## Errors
/// Returns `DateError::UnknownTimeZone` if the name is not in the IANA
/// database.
pub fn resolve_time_zone(name: &str) -> DateResult<Tz> {
    Tz::from_str(name).map_err(|_e| {
        tracing::debug!(name, "Unknown timezone");
        DateError::UnknownTimeZone(name.to_string())
    })
}

/// ## Summary
/// Name of the host's timezone.
///
/// Looks at the `TZ` environment variable first, then at the zone named by
/// the `/etc/localtime` symlink, and falls back to `UTC`. Each candidate must
/// be a known IANA name; one that is not (a POSIX rule string such as
/// `CET-1CEST,M3.5.0,M10.5.0/3`, or a path outside `zoneinfo/`) is skipped
/// and the next source is tried, so the result always resolves.
#[must_use]
pub fn resolve_default_time_zone() -> String {
    let tz_var = std::env::var("TZ").ok();
    host_zone_from(tz_var.as_deref(), Path::new(LOCALTIME_LINK))
}

fn host_zone_from(tz_var: Option<&str>, localtime: &Path) -> String {
    if let Some(name) = tz_var.and_then(zone_from_tz_var).filter(|name| is_known_zone(name)) {
        tracing::debug!(%name, "Host timezone from TZ");
        return name;
    }

    if let Some(name) = zone_from_link(localtime).filter(|name| is_known_zone(name)) {
        tracing::debug!(%name, link = %localtime.display(), "Host timezone from link");
        return name;
    }

    tracing::debug!("Host timezone unknown, using {DEFAULT_TIME_ZONE}");
    DEFAULT_TIME_ZONE.to_string()
}

fn is_known_zone(name: &str) -> bool {
    resolve_time_zone(name).is_ok()
}

/// `TZ` may hold a zone name, optionally prefixed with `:`, or a path to a
/// zoneinfo file or to a link pointing at one.
fn zone_from_tz_var(value: &str) -> Option<String> {
    let name = value.strip_prefix(':').unwrap_or(value).trim();
    if name.is_empty() {
        return None;
    }
    if name.starts_with('/') {
        return zone_from_zoneinfo_path(name).or_else(|| zone_from_link(Path::new(name)));
    }
    Some(name.to_string())
}

fn zone_from_link(link: &Path) -> Option<String> {
    let target = std::fs::read_link(link).ok()?;
    zone_from_zoneinfo_path(&target.to_string_lossy())
}

/// `/usr/share/zoneinfo/Europe/Paris` → `Europe/Paris`.
fn zone_from_zoneinfo_path(path: &str) -> Option<String> {
    let (_, name) = path.rsplit_once(ZONEINFO_MARKER)?;
    (!name.is_empty()).then(|| name.to_string())
}

/// ## Summary
/// Wall-clock time of `instant` in the named zone, as `h:mm:ss AM`.
///
/// ## Errors
/// Returns `DateError::UnknownTimeZone` if `zone` is not an IANA name.
pub fn get_time_in_time_zone<Z: TimeZone>(instant: &DateTime<Z>, zone: &str) -> DateResult<String> {
    let tz = resolve_time_zone(zone)?;
    Ok(instant.with_timezone(&tz).format("%-I:%M:%S %p").to_string())
}

/// `M/D/YYYY, h:mm:ss AM` wall-clock rendering of `instant` in `tz`.
#[must_use]
pub fn format_in_locale<Z: TimeZone>(instant: &DateTime<Z>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).single().expect("instant")
    }

    #[test]
    fn test_resolve_known_zone() {
        assert_eq!(resolve_time_zone("Europe/Paris").expect("zone"), Tz::Europe__Paris);
        assert_eq!(resolve_time_zone("UTC").expect("zone"), Tz::UTC);
    }

    #[test_log::test]
    fn test_resolve_unknown_zone_fails() {
        let result = resolve_time_zone("Mars/Olympus_Mons");

        assert!(matches!(result, Err(DateError::UnknownTimeZone(name)) if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_time_in_new_york() {
        let instant = utc(2024, 1, 15, 15, 0, 0);

        assert_eq!(
            get_time_in_time_zone(&instant, "America/New_York").expect("time"),
            "10:00:00 AM"
        );
        assert_eq!(get_time_in_time_zone(&instant, "UTC").expect("time"), "3:00:00 PM");
    }

    #[test]
    fn test_time_in_unknown_zone_fails() {
        let instant = utc(2024, 1, 15, 15, 0, 0);

        assert!(matches!(
            get_time_in_time_zone(&instant, "Nowhere/Special"),
            Err(DateError::UnknownTimeZone(_))
        ));
    }

    #[test]
    fn test_format_in_locale_uses_summer_offset() {
        let instant = utc(2024, 7, 4, 16, 5, 9);

        assert_eq!(format_in_locale(&instant, Tz::Europe__London), "7/4/2024, 5:05:09 PM");
        assert_eq!(format_in_locale(&instant, Tz::UTC), "7/4/2024, 4:05:09 PM");
    }

    #[test]
    fn test_format_in_locale_midnight_is_twelve() {
        let instant = utc(2024, 12, 31, 0, 0, 0);

        assert_eq!(format_in_locale(&instant, Tz::UTC), "12/31/2024, 12:00:00 AM");
    }

    #[test]
    fn test_tz_var_strips_colon() {
        assert_eq!(zone_from_tz_var(":Asia/Tokyo").as_deref(), Some("Asia/Tokyo"));
        assert_eq!(zone_from_tz_var("Asia/Tokyo").as_deref(), Some("Asia/Tokyo"));
        assert_eq!(zone_from_tz_var(""), None);
        assert_eq!(zone_from_tz_var(":"), None);
    }

    #[test]
    fn test_zone_from_zoneinfo_path() {
        assert_eq!(
            zone_from_zoneinfo_path("/usr/share/zoneinfo/Europe/Paris").as_deref(),
            Some("Europe/Paris")
        );
        assert_eq!(
            zone_from_zoneinfo_path("../usr/share/zoneinfo/UTC").as_deref(),
            Some("UTC")
        );
        assert_eq!(zone_from_zoneinfo_path("/etc/timezone"), None);
        assert_eq!(zone_from_zoneinfo_path("/usr/share/zoneinfo/"), None);
    }

    #[test]
    fn test_missing_link_yields_none() {
        assert_eq!(zone_from_link(Path::new("/nonexistent/kunai/localtime")), None);
    }

    #[test]
    fn test_tz_var_accepts_zoneinfo_paths() {
        assert_eq!(
            zone_from_tz_var("/usr/share/zoneinfo/Europe/Paris").as_deref(),
            Some("Europe/Paris")
        );
        assert_eq!(
            zone_from_tz_var(":/usr/share/zoneinfo/Asia/Tokyo").as_deref(),
            Some("Asia/Tokyo")
        );
    }

    #[test]
    fn test_default_zone_always_resolves() {
        let name = resolve_default_time_zone();

        assert!(resolve_time_zone(&name).is_ok(), "{name} should resolve");
    }

    #[test_log::test]
    fn test_host_zone_skips_unresolvable_tz_values() {
        let no_link = Path::new("/nonexistent/kunai/localtime");

        for tz in [
            "CET-1CEST,M3.5.0,M10.5.0/3",
            ":/nonexistent/kunai/localtime",
            "/opt/zones/Paris",
            "Not/A_Zone",
            "",
        ] {
            assert_eq!(host_zone_from(Some(tz), no_link), DEFAULT_TIME_ZONE, "TZ={tz:?}");
        }
        assert_eq!(host_zone_from(None, no_link), DEFAULT_TIME_ZONE);
    }

    #[test]
    fn test_host_zone_uses_valid_tz_values() {
        let no_link = Path::new("/nonexistent/kunai/localtime");

        assert_eq!(host_zone_from(Some(":Asia/Tokyo"), no_link), "Asia/Tokyo");
        assert_eq!(
            host_zone_from(Some("/usr/share/zoneinfo/Europe/Paris"), no_link),
            "Europe/Paris"
        );
    }

    #[test]
    fn test_unresolvable_host_zone_still_builds_a_calendar() {
        use crate::calendar::CalendarConfig;
        use kunai_core::config::CalendarSettings;

        let settings = CalendarSettings {
            display_format: "YYYY-MM-DD".to_string(),
            time_zone: None,
        };
        let host = host_zone_from(
            Some(":/nonexistent/kunai/localtime"),
            Path::new("/nonexistent/kunai/localtime"),
        );

        let config = CalendarConfig::from_settings(&settings, &host).expect("config");
        assert_eq!(config.time_zone(), Tz::UTC);
    }

    #[test]
    fn test_configured_zone_still_fails_loudly() {
        use crate::calendar::CalendarConfig;
        use kunai_core::config::CalendarSettings;

        let settings = CalendarSettings {
            display_format: "YYYY-MM-DD".to_string(),
            time_zone: Some("CET-1CEST,M3.5.0,M10.5.0/3".to_string()),
        };

        assert!(matches!(
            CalendarConfig::from_settings(&settings, DEFAULT_TIME_ZONE),
            Err(DateError::UnknownTimeZone(_))
        ));
    }
}
