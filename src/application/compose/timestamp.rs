// SPDX-License-Identifier: MPL-2.0
//! Rendering of confirmation timestamps.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Time zone confirmations are rendered in unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// en-IN rendering: day-first without zero padding, 12-hour clock with a
/// lowercase meridiem (`5/1/2024 9:15:05 am`).
const TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y %-I:%M:%S %P";

/// Renders an instant in the given time zone.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>, timezone: Tz) -> String {
    at.with_timezone(&timezone)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Parses an IANA time zone name such as `Asia/Kolkata`.
#[must_use]
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_in_kolkata_by_default() {
        let at = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(at, DEFAULT_TIMEZONE), "16/1/2024 2:30:00 pm");
    }

    #[test]
    fn morning_hours_are_not_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 3, 45, 5).unwrap();
        assert_eq!(format_timestamp(at, DEFAULT_TIMEZONE), "15/1/2024 9:15:05 am");
    }

    #[test]
    fn day_and_month_are_not_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 3, 45, 5).unwrap();
        assert_eq!(format_timestamp(at, DEFAULT_TIMEZONE), "5/1/2024 9:15:05 am");

        let at = Utc.with_ymd_and_hms(2024, 11, 30, 18, 0, 0).unwrap();
        assert_eq!(format_timestamp(at, DEFAULT_TIMEZONE), "30/11/2024 11:30:00 pm");
    }

    #[test]
    fn other_zones_shift_the_wall_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(at, chrono_tz::UTC), "16/1/2024 9:00:00 am");
    }

    #[test]
    fn parse_timezone_accepts_iana_names_only() {
        assert_eq!(parse_timezone("Asia/Kolkata"), Some(DEFAULT_TIMEZONE));
        assert_eq!(parse_timezone(" Europe/Paris "), Some(chrono_tz::Europe::Paris));
        assert_eq!(parse_timezone("Mars/Olympus"), None);
    }
}
