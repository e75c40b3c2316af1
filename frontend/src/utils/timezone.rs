use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

fn parse_tz(tz_str: &str) -> Tz {
    tz_str.parse().unwrap_or(chrono_tz::UTC)
}

/// Get "today" in the configured timezone (for past-date checks)
pub fn today_in_tz(tz_str: &str) -> NaiveDate {
    Utc::now().with_timezone(&parse_tz(tz_str)).date_naive()
}

/// Format a stay date (e.g., "Jun 15, 2024")
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a check-in/check-out pair (e.g., "Jun 15, 2024 – Jun 20, 2024")
pub fn format_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    format!("{} – {}", format_date(check_in), format_date(check_out))
}

/// Convert a booking timestamp to the configured timezone for display
pub fn format_datetime(dt: DateTime<Utc>, tz_str: &str) -> String {
    dt.with_timezone(&parse_tz(tz_str))
        .format("%b %d, %Y %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_date(date), "Jun 05, 2024");
    }

    #[test]
    fn test_format_stay() {
        let check_in = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(format_stay(check_in, check_out), "Jun 15, 2024 – Jun 20, 2024");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();

        // UTC should stay the same
        assert_eq!(format_datetime(dt, "UTC"), "Jan 15, 2024 12:30");

        // Belgrade is UTC+1 in January
        assert_eq!(format_datetime(dt, "Europe/Belgrade"), "Jan 15, 2024 13:30");
    }

    #[test]
    fn test_invalid_timezone_defaults_to_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(format_datetime(dt, "Invalid/Timezone"), "Jan 15, 2024 12:30");
    }

    #[test]
    fn test_today_matches_utc_date_within_a_day() {
        let utc_today = Utc::now().date_naive();
        let belgrade_today = today_in_tz("Europe/Belgrade");
        assert!((belgrade_today - utc_today).num_days().abs() <= 1);
    }
}
