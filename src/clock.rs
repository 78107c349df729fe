//! Clock abstraction and the date formats used by the screens.
//!
//! Records are stamped with the current date and appointments are classified
//! against "today at midnight", so every time read goes through [`Clock`].
//! Display dates are free-form strings ("December 19, 2025", "Dec 5, 2025");
//! parsing is lenient and callers decide the fallback.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Day name shown when a date string cannot be parsed.
pub const FALLBACK_WEEKDAY: &str = "Tuesday";

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight on the given date. Returns `None` for an impossible date.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

const DISPLAY_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse a display date in any of the formats the screens produce.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DISPLAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// "Dec 5, 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "December 5, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Fri, Dec 19, 2025"
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Full weekday name for a display date, or [`FALLBACK_WEEKDAY`].
pub fn weekday_name(raw: &str) -> String {
    parse_display_date(raw)
        .map(|d| d.format("%A").to_string())
        .unwrap_or_else(|| FALLBACK_WEEKDAY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_month_names() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        assert_eq!(parse_display_date("December 19, 2025"), Some(expected));
        assert_eq!(parse_display_date("Dec 19, 2025"), Some(expected));
        assert_eq!(parse_display_date("2025-12-19"), Some(expected));
        assert_eq!(parse_display_date("  Dec 19, 2025 "), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_display_date(""), None);
        assert_eq!(parse_display_date("next tuesday"), None);
        assert_eq!(parse_display_date("February 30, 2025"), None);
    }

    #[test]
    fn formats_match_screen_output() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        assert_eq!(format_short_date(date), "Dec 5, 2025");
        assert_eq!(format_long_date(date), "December 5, 2025");
        assert_eq!(format_card_date(date), "Fri, Dec 5, 2025");
    }

    #[test]
    fn weekday_name_with_fallback() {
        assert_eq!(weekday_name("October 19, 2025"), "Sunday");
        assert_eq!(weekday_name("sometime"), FALLBACK_WEEKDAY);
    }

    #[test]
    fn fixed_clock_reports_midnight() {
        let clock = FixedClock::on(2025, 6, 1).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(clock.now().time(), chrono::NaiveTime::MIN);
        assert!(FixedClock::on(2025, 2, 30).is_none());
    }
}
