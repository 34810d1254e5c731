/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the dashboards
use chrono::{DateTime, Datelike, Month, NaiveDate, Utc};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Month and year of a filter, defaulting to the current month.
pub fn month_or_current(month: Option<u32>, year: Option<i32>, today: NaiveDate) -> (u32, i32) {
    let month = month.filter(|m| (1..=12).contains(m)).unwrap_or(today.month());
    (month, year.unwrap_or(today.year()))
}

/// "January 2024"
pub fn month_display(month: u32, year: i32) -> String {
    let name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string());
    format!("{} {}", name, year)
}

/// Format a millisecond timestamp with a strftime-style pattern.
///
/// d3 time specifiers used by the charts (`%b`, `%Y`, `%m`, `%d`) share their
/// meaning with chrono's.
pub fn format_timestamp_ms(ms: i64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.format(pattern).to_string(),
        None => ms.to_string(),
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_month_or_current() {
        let today = NaiveDate::from_ymd_opt(2019, 7, 10).unwrap();
        assert_eq!(month_or_current(None, None, today), (7, 2019));
        assert_eq!(month_or_current(Some(2), Some(2018), today), (2, 2018));
        assert_eq!(month_or_current(Some(13), None, today), (7, 2019));
    }

    #[test]
    fn test_month_display() {
        assert_eq!(month_display(1, 2024), "January 2024");
        assert_eq!(month_display(12, 2019), "December 2019");
    }

    #[test]
    fn test_format_timestamp_ms() {
        // 2019-02-01T00:00:00Z
        assert_eq!(format_timestamp_ms(1_548_979_200_000, "%b %Y"), "Feb 2019");
        assert_eq!(format_timestamp_ms(1_548_979_200_000, "%m/%d"), "02/01");
    }
}
