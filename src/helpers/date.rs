//! Date helper functions

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Format a date as its `YYYY-MM-DD` key.
///
/// The key names the data document (`{key}.json`), the output page
/// (`{key}.html`) and the screenshots link suffix.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a strict `YYYY-MM-DD` date key.
pub fn parse_date_key(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Format a date in the Chinese long form shown in page headers,
/// e.g. `2026年8月22日 星期六`.
pub fn display_date(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday_zh(date)
    )
}

/// Chinese weekday name for a date.
pub fn weekday_zh(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "星期一",
        chrono::Weekday::Tue => "星期二",
        chrono::Weekday::Wed => "星期三",
        chrono::Weekday::Thu => "星期四",
        chrono::Weekday::Fri => "星期五",
        chrono::Weekday::Sat => "星期六",
        chrono::Weekday::Sun => "星期日",
    }
}

/// Current calendar date in the given timezone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(date_key(date), "2026-08-03");
    }

    #[test]
    fn test_parse_date_key() {
        let date = parse_date_key("2026-08-22").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 22).unwrap());

        assert!(parse_date_key("2026/08/22").is_err());
        assert!(parse_date_key("08-22-2026").is_err());
        assert!(parse_date_key("not a date").is_err());
        assert!(parse_date_key("2026-13-01").is_err());
    }

    #[test]
    fn test_display_date() {
        // 2026-08-22 is a Saturday
        let date = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        assert_eq!(display_date(date), "2026年8月22日 星期六");

        // Single-digit month and day are not zero-padded
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(display_date(date), "2025年1月5日 星期日");
    }

    #[test]
    fn test_roundtrip_key() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(date)).unwrap(), date);
    }
}
