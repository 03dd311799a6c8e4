//! Day comparison primitives
//!
//! Two deliberately different notions of "the same day" live here.
//! `epoch_day` buckets raw epoch milliseconds into 24h slots counted from
//! 1970-01-01T00:00Z and ignores the observer's time zone. `same_calendar_day`
//! compares year and day-of-year fields on whatever calendar the values carry.
//! Streaks use the former, relative labels the latter.

use chrono::{DateTime, Datelike, TimeZone};

/// Milliseconds in one epoch day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Index of the epoch day containing `instant` (truncating division)
pub fn epoch_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    instant.timestamp_millis() / MILLIS_PER_DAY
}

/// True when both values share year and day-of-year
pub fn same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn test_epoch_day_origin() {
        let origin = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(epoch_day(&origin), 0);

        let last_ms = Utc.with_ymd_and_hms(1970, 1, 1, 23, 59, 59).unwrap();
        assert_eq!(epoch_day(&last_ms), 0);

        let next = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(epoch_day(&next), 1);
    }

    #[test]
    fn test_epoch_day_ignores_observer_zone() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 17, 23, 30, 0).unwrap();
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let local = utc.with_timezone(&tz);

        // Already January 18th on the local calendar, still the same epoch day
        assert_eq!(local.day(), 18);
        assert_eq!(epoch_day(&utc), epoch_day(&local));
    }

    #[test]
    fn test_same_calendar_day() {
        let a = Utc.with_ymd_and_hms(2024, 12, 31, 1, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let c = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert!(same_calendar_day(&a, &b));
        assert!(!same_calendar_day(&b, &c));
    }

    #[test]
    fn test_same_calendar_day_requires_matching_year() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(!same_calendar_day(&a, &b));
    }

    #[test]
    fn test_same_calendar_day_mixes_date_and_datetime() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let moment = Utc.with_ymd_and_hms(2025, 1, 17, 8, 15, 0).unwrap();
        assert!(same_calendar_day(&moment, &date));
    }
}
