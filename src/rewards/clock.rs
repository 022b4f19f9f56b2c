//! Calendar clock collaborator
//!
//! All day-rollover logic compares local calendar dates, not elapsed
//! durations: crossing midnight triggers resets regardless of real time.

use chrono::Local;

/// Supplies "today" as a calendar date and "now" as a timestamp
pub trait Clock {
    /// Today's local date as YYYY-MM-DD
    fn today(&self) -> String;

    /// Current timestamp in ms since epoch
    fn now_ms(&self) -> i64;
}

/// System clock backed by the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Check whether `previous` (YYYY-MM-DD) is exactly the day before `today`
pub fn is_yesterday(previous: &str, today: &str) -> bool {
    let Ok(prev) = chrono::NaiveDate::parse_from_str(previous, "%Y-%m-%d") else {
        return false;
    };
    let Ok(now) = chrono::NaiveDate::parse_from_str(today, "%Y-%m-%d") else {
        return false;
    };
    (now - prev).num_days() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yesterday() {
        assert!(is_yesterday("2025-03-01", "2025-03-02"));
        // Month boundary
        assert!(is_yesterday("2025-02-28", "2025-03-01"));
        assert!(!is_yesterday("2025-03-01", "2025-03-03"));
        assert!(!is_yesterday("2025-03-02", "2025-03-02"));
        assert!(!is_yesterday("garbage", "2025-03-02"));
    }

    #[test]
    fn test_system_clock_formats_date() {
        let today = SystemClock.today();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
