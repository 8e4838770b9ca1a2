//! Calendar-day identity.

use chrono::Local;

/// Today's local calendar day as an ISO `YYYY-MM-DD` string.
///
/// Day-granularity only: two calls on the same local calendar day return
/// the same string regardless of time of day. The gate compares these
/// strings for equality and nothing else.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn today_is_iso_date() {
        let day = today();
        assert!(NaiveDate::parse_from_str(&day, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn today_has_no_time_component() {
        let day = today();
        assert_eq!(day.len(), 10);
        assert!(!day.contains(':'));
    }
}
