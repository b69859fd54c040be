use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

/// This is the standard way of converting a date to a string key in
/// mindfultasks. Tasks and mood entries for the same calendar day share the
/// same key regardless of the time of day they were touched.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [date_key]. Only the date component exists, so the parsed value
/// stands for local midnight of that day.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|e| anyhow!("'{key}' is not a YYYY-MM-DD date key: {e}"))
}

/// First day of the given month, or `None` for an invalid year/month pair.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    Some(next?.pred_opt()?.day())
}

/// Column of `date` in a Sunday-first week, 0 = Sunday through 6 = Saturday.
pub fn weekday_column(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use super::{date_key, days_in_month, parse_date_key, weekday_column};

    #[test]
    fn same_day_times_share_a_key() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let morning = NaiveDateTime::new(day, NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        let night = NaiveDateTime::new(day, NaiveTime::from_hms_opt(23, 59, 59).unwrap());

        assert_eq!(date_key(morning.date()), date_key(night.date()));
        assert_eq!(date_key(day), "2024-03-05");
    }

    #[test]
    fn key_round_trips_over_the_date() {
        let day = NaiveDate::from_ymd_opt(2031, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(day)).unwrap(), day);
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(parse_date_key("2024-3-5").is_err());
        assert!(parse_date_key("march 5th").is_err());
        assert!(parse_date_key("").is_err());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn sunday_first_columns() {
        // 2024-02-01 was a Thursday.
        let first = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(weekday_column(first), 4);
        // 2024-03-03 was a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(weekday_column(sunday), 0);
    }
}
