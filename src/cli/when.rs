use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, ValueEnum};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Resolves an optional date expression ("yesterday", "15/03/2025", ...)
/// against `now`, defaulting to today. Only the calendar day matters, the
/// time-of-day component of the expression is discarded.
pub fn resolve_date(
    input: Option<&str>,
    style: DateStyle,
    now: DateTime<Local>,
) -> Result<NaiveDate> {
    let Some(input) = input else {
        return Ok(now.date_naive());
    };
    match parse_date_string(input, now, style.into()) {
        Ok(v) => Ok(v.with_timezone(&Local).date_naive()),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date \"{input}\" {e}"),
            )
            .into()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};

    use crate::utils::clock::{Clock, MockClock};

    use super::{resolve_date, DateStyle};

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_time().returning(|| {
            Local
                .with_ymd_and_hms(2024, 3, 5, 13, 30, 0)
                .single()
                .unwrap()
        });
        clock
    }

    #[test]
    fn missing_input_defaults_to_today() {
        let clock = fixed_clock();
        let date = resolve_date(None, DateStyle::Uk, clock.time()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn relative_expressions_resolve_against_the_clock() {
        let clock = fixed_clock();
        let date = resolve_date(Some("yesterday"), DateStyle::Uk, clock.time()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn dialect_changes_day_month_order() {
        let clock = fixed_clock();
        let uk = resolve_date(Some("04/03/2024"), DateStyle::Uk, clock.time()).unwrap();
        assert_eq!(uk, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

        let us = resolve_date(Some("04/03/2024"), DateStyle::Us, clock.time()).unwrap();
        assert_eq!(us, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
    }

    #[test]
    fn nonsense_is_an_error() {
        let clock = fixed_clock();
        assert!(resolve_date(Some("the day after the deadline"), DateStyle::Uk, clock.time()).is_err());
    }
}
