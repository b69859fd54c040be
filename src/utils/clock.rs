use chrono::{DateTime, Local};

/// Represents an entity responsible for providing dates across the
/// application. Keeping it behind a trait lets "today" be fixed in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn time(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}
