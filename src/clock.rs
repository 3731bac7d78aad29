use chrono::{NaiveDate, Utc};

/// Source of "today" for entries submitted without a date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// UTC calendar date from the system (or browser) clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
