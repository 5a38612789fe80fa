//! Calendar-date sources for the daily gate

use chrono::{Local, NaiveDate};

/// Source of "today" in the player's local calendar
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// System clock - uses the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
