//! Source of the current calendar date

use chrono::{Local, NaiveDate};
#[cfg(test)]
use mockall::automock;

/// Provides "today" for newly created items
#[cfg_attr(test, automock)]
pub trait Clock {
    /// Returns the current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local wall-clock date
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
