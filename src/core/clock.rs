//! Date source for output stamps

use chrono::{Local, NaiveDate};

/// Provides the calendar date used to stamp results.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		Local::now().date_naive()
	}
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}
