//! Path command - show where results for a date are written

use chrono::NaiveDate;

use crate::core::{Clock, DateStamp, SystemClock};

pub fn run(date: Option<NaiveDate>) -> anyhow::Result<()> {
	let date = date.unwrap_or_else(|| SystemClock.today());
	println!("{}", DateStamp::new(date).output_path().display());
	Ok(())
}
