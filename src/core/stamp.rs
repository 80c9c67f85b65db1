//! Date stamp and the names derived from it

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::{COMMIT_PREFIX, DATE_FORMAT, RESULTS_DIR, RESULTS_EXT, RESULTS_PREFIX};

/// Local calendar date formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateStamp(String);

impl DateStamp {
	pub fn new(date: NaiveDate) -> Self {
		Self(date.format(DATE_FORMAT).to_string())
	}

	/// Output file path, relative to the repository root.
	pub fn output_path(&self) -> PathBuf {
		Path::new(RESULTS_DIR).join(format!("{}{}.{}", RESULTS_PREFIX, self.0, RESULTS_EXT))
	}

	pub fn commit_message(&self) -> String {
		format!("{} {}", COMMIT_PREFIX, self.0)
	}
}

impl std::fmt::Display for DateStamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
