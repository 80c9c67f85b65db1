//! Scan command - Daily 3% UP screener report on stdout

use anyhow::{Context, Result};

use crate::config::SCANNER_NAME;
use crate::core::{Clock, DateStamp, SystemClock};
use crate::screener::{self, ScreenerError, Stock};
use crate::ui;

pub fn run(json: bool) -> Result<()> {
	let url = screener::daily_3up_url();
	let results = screener::fetch_results(&url);
	let date = DateStamp::new(SystemClock.today());

	print!("{}", output(results, json, &url, &date)?);
	Ok(())
}

/// Stdout text for a fetch outcome.
///
/// A failed fetch still yields a text report, with the error line at the
/// top. In JSON mode the error goes to stderr and stdout is an empty array.
pub fn output(
	results: Result<Vec<Stock>, ScreenerError>,
	json: bool,
	url: &str,
	date: &DateStamp,
) -> Result<String> {
	let mut out = String::new();

	let results = match results {
		Ok(results) => results,
		Err(e) if json => {
			ui::error(&format!("Error fetching results: {}", e));
			Vec::new()
		}
		Err(e) => {
			out.push_str(&format!("Error fetching results: {}\n", e));
			Vec::new()
		}
	};

	if json {
		let mut json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
		json.push('\n');
		return Ok(json);
	}

	out.push_str(&screener::render(&results, url, SCANNER_NAME, date));
	Ok(out)
}
