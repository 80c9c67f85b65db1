//! # Finviz Screener
//!
//! Builds the "Daily 3% UP" screener query, fetches the page and
//! renders the matching stocks as a plain-text report.

pub mod fetch;
pub mod parse;
pub mod report;
pub mod url;

use thiserror::Error;

pub use fetch::fetch_page;
pub use parse::{parse_results, Stock};
pub use report::render;
pub use url::{build_url, daily_3up_url};

#[derive(Debug, Error)]
pub enum ScreenerError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP status {0}")]
	Status(reqwest::StatusCode),

	#[error("invalid selector `{0}`")]
	Selector(String),
}

/// Fetch the screener page at `url` and parse its result rows.
pub fn fetch_results(url: &str) -> Result<Vec<Stock>, ScreenerError> {
	let html = fetch_page(url)?;
	parse_results(&html)
}
