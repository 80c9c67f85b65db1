//! Screener page download

use reqwest::blocking::Client;
use std::time::Duration;

use super::ScreenerError;
use crate::config::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::ui;

/// GET `url` with a browser user agent; non-2xx responses are errors.
pub fn fetch_page(url: &str) -> Result<String, ScreenerError> {
	let client = Client::builder()
		.user_agent(USER_AGENT)
		.timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
		.build()?;

	ui::debug(&format!("GET {}", url));
	let response = client.get(url).send()?;

	let status = response.status();
	if !status.is_success() {
		return Err(ScreenerError::Status(status));
	}

	Ok(response.text()?)
}
